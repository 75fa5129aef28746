//! Students CLI - add, list, update and delete student records

use anyhow::Context;
use clap::error::ErrorKind;
use clap::{Args, Parser, Subcommand};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use students::args::{self, NumericPolicy, RawFields, USAGE};
use students::{config, ui, StudentFields, StudentStore};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "students")]
#[command(version)]
#[command(about = "Student records - create, list, update and delete students in a SQLite table")]
#[command(long_about = r#"
Keeps student records in a single SQLite table.

Example usage:
  students add Alice A 20 "1 Main St" alice@example.com Physics
  students list
  students update 1 Bobby A-
  students delete 1
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the database file (overrides the config file)
    #[arg(short, long, global = true)]
    database: Option<PathBuf>,

    /// Path to the config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print listings as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Reject non-numeric id/age instead of treating them as 0
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a student
    Add {
        #[command(flatten)]
        fields: FieldArgs,
    },

    /// List all students
    List,

    /// Overwrite every field of a student
    Update {
        /// Student id
        #[arg(allow_negative_numbers = true)]
        id: Option<String>,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Delete a student
    Delete {
        /// Student id
        #[arg(allow_negative_numbers = true)]
        id: Option<String>,
    },

    /// Run the demo sequence: add three students, update one, delete one
    Demo,
}

#[derive(Args)]
struct FieldArgs {
    name: Option<String>,
    grade: Option<String>,
    #[arg(allow_negative_numbers = true)]
    age: Option<String>,
    address: Option<String>,
    email: Option<String>,
    major: Option<String>,
}

impl From<FieldArgs> for RawFields {
    fn from(a: FieldArgs) -> Self {
        RawFields {
            name: a.name,
            grade: a.grade,
            age: a.age,
            address: a.address,
            email: a.email,
            major: a.major,
        }
    }
}

/// A fully validated command, ready to run against the store
#[derive(Debug, PartialEq)]
enum Action {
    Add(StudentFields),
    List,
    Update(i64, StudentFields),
    Delete(i64),
    Demo,
}

impl Action {
    fn from_command(command: Option<Commands>, policy: NumericPolicy) -> students::Result<Self> {
        let Some(command) = command else {
            return Err(students::Error::Usage("no command given".to_string()));
        };

        Ok(match command {
            Commands::Add { fields } => Action::Add(RawFields::from(fields).into_fields(policy)?),
            Commands::List => Action::List,
            Commands::Update { id, fields } => {
                let id = args::required_numeric(id.as_deref(), "id", policy)?;
                Action::Update(id, RawFields::from(fields).into_fields(policy)?)
            }
            Commands::Delete { id } => {
                Action::Delete(args::required_numeric(id.as_deref(), "id", policy)?)
            }
            Commands::Demo => Action::Demo,
        })
    }
}

/// Parse the argument vector; `Err` holds the problem to print above the usage text
fn parse_cli<I, T>(argv: I) -> Result<Cli, String>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(argv).map_err(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
        _ => e
            .to_string()
            .lines()
            .next()
            .unwrap_or_default()
            .trim_start_matches("error: ")
            .to_string(),
    })
}

fn main() {
    let cli = match parse_cli(std::env::args_os()) {
        Ok(cli) => cli,
        Err(problem) => {
            ui::usage(&problem, USAGE);
            return;
        }
    };

    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let action = match Action::from_command(cli.command, NumericPolicy::from_strict(cli.strict)) {
        Ok(action) => action,
        Err(e) => {
            ui::usage(&e.to_string(), USAGE);
            return;
        }
    };

    let database = match open_database(cli.database, cli.config) {
        Ok(database) => database,
        Err(e) => fail(e),
    };

    if let Err(e) = run(action, &database, cli.json) {
        fail(e);
    }
}

/// Storage and config failures end the process with a non-zero status
fn fail(err: anyhow::Error) -> ! {
    tracing::debug!("{:?}", err);
    ui::error(&fatal_message(&err));
    std::process::exit(1);
}

/// Context and cause on a single line, e.g. `adding student: <sqlite error>`
fn fatal_message(err: &anyhow::Error) -> String {
    format!("{:#}", err)
}

fn open_database(flag: Option<PathBuf>, config_path: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    let loaded = config::load_config(config_path.as_deref()).context("loading config")?;
    let database = config::resolve_database_path(flag.as_deref(), loaded.as_ref());
    config::ensure_db_dir(&database)
        .with_context(|| format!("creating directory for {}", database.display()))?;
    Ok(database)
}

fn run(action: Action, database: &Path, json: bool) -> anyhow::Result<()> {
    let store = StudentStore::open(database)
        .with_context(|| format!("opening student store at {}", database.display()))?;

    match action {
        Action::Add(fields) => add(&store, &fields)?,
        Action::List => list(&store, json)?,
        Action::Update(id, fields) => update(&store, id, &fields)?,
        Action::Delete(id) => delete(&store, id)?,
        Action::Demo => demo(&store, json)?,
    }

    store.close().context("closing student store")?;
    Ok(())
}

fn add(store: &StudentStore, fields: &StudentFields) -> anyhow::Result<()> {
    let id = store.add(fields).context("adding student")?;
    ui::success(&format!(
        "Student {} with grade {} added successfully (id {}).",
        fields.name, fields.grade, id
    ));
    Ok(())
}

fn list(store: &StudentStore, json: bool) -> anyhow::Result<()> {
    let students = store.list().context("listing students")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&students)?);
        return Ok(());
    }

    ui::header("Students List:");
    if students.is_empty() {
        ui::empty("No students found.");
    } else {
        println!("{}", ui::student_table(&students));
    }
    Ok(())
}

fn update(store: &StudentStore, id: i64, fields: &StudentFields) -> anyhow::Result<()> {
    // Zero affected rows is reported the same as a match
    store.update(id, fields).context("updating student")?;
    ui::success(&format!(
        "Student ID {} updated to {} with grade {}.",
        id, fields.name, fields.grade
    ));
    Ok(())
}

fn delete(store: &StudentStore, id: i64) -> anyhow::Result<()> {
    store.delete(id).context("deleting student")?;
    ui::success(&format!("Student ID {} deleted successfully.", id));
    Ok(())
}

fn demo(store: &StudentStore, json: bool) -> anyhow::Result<()> {
    add(store, &StudentFields::new("Alice", "A"))?;
    add(store, &StudentFields::new("Bob", "B+"))?;
    add(store, &StudentFields::new("Charlie", "C"))?;
    list(store, json)?;

    update(store, 2, &StudentFields::new("Bobby", "A-"))?;
    list(store, json)?;

    delete(store, 1)?;
    list(store, json)
}
