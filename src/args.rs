//! Positional argument handling for the command-line front end
//!
//! Commands take bare positional values. Required values that are missing
//! become [`Error::Usage`]; numeric values are coerced according to a
//! [`NumericPolicy`].

use crate::student::StudentFields;
use crate::{Error, Result};

/// Usage text printed for malformed invocations
pub const USAGE: &str = "\
Usage:
  students add <name> <grade> [age] [address] [email] [major]
  students list
  students update <id> <name> <grade> [age] [address] [email] [major]
  students delete <id>
  students demo";

/// How to treat a numeric argument that does not parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumericPolicy {
    /// Treat it as `0` and log a warning
    #[default]
    Lenient,
    /// Reject it as a usage error
    Strict,
}

impl NumericPolicy {
    pub fn from_strict(strict: bool) -> Self {
        if strict { Self::Strict } else { Self::Lenient }
    }
}

/// Borrow a required positional value or fail with a usage error
pub fn required<'a>(value: Option<&'a str>, name: &str) -> Result<&'a str> {
    value.ok_or_else(|| Error::Usage(format!("missing required argument <{}>", name)))
}

/// Parse an integer argument under `policy`
pub fn numeric(raw: &str, name: &str, policy: NumericPolicy) -> Result<i64> {
    match raw.trim().parse::<i64>() {
        Ok(value) => Ok(value),
        Err(_) => match policy {
            NumericPolicy::Lenient => {
                tracing::warn!("<{}> value {:?} is not a number, using 0", name, raw);
                Ok(0)
            }
            NumericPolicy::Strict => {
                Err(Error::Usage(format!("<{}> must be an integer, got {:?}", name, raw)))
            }
        },
    }
}

/// Parse a required integer argument
pub fn required_numeric(value: Option<&str>, name: &str, policy: NumericPolicy) -> Result<i64> {
    numeric(required(value, name)?, name, policy)
}

/// Raw positional values for the non-id columns, in command-line order
#[derive(Debug, Clone, Default)]
pub struct RawFields {
    pub name: Option<String>,
    pub grade: Option<String>,
    pub age: Option<String>,
    pub address: Option<String>,
    pub email: Option<String>,
    pub major: Option<String>,
}

impl RawFields {
    /// Build the column values; trailing optional values default to 0 / empty
    pub fn into_fields(self, policy: NumericPolicy) -> Result<StudentFields> {
        let name = required(self.name.as_deref(), "name")?;
        let grade = required(self.grade.as_deref(), "grade")?;
        let age = match self.age.as_deref() {
            Some(raw) => numeric(raw, "age", policy)?,
            None => 0,
        };

        Ok(StudentFields::new(name, grade)
            .age(age)
            .address(self.address.unwrap_or_default())
            .email(self.email.unwrap_or_default())
            .major(self.major.unwrap_or_default()))
    }
}
