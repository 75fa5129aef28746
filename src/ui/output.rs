use crate::ui::{theme, Icons};
use owo_colors::OwoColorize;
use std::sync::OnceLock;

static QUIET: OnceLock<bool> = OnceLock::new();

/// `STUDENTS_QUIET=1` silences confirmations; listings still print
pub fn is_quiet() -> bool {
    *QUIET.get_or_init(|| {
        std::env::var("STUDENTS_QUIET")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    })
}

pub fn header(text: &str) {
    println!("{} {}", Icons::STUDENTS, text.style(theme().header.clone()));
}

pub fn success(label: &str) {
    if is_quiet() {
        return;
    }
    println!("{} {}", Icons::CHECK, label.style(theme().success.clone()));
}

pub fn error(label: &str) {
    eprintln!("{} {}", Icons::CROSS, label.style(theme().error.clone()));
}

pub fn warn(label: &str) {
    eprintln!("{} {}", Icons::WARN, label.style(theme().warn.clone()));
}

pub fn empty(text: &str) {
    println!("{} {}", Icons::EMPTY, text.style(theme().empty.clone()));
}

/// A user-input problem followed by the usage text
pub fn usage(problem: &str, text: &str) {
    if !problem.is_empty() {
        warn(problem);
    }
    println!("{}", text.style(theme().usage.clone()));
}
