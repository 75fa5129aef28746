use crate::student::Student;
use tabled::{settings::Style, Table};

/// Rounded table of students; empty input renders as an empty string
pub fn student_table(students: &[Student]) -> String {
    if students.is_empty() {
        return String::new();
    }

    Table::new(students).with(Style::rounded()).to_string()
}
