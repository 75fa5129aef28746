//! Student record types

use serde::Serialize;
use tabled::Tabled;

/// A persisted student row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
pub struct Student {
    #[tabled(rename = "ID")]
    pub id: i64,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Grade")]
    pub grade: String,
    #[tabled(rename = "Age")]
    pub age: i64,
    #[tabled(rename = "Address")]
    pub address: String,
    #[tabled(rename = "Email")]
    pub email: String,
    #[tabled(rename = "Major")]
    pub major: String,
}

/// Every column except `id`.
///
/// This is the only input accepted by insert and update, so the id stays
/// under the store's control.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentFields {
    pub name: String,
    pub grade: String,
    pub age: i64,
    pub address: String,
    pub email: String,
    pub major: String,
}

impl StudentFields {
    /// Name and grade only; age is 0 and the text columns are empty
    pub fn new(name: impl Into<String>, grade: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            grade: grade.into(),
            ..Default::default()
        }
    }

    pub fn age(mut self, age: i64) -> Self {
        self.age = age;
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn major(mut self, major: impl Into<String>) -> Self {
        self.major = major.into();
        self
    }

    /// Attach an id, producing the row as the store would return it
    #[cfg(test)]
    pub(crate) fn with_id(self, id: i64) -> Student {
        Student {
            id,
            name: self.name,
            grade: self.grade,
            age: self.age,
            address: self.address,
            email: self.email,
            major: self.major,
        }
    }
}
