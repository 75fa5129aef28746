//! Storage Layer - SQLite-backed persistence
//!
//! System of record is a single SQLite table:
//! - students(id, name, grade, age, address, email, major)

pub mod schema;
pub mod sqlite;

pub use sqlite::StudentStore;
