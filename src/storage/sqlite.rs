//! SQLite storage implementation

use std::path::Path;
use rusqlite::{Connection, params};
use crate::Result;
use crate::student::{Student, StudentFields};
use super::schema;

const SELECT_STUDENTS: &str =
    "SELECT id, name, grade, age, address, email, major FROM students";

/// SQLite-backed storage for student records
pub struct StudentStore {
    conn: Connection,
}

impl StudentStore {
    /// Open a database file (creates if doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        tracing::debug!("Opening student store at {}", path.display());
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    /// Close the connection, reporting any failure to release it
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| e.into())
    }

    // ========== Student Operations ==========

    /// Insert a new student and return the id the store assigned
    pub fn add(&self, fields: &StudentFields) -> Result<i64> {
        self.conn.execute(
            r#"
            INSERT INTO students (name, grade, age, address, email, major)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                fields.name,
                fields.grade,
                fields.age,
                fields.address,
                fields.email,
                fields.major,
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(id, name = %fields.name, "inserted student");
        Ok(id)
    }

    /// All students, in whatever order the table scan yields
    pub fn list(&self) -> Result<Vec<Student>> {
        let mut stmt = self.conn.prepare(SELECT_STUDENTS)?;
        let students = stmt
            .query_map([], Self::row_to_student)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        tracing::debug!(count = students.len(), "listed students");
        Ok(students)
    }

    /// Overwrite every non-id column of student `id`.
    ///
    /// Returns the number of rows changed; an unknown id changes nothing
    /// and is not an error.
    pub fn update(&self, id: i64, fields: &StudentFields) -> Result<usize> {
        let affected = self.conn.execute(
            r#"
            UPDATE students
            SET name = ?1, grade = ?2, age = ?3, address = ?4, email = ?5, major = ?6
            WHERE id = ?7
            "#,
            params![
                fields.name,
                fields.grade,
                fields.age,
                fields.address,
                fields.email,
                fields.major,
                id,
            ],
        )?;
        tracing::debug!(id, affected, "updated student");
        Ok(affected)
    }

    /// Remove student `id`. Same zero-rows policy as [`StudentStore::update`].
    pub fn delete(&self, id: i64) -> Result<usize> {
        let affected = self.conn.execute("DELETE FROM students WHERE id = ?1", [id])?;
        tracing::debug!(id, affected, "deleted student");
        Ok(affected)
    }

    /// Helper to convert a row to a Student
    fn row_to_student(row: &rusqlite::Row) -> rusqlite::Result<Student> {
        Ok(Student {
            id: row.get(0)?,
            name: row.get(1)?,
            grade: row.get(2)?,
            age: row.get::<_, Option<i64>>(3)?.unwrap_or_default(),
            address: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
            email: row.get::<_, Option<String>>(5)?.unwrap_or_default(),
            major: row.get::<_, Option<String>>(6)?.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> StudentFields {
        StudentFields::new("Alice", "A")
    }

    #[test]
    fn test_add_then_list() {
        let store = StudentStore::open_in_memory().unwrap();
        let fields = StudentFields::new("Dana", "B")
            .age(21)
            .address("4 Oak Rd")
            .email("dana@example.com")
            .major("History");

        let id = store.add(&fields).unwrap();

        let students = store.list().unwrap();
        assert_eq!(students.len(), 1);
        assert_eq!(students[0], fields.with_id(id));
    }

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let store = StudentStore::open_in_memory().unwrap();
        let a = store.add(&alice()).unwrap();
        let b = store.add(&alice()).unwrap();
        let c = store.add(&StudentFields::new("Charlie", "C")).unwrap();
        assert!(a < b && b < c);

        // Duplicate names and grades are allowed
        let students = store.list().unwrap();
        assert_eq!(students.len(), 3);
        assert_eq!(students.iter().filter(|s| s.name == "Alice").count(), 2);
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let store = StudentStore::open_in_memory().unwrap();
        let first = store.add(&alice()).unwrap();
        store.delete(first).unwrap();
        let second = store.add(&alice()).unwrap();
        assert!(second > first);
    }

    #[test]
    fn test_update_overwrites_fields_keeps_id() {
        let store = StudentStore::open_in_memory().unwrap();
        let id = store.add(&alice().age(30).major("Math")).unwrap();

        let changed = StudentFields::new("Bobby", "A-");
        assert_eq!(store.update(id, &changed).unwrap(), 1);

        let students = store.list().unwrap();
        assert_eq!(students, vec![changed.with_id(id)]);
    }

    #[test]
    fn test_update_is_idempotent() {
        let store = StudentStore::open_in_memory().unwrap();
        let id = store.add(&alice()).unwrap();
        let changed = StudentFields::new("Bobby", "A-").email("bobby@example.com");

        store.update(id, &changed).unwrap();
        let once = store.list().unwrap();
        store.update(id, &changed).unwrap();
        let twice = store.list().unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_delete_is_final() {
        let store = StudentStore::open_in_memory().unwrap();
        let keep = store.add(&StudentFields::new("Bob", "B+")).unwrap();
        let gone = store.add(&alice()).unwrap();

        assert_eq!(store.delete(gone).unwrap(), 1);
        let students = store.list().unwrap();
        assert!(students.iter().all(|s| s.id != gone));
        assert!(students.iter().any(|s| s.id == keep));

        // Deleting again is a silent no-op
        assert_eq!(store.delete(gone).unwrap(), 0);
    }

    #[test]
    fn test_absent_id_is_silent() {
        let store = StudentStore::open_in_memory().unwrap();
        store.add(&alice()).unwrap();
        store.add(&StudentFields::new("Bob", "B+")).unwrap();
        let before = store.list().unwrap();

        assert_eq!(store.update(999, &StudentFields::new("Ghost", "F")).unwrap(), 0);
        assert_eq!(store.delete(999).unwrap(), 0);

        assert_eq!(store.list().unwrap(), before);
    }

    #[test]
    fn test_end_to_end_scenario() {
        let store = StudentStore::open_in_memory().unwrap();

        store.add(&alice()).unwrap();
        let students = store.list().unwrap();
        assert_eq!(students.len(), 1);
        assert_eq!((students[0].id, students[0].name.as_str(), students[0].grade.as_str()), (1, "Alice", "A"));

        store.update(1, &StudentFields::new("Bobby", "A-")).unwrap();
        let students = store.list().unwrap();
        assert_eq!(students.len(), 1);
        assert_eq!((students[0].id, students[0].name.as_str(), students[0].grade.as_str()), (1, "Bobby", "A-"));

        store.delete(1).unwrap();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_null_columns_decode_to_defaults() {
        let store = StudentStore::open_in_memory().unwrap();
        store
            .conn
            .execute("INSERT INTO students (name, grade) VALUES ('Eve', 'B')", [])
            .unwrap();

        let students = store.list().unwrap();
        assert_eq!(students, vec![StudentFields::new("Eve", "B").with_id(1)]);
    }

    #[test]
    fn test_missing_name_is_storage_error() {
        let store = StudentStore::open_in_memory().unwrap();
        let err = store
            .conn
            .execute("INSERT INTO students (grade) VALUES ('A')", [])
            .unwrap_err();
        assert!(matches!(err, rusqlite::Error::SqliteFailure(..)));
    }

    #[test]
    fn test_schema_idempotent_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("students.db");

        let store = StudentStore::open(&path).unwrap();
        let id = store.add(&alice()).unwrap();
        store.close().unwrap();

        let store = StudentStore::open(&path).unwrap();
        store.initialize_schema().unwrap();
        let students = store.list().unwrap();
        assert_eq!(students, vec![alice().with_id(id)]);

        let tables: i64 = store
            .conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'students'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(tables, 1);
    }

    #[test]
    fn test_open_fails_for_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("students.db");
        let err = StudentStore::open(&path).err().unwrap();
        assert!(matches!(err, crate::Error::Storage(_)));
    }
}
