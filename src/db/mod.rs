// SPDX-License-Identifier: MIT

//! SQLite persistence for the file inventory

use rusqlite::{params, Connection};
use std::path::Path;
use tracing::debug;

use crate::classifier::CategorizedFile;
use crate::Result;

const SCHEMA: &str = r#"
    CREATE TABLE Files (
        Id        INTEGER PRIMARY KEY AUTOINCREMENT,
        FileName  TEXT NOT NULL,
        FilePath  TEXT NOT NULL,
        Size      INTEGER NOT NULL,
        Extension TEXT NOT NULL,
        Category  TEXT NOT NULL
    );
"#;

/// Owns the connection for the duration of one indexing run.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Create a fresh database file at `path`, deleting any previous one
    /// first so every run starts from a clean schema.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            std::fs::remove_file(path)?;
            debug!("Removed stale database at {:?}", path);
        }
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.create_schema()?;
        Ok(db)
    }

    /// Open an in-memory database (for testing)
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.create_schema()?;
        Ok(db)
    }

    fn create_schema(&self) -> Result<()> {
        self.conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    /// Insert every categorized file as one row, all inside a single
    /// transaction. If any insert fails the transaction is dropped without
    /// committing and SQLite rolls the whole batch back, so the table is
    /// never left half-written.
    pub fn insert_files(&mut self, files: &[CategorizedFile]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO Files (FileName, FilePath, Size, Extension, Category)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for file in files {
                let d = &file.descriptor;
                stmt.execute(params![
                    d.name,
                    d.full_path.to_string_lossy(),
                    d.size_bytes as i64,
                    d.extension,
                    file.category.as_str(),
                ])?;
            }
        }
        tx.commit()?;
        Ok(files.len())
    }

    /// Total rows in the inventory.
    pub fn file_count(&self) -> Result<i64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM Files", [], |row| row.get(0))
            .map_err(Into::into)
    }

    /// Row count per category, largest first.
    pub fn category_counts(&self) -> Result<Vec<(String, i64)>> {
        let mut stmt = self.conn.prepare(
            "SELECT Category, COUNT(*) FROM Files GROUP BY Category ORDER BY COUNT(*) DESC",
        )?;
        let counts = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{categorize_files, Category};
    use crate::scanner::FileDescriptor;
    use std::path::PathBuf;

    fn sample(name: &str, ext: &str, size: u64) -> FileDescriptor {
        FileDescriptor {
            name: name.to_string(),
            full_path: PathBuf::from("/tree").join(name),
            size_bytes: size,
            extension: ext.to_string(),
        }
    }

    #[test]
    fn row_count_matches_input_length() {
        let mut db = Database::in_memory().unwrap();
        let files = categorize_files(vec![
            sample("a.jpg", ".jpg", 10),
            sample("b.pdf", ".pdf", 20),
            sample("c", "", 0),
        ]);

        let inserted = db.insert_files(&files).unwrap();

        assert_eq!(inserted, 3);
        assert_eq!(db.file_count().unwrap(), 3);
    }

    #[test]
    fn every_stored_category_is_one_of_the_five_labels() {
        let mut db = Database::in_memory().unwrap();
        let files = categorize_files(vec![
            sample("a.jpg", ".jpg", 1),
            sample("b.docx", ".docx", 2),
            sample("c.xls", ".xls", 3),
            sample("d.pdf", ".pdf", 4),
            sample("e.zip", ".zip", 5),
        ]);
        db.insert_files(&files).unwrap();

        let labels: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
        for (category, count) in db.category_counts().unwrap() {
            assert!(labels.contains(&category.as_str()), "{}", category);
            assert_eq!(count, 1);
        }
    }

    #[test]
    fn ids_increase_in_insertion_order_and_fields_round_trip() {
        let mut db = Database::in_memory().unwrap();
        let files = categorize_files(vec![
            sample("first.gif", ".gif", 7),
            sample("second.xlsx", ".xlsx", 8),
        ]);
        db.insert_files(&files).unwrap();

        let mut stmt = db
            .conn
            .prepare("SELECT Id, FileName, Size, Extension, Category FROM Files ORDER BY Id")
            .unwrap();
        let rows: Vec<(i64, String, i64, String, String)> = stmt
            .query_map([], |row| {
                Ok((
                    row.get(0)?,
                    row.get(1)?,
                    row.get(2)?,
                    row.get(3)?,
                    row.get(4)?,
                ))
            })
            .unwrap()
            .collect::<rusqlite::Result<_>>()
            .unwrap();

        assert_eq!(rows.len(), 2);
        assert!(rows[0].0 < rows[1].0);
        assert_eq!(rows[0].1, "first.gif");
        assert_eq!(rows[0].2, 7);
        assert_eq!(rows[0].3, ".gif");
        assert_eq!(rows[0].4, "Picture");
        assert_eq!(rows[1].4, "Excel Document");
    }

    #[test]
    fn failed_insert_rolls_back_the_whole_batch() {
        let mut db = Database::in_memory().unwrap();
        // Tighten the schema so one row in the batch is guaranteed to be
        // rejected mid-transaction.
        db.conn
            .execute_batch(
                r#"
                DROP TABLE Files;
                CREATE TABLE Files (
                    Id        INTEGER PRIMARY KEY AUTOINCREMENT,
                    FileName  TEXT NOT NULL,
                    FilePath  TEXT NOT NULL,
                    Size      INTEGER NOT NULL,
                    Extension TEXT NOT NULL,
                    Category  TEXT NOT NULL CHECK (Category <> 'Other')
                );
                "#,
            )
            .unwrap();

        let files = categorize_files(vec![
            sample("ok.jpg", ".jpg", 1),
            sample("rejected.bin", ".bin", 2),
            sample("never_reached.pdf", ".pdf", 3),
        ]);

        assert!(db.insert_files(&files).is_err());
        assert_eq!(db.file_count().unwrap(), 0);
    }

    #[test]
    fn create_overwrites_a_previous_database_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let db_path = tmp.path().join("inventory.db");

        let mut db = Database::create(&db_path).unwrap();
        db.insert_files(&categorize_files(vec![sample("a.png", ".png", 1)]))
            .unwrap();
        drop(db);

        // Recreating must start from an empty table, not append.
        let db = Database::create(&db_path).unwrap();
        assert_eq!(db.file_count().unwrap(), 0);
    }
}
