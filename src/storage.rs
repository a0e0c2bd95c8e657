use crate::record::Record;
use rusqlite::{params_from_iter, Connection};
use std::error::Error as StdError;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Where ingested records end up.
pub trait RecordStore {
    type Error: StdError + 'static;

    /// Replaces `table` with `records`, returning the number of rows written.
    fn save(&mut self, table: &str, columns: &[String], records: &[Record]) -> Result<usize, Self::Error>;
}

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("invalid table layout: {0}")]
    InvalidLayout(String),
}

/// A [`RecordStore`] writing every source into its own SQLite table of `TEXT` columns.
pub struct SqliteStore {
    connection: Connection,
}

impl SqliteStore {
    /// Opens a database given as URL, bare path or `:memory:`.
    ///
    /// URLs follow the usual SQLite convention: `sqlite:///test.db` is the relative path
    /// `test.db`, `sqlite:////tmp/test.db` the absolute path `/tmp/test.db` and `sqlite://` an
    /// in-memory database.
    pub fn open(database: &str) -> StorageResult<Self> {
        let path = match database.strip_prefix("sqlite://") {
            Some(rest) => rest.strip_prefix('/').unwrap_or(rest),
            None => database,
        };
        if path.is_empty() || path == ":memory:" {
            return Self::open_in_memory();
        }
        Ok(Self { connection: Connection::open(Path::new(path))? })
    }

    pub fn open_in_memory() -> StorageResult<Self> {
        Ok(Self { connection: Connection::open_in_memory()? })
    }

    pub fn row_count(&self, table: &str) -> StorageResult<usize> {
        let sql = format!("SELECT COUNT(*) FROM {}", quote_identifier(table));
        let count: i64 = self.connection.query_row(&sql, [], |row| row.get(0))?;
        Ok(usize::try_from(count).unwrap_or_default())
    }

    /// Returns all rows of `table` in insertion order.
    pub fn rows(&self, table: &str) -> StorageResult<Vec<Record>> {
        let sql = format!("SELECT * FROM {} ORDER BY rowid", quote_identifier(table));
        let mut statement = self.connection.prepare(&sql)?;
        let width = statement.column_count();
        let rows = statement
            .query_map([], |row| {
                (0..width).map(|i| row.get::<_, String>(i)).collect::<rusqlite::Result<Record>>()
            })?
            .collect::<rusqlite::Result<Vec<Record>>>()?;
        Ok(rows)
    }
}

impl RecordStore for SqliteStore {
    type Error = StorageError;

    fn save(&mut self, table: &str, columns: &[String], records: &[Record]) -> StorageResult<usize> {
        if columns.is_empty() {
            return Err(StorageError::InvalidLayout(format!("table '{table}' has no columns")));
        }
        if let Some(record) = records.iter().find(|record| record.len() != columns.len()) {
            return Err(StorageError::InvalidLayout(format!(
                "record {record} does not match {} columns of table '{table}'",
                columns.len(),
            )));
        }

        let table_name = quote_identifier(table);
        let column_defs = columns
            .iter()
            .map(|column| format!("{} TEXT", quote_identifier(column)))
            .collect::<Vec<_>>()
            .join(", ");
        let placeholders = vec!["?"; columns.len()].join(", ");

        let transaction = self.connection.transaction()?;
        transaction.execute(&format!("DROP TABLE IF EXISTS {table_name}"), [])?;
        transaction.execute(&format!("CREATE TABLE {table_name} ({column_defs})"), [])?;
        {
            let mut insert = transaction.prepare(&format!("INSERT INTO {table_name} VALUES ({placeholders})"))?;
            for record in records {
                insert.execute(params_from_iter(record.fields()))?;
            }
        }
        transaction.commit()?;

        info!(table, rows = records.len(), "persisted records");
        Ok(records.len())
    }
}

fn quote_identifier(identifier: &str) -> String {
    format!("\"{}\"", identifier.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::record;

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test_log::test]
    fn records_are_saved_in_order() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let records = vec![record(&["1", "Apple"]), record(&["2", "Banana"])];

        let saved = store.save("products", &columns(&["id", "name"]), &records).unwrap();

        assert_eq!(saved, 2);
        assert_eq!(store.row_count("products").unwrap(), 2);
        assert_eq!(store.rows("products").unwrap(), records);
    }

    #[test_log::test]
    fn saving_replaces_existing_table() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store.save("products", &columns(&["id", "name"]), &[record(&["1", "Apple"])]).unwrap();
        store.save("products", &columns(&["line"]), &[record(&["a"]), record(&["b"])]).unwrap();

        assert_eq!(store.rows("products").unwrap(), vec![record(&["a"]), record(&["b"])]);
    }

    #[test_log::test]
    fn identifiers_are_quoted() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let saved = store
            .save("my \"table\"", &columns(&["select", "unit price"]), &[record(&["x", "1.5"])])
            .unwrap();
        assert_eq!(saved, 1);
        assert_eq!(store.row_count("my \"table\"").unwrap(), 1);
    }

    #[test_log::test]
    fn mismatched_record_is_rejected() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let result = store.save("products", &columns(&["id", "name"]), &[record(&["1"])]);
        assert!(
            matches!(result, Err(StorageError::InvalidLayout(_))),
            "Expected short record to be rejected: {:?}", result,
        );
    }

    #[test_log::test]
    fn duplicate_columns_are_a_database_error() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let result = store.save("products", &columns(&["id", "id"]), &[record(&["1", "2"])]);
        assert!(
            matches!(result, Err(StorageError::Sqlite(_))),
            "Expected duplicate column to be rejected: {:?}", result,
        );
    }

    #[test]
    fn database_urls_and_paths_are_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.db");

        let mut store = SqliteStore::open(&format!("sqlite:///{}", path.display())).unwrap();
        store.save("t", &columns(&["line"]), &[record(&["a"])]).unwrap();
        drop(store);

        let store = SqliteStore::open(path.to_str().unwrap()).unwrap();
        assert_eq!(store.row_count("t").unwrap(), 1);

        assert!(SqliteStore::open("sqlite://:memory:").is_ok(), "Expected in-memory url to open");
    }
}
