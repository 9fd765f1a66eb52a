use rusqlite::{params, Connection, OptionalExtension, Result};
use std::path::{Path, PathBuf};

/// Key under which the serialized link collection lives
pub const LINKS_KEY: &str = "linkvault_links";

/// Persistent string key/value storage backed by a single SQLite table.
pub struct LocalStorage {
    conn: Connection,
    path: PathBuf,
}

impl LocalStorage {
    pub fn init_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let storage = Self {
            conn,
            path: PathBuf::from(":memory:"),
        };
        storage.setup_tables()?;
        Ok(storage)
    }

    pub fn init(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let storage = Self {
            conn,
            path: path.to_path_buf(),
        };
        storage.setup_tables()?;
        Ok(storage)
    }

    /// Get the storage file path
    pub fn get_path(&self) -> &Path {
        &self.path
    }

    fn setup_tables(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE if not exists storage (
                key text PRIMARY KEY,
                value text NOT NULL
            )",
            [],
        )?;
        Ok(())
    }

    pub fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.conn
            .query_row(
                "SELECT value FROM storage WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
    }

    pub fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO storage (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_none() {
        let storage = LocalStorage::init_in_memory().unwrap();
        assert_eq!(storage.get_item(LINKS_KEY).unwrap(), None);
    }

    #[test]
    fn test_set_overwrites() {
        let storage = LocalStorage::init_in_memory().unwrap();
        storage.set_item(LINKS_KEY, "[]").unwrap();
        storage.set_item(LINKS_KEY, "[1]").unwrap();
        assert_eq!(storage.get_item(LINKS_KEY).unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn test_persists_across_connections() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("links.db");

        {
            let storage = LocalStorage::init(&path).unwrap();
            storage.set_item("k", "v").unwrap();
        }

        let storage = LocalStorage::init(&path).unwrap();
        assert_eq!(storage.get_path(), path.as_path());
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("v"));
    }
}
