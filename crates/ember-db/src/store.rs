//! Database store wrapper.

use crate::error::{Error, Result};
use log::{debug, info};
use rusqlite::Connection;
use std::path::{Path, PathBuf};

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS savedData (
  hp INTEGER,
  weaponType INTEGER
);

CREATE TABLE IF NOT EXISTS itemRegistry (
  id INTEGER PRIMARY KEY,
  name TEXT,
  power INTEGER
);
"#;

const EXPECTED_COLUMNS: &[(&str, &[&str])] = &[
    ("savedData", &["hp", "weaponType"]),
    ("itemRegistry", &["id", "name", "power"]),
];

/// Handle to the game database file.
///
/// Holds only the location; each operation connects, works, and disconnects.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Open or create the database at the given path and ensure both tables exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let store = Self {
            path: path.as_ref().to_path_buf(),
        };
        let conn = store.connect()?;
        conn.execute_batch(SCHEMA)?;
        verify_schema(&conn)?;
        info!("Database ready at {:?}", store.path);
        Ok(store)
    }

    /// Location of the database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a fresh connection for one operation.
    pub(crate) fn connect(&self) -> Result<Connection> {
        debug!("Opening connection to {:?}", self.path);
        Connection::open(&self.path).map_err(|source| Error::Open {
            path: self.path.clone(),
            source,
        })
    }
}

fn verify_schema(conn: &Connection) -> Result<()> {
    for (table, columns) in EXPECTED_COLUMNS {
        let mut stmt = conn.prepare(&format!("PRAGMA table_info({})", table))?;
        let present = stmt
            .query_map([], |row| row.get::<_, String>(1))?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        for column in columns.iter() {
            if !present.iter().any(|c| c == column) {
                return Err(Error::Schema {
                    table: table.to_string(),
                    column: column.to_string(),
                });
            }
        }
    }
    Ok(())
}
