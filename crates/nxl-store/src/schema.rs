use rusqlite::{Connection, OptionalExtension};

use crate::error::{Result, StoreError};

pub const SCHEMA_VERSION: i64 = 1;

pub fn initialize(conn: &Connection) -> Result<()> {
    conn.execute_batch("PRAGMA journal_mode = WAL;")?;
    conn.pragma_update(None, "busy_timeout", 5000)?;

    // embedding_data holds space-separated floats; consumers parse it on read.
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS metadata (
            key   TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS system_symbols (
            public_name    TEXT PRIMARY KEY,
            thing          TEXT NOT NULL,
            embedding_data TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_symbols_thing ON system_symbols(thing);
        ",
    )?;

    // A newer layout is never downgraded.
    if let Some(found) = get_schema_version(conn)?
        && found > SCHEMA_VERSION
    {
        return Err(StoreError::InvalidData(format!(
            "database schema v{found} is newer than supported v{SCHEMA_VERSION}"
        )));
    }

    conn.execute(
        "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?1)",
        [SCHEMA_VERSION.to_string()],
    )?;

    tracing::debug!("symbol store schema ready (v{SCHEMA_VERSION})");
    Ok(())
}

pub fn get_schema_version(conn: &Connection) -> Result<Option<i64>> {
    let raw: Option<String> = conn
        .query_row(
            "SELECT value FROM metadata WHERE key = 'schema_version'",
            [],
            |row| row.get(0),
        )
        .optional()?;
    raw.map(|v| {
        v.parse::<i64>()
            .map_err(|_| StoreError::InvalidData(format!("bad schema_version '{v}'")))
    })
    .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_creates_tables() {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();

        for table in &["system_symbols", "metadata"] {
            let count: i64 = conn
                .query_row(&format!("SELECT count(*) FROM {table}"), [], |row| {
                    row.get(0)
                })
                .unwrap();
            assert!(count >= 0, "table {table} should exist");
        }
    }

    #[test]
    fn test_schema_version_set() {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();

        let version = get_schema_version(&conn).unwrap();
        assert_eq!(version, Some(SCHEMA_VERSION));
    }

    #[test]
    fn test_schema_version_absent_before_write() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE metadata (key TEXT PRIMARY KEY, value TEXT NOT NULL);")
            .unwrap();
        assert_eq!(get_schema_version(&conn).unwrap(), None);
    }

    #[test]
    fn test_schema_version_errors_propagate() {
        let conn = Connection::open_in_memory().unwrap();
        // No metadata table at all is a SQLite error, not "no version".
        assert!(matches!(
            get_schema_version(&conn),
            Err(StoreError::Sqlite(_))
        ));

        initialize(&conn).unwrap();
        conn.execute(
            "UPDATE metadata SET value = 'one' WHERE key = 'schema_version'",
            [],
        )
        .unwrap();
        assert!(matches!(
            get_schema_version(&conn),
            Err(StoreError::InvalidData(_))
        ));
    }

    #[test]
    fn test_initialize_rejects_newer_schema() {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        conn.execute(
            "UPDATE metadata SET value = ?1 WHERE key = 'schema_version'",
            [(SCHEMA_VERSION + 1).to_string()],
        )
        .unwrap();

        let err = initialize(&conn).unwrap_err();
        assert!(err.to_string().contains("newer than supported"), "got: {err}");
        assert_eq!(get_schema_version(&conn).unwrap(), Some(SCHEMA_VERSION + 1));
    }

    #[test]
    fn test_idempotent_initialize() {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        conn.execute(
            "INSERT INTO system_symbols (public_name, thing, embedding_data) VALUES ('is', 'Predicate', '0.1')",
            [],
        )
        .unwrap();
        initialize(&conn).unwrap();

        let count: i64 = conn
            .query_row("SELECT count(*) FROM system_symbols", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1, "re-initializing must keep existing rows");
    }

    #[test]
    fn test_busy_timeout_set() {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();

        let timeout: i64 = conn
            .query_row("PRAGMA busy_timeout", [], |row| row.get(0))
            .unwrap();
        assert_eq!(timeout, 5000, "busy_timeout should be 5000ms");
    }

    #[test]
    fn test_embedding_column_nullable() {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        conn.execute(
            "INSERT INTO system_symbols (public_name, thing) VALUES ('bare', 'Identifier')",
            [],
        )
        .unwrap();
        let embedding: Option<String> = conn
            .query_row(
                "SELECT embedding_data FROM system_symbols WHERE public_name = 'bare'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert!(embedding.is_none());
    }
}
