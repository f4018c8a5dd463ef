use std::path::Path;

use rusqlite::{Connection, OptionalExtension, params};

use nxl_core::Category;

use crate::error::{Result, StoreError};
use crate::schema;

/// One row of the definition table, embedding still in its stored text form.
#[derive(Clone, Debug, PartialEq)]
pub struct SymbolRecord {
    pub public_name: String,
    pub category: String,
    pub embedding: String,
}

impl SymbolRecord {
    pub fn category(&self) -> Category {
        Category::parse(&self.category)
    }

    pub fn vector(&self) -> Result<Vec<f32>> {
        parse_embedding(&self.embedding)
    }
}

/// A definition with its embedding parsed, ready for semantic resolution.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedSymbol {
    pub public_name: String,
    pub category: Category,
    pub embedding: Vec<f32>,
}

/// Split a space-separated float string into a vector.
/// Empty or blank input is an empty vector.
pub fn parse_embedding(s: &str) -> Result<Vec<f32>> {
    s.split_whitespace()
        .map(|token| {
            token.parse::<f32>().map_err(|e| StoreError::Embedding {
                token: token.to_string(),
                reason: e.to_string(),
            })
        })
        .collect()
}

pub fn format_embedding(values: &[f32]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Keyed table of well-known symbol definitions:
/// public name → (category, embedding).
pub struct SymbolStore {
    conn: Connection,
}

impl SymbolStore {
    /// Open (or create) the store at `path`, creating parent directories.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        schema::initialize(&conn)?;
        tracing::info!("opened symbol store at {}", path.display());
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        schema::initialize(&conn)?;
        Ok(Self { conn })
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    pub fn schema_version(&self) -> Result<Option<i64>> {
        schema::get_schema_version(&self.conn)
    }

    // --- Metadata ---

    pub fn get_metadata(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM metadata WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    pub fn set_metadata(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO metadata (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    // --- Symbols ---

    /// Insert or replace the definition for `name`.
    pub fn upsert(&self, name: &str, category: &str, embedding: &str) -> Result<()> {
        upsert_on(&self.conn, name, category, embedding)
    }

    /// All definitions, in the order they were last written.
    pub fn lookup_all(&self) -> Result<Vec<SymbolRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT public_name, thing, COALESCE(embedding_data, '')
             FROM system_symbols ORDER BY rowid",
        )?;
        let records = stmt
            .query_map([], row_to_record)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(records)
    }

    pub fn lookup_by_name(&self, name: &str) -> Result<Option<SymbolRecord>> {
        let record = self
            .conn
            .query_row(
                "SELECT public_name, thing, COALESCE(embedding_data, '')
                 FROM system_symbols WHERE public_name = ?1",
                [name],
                row_to_record,
            )
            .optional()?;
        Ok(record)
    }

    /// Delete a definition. Returns whether it existed.
    pub fn remove(&self, name: &str) -> Result<bool> {
        let rows = self
            .conn
            .execute("DELETE FROM system_symbols WHERE public_name = ?1", [name])?;
        Ok(rows > 0)
    }

    pub fn count(&self) -> Result<usize> {
        let n: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM system_symbols", [], |row| row.get(0))?;
        Ok(n as usize)
    }

    /// Every definition with its embedding parsed.
    ///
    /// A malformed embedding does not fail the load: it is logged and the
    /// symbol comes back with an empty vector.
    pub fn resolve_all(&self) -> Result<Vec<ResolvedSymbol>> {
        let resolved = self
            .lookup_all()?
            .into_iter()
            .map(|record| {
                let embedding = record.vector().unwrap_or_else(|e| {
                    tracing::warn!(
                        "failed to parse embedding for symbol {}: {e}",
                        record.public_name
                    );
                    Vec::new()
                });
                ResolvedSymbol {
                    category: record.category(),
                    public_name: record.public_name,
                    embedding,
                }
            })
            .collect();
        Ok(resolved)
    }
}

pub(crate) fn upsert_on(conn: &Connection, name: &str, category: &str, embedding: &str) -> Result<()> {
    if name.is_empty() {
        return Err(StoreError::InvalidData("symbol name must not be empty".into()));
    }
    conn.execute(
        "INSERT OR REPLACE INTO system_symbols (public_name, thing, embedding_data)
         VALUES (?1, ?2, ?3)",
        params![name, category, embedding],
    )?;
    Ok(())
}

fn row_to_record(row: &rusqlite::Row<'_>) -> rusqlite::Result<SymbolRecord> {
    Ok(SymbolRecord {
        public_name: row.get(0)?,
        category: row.get(1)?,
        embedding: row.get(2)?,
    })
}
