//! Bootstrap data for the symbol definition store.
//!
//! The built-in set mirrors the handful of scopes, predicates and
//! identifiers every NexusL program starts from. Extra symbols can be
//! supplied in a TOML seed file:
//!
//! ```toml
//! [[symbol]]
//! name = "Car"
//! category = "Identifier"
//! embedding = "0.01 0.02 0.03"
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, StoreError};
use crate::store::{SymbolStore, parse_embedding, upsert_on};

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SeedSymbol {
    pub name: String,
    pub category: String,
    /// Space-separated floats, stored verbatim.
    #[serde(default)]
    pub embedding: String,
}

impl SeedSymbol {
    pub fn new(name: &str, category: &str, embedding: &str) -> Self {
        Self {
            name: name.to_string(),
            category: category.to_string(),
            embedding: embedding.to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SeedFile {
    #[serde(default, rename = "symbol")]
    pub symbols: Vec<SeedSymbol>,
}

impl SeedFile {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

pub fn well_known() -> Vec<SeedSymbol> {
    [
        ("fact", "TripletScope", "0.1 0.2 0.3"),
        ("program", "TripletScope", "0.4 0.5 0.6"),
        ("func", "TripletScope", "0.7 0.8 0.9"),
        ("service", "TripletScope", "1.0 1.1 1.2"),
        ("var", "TripletScope", "1.3 1.4 1.5"),
        ("is", "Predicate", "0.11 0.22 0.33"),
        ("has:", "Predicate", "0.44 0.55 0.66"),
        ("do:", "Predicate", "0.77 0.88 0.99"),
        ("how::", "Predicate", "1.01 1.12 1.23"),
        ("Car", "Identifier", "0.01 0.02 0.03"),
        ("symbol", "Identifier", "0.04 0.05 0.06"),
    ]
    .into_iter()
    .map(|(name, category, embedding)| SeedSymbol::new(name, category, embedding))
    .collect()
}

/// Metadata key holding the size of the most recent seed batch.
pub const LAST_SEED_KEY: &str = "last_seed_count";

/// Write every symbol in one transaction. Re-seeding replaces existing
/// definitions, so running it twice leaves the same table.
///
/// Embeddings are validated up front; a malformed one aborts the whole
/// batch before anything is written.
pub fn seed(store: &SymbolStore, symbols: &[SeedSymbol]) -> Result<usize> {
    for sym in symbols {
        parse_embedding(&sym.embedding).map_err(|e| {
            StoreError::InvalidData(format!("symbol '{}': {e}", sym.name))
        })?;
    }

    let tx = store.conn().unchecked_transaction()?;
    for sym in symbols {
        upsert_on(&tx, &sym.name, &sym.category, &sym.embedding)?;
    }
    tx.commit()?;
    store.set_metadata(LAST_SEED_KEY, &symbols.len().to_string())?;

    tracing::info!("seeded {} symbols", symbols.len());
    Ok(symbols.len())
}
