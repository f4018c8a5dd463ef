pub mod error;
pub mod schema;
pub mod seed;
pub mod store;

pub use error::{Result, StoreError};
pub use seed::{LAST_SEED_KEY, SeedFile, SeedSymbol, seed, well_known};
pub use store::{ResolvedSymbol, SymbolRecord, SymbolStore, format_embedding, parse_embedding};
