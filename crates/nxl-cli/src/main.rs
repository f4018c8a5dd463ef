use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use nxl_core::{
    FlatTripletStatement, WireStatement, core_verb, expand_attribute_list, expand_verb_list,
    modal_verb,
};
use nxl_store::{LAST_SEED_KEY, SeedFile, SymbolStore, parse_embedding, seed, well_known};

#[derive(Parser)]
#[command(name = "nxl", about = "NexusL symbol store and statement tools")]
struct Cli {
    /// Path to the definitions database
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the symbol table and load the well-known symbols
    Setup {
        /// Extra symbols to load from a TOML file
        #[arg(long)]
        seed_file: Option<PathBuf>,
    },

    /// List every stored symbol
    Symbols,

    /// Show one symbol's category and embedding
    Lookup {
        name: String,
    },

    /// Show store statistics
    Stats,

    /// Delete a symbol definition
    Remove {
        name: String,
    },

    /// Insert or replace a symbol definition
    Upsert {
        name: String,
        category: String,
        /// Space-separated floats, e.g. "0.1 0.2 0.3"
        embedding: String,
    },

    /// Expand a composite statement read from a JSON file
    Expand {
        file: PathBuf,

        /// Split into one statement per attribute instead of per verb
        #[arg(long)]
        attributes: bool,
    },

    /// Print the label for a raw verb value
    Verb {
        raw: String,

        /// Treat the value as a core verb instead of a modal verb
        #[arg(long)]
        core: bool,
    },
}

fn db_path(cli: &Cli) -> PathBuf {
    if let Some(path) = &cli.db {
        return path.clone();
    }
    if let Ok(path) = std::env::var("NXL_DB_PATH") {
        return PathBuf::from(path);
    }
    let base = std::env::var("NXL_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("db"));
    base.join("definitions.db")
}

fn open_store(cli: &Cli) -> Result<SymbolStore> {
    let path = db_path(cli);
    SymbolStore::open(&path)
        .with_context(|| format!("failed to open symbol store at {}", path.display()))
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Setup { seed_file } => cmd_setup(&cli, seed_file.as_deref()),
        Commands::Symbols => cmd_symbols(&cli),
        Commands::Lookup { name } => cmd_lookup(&cli, name),
        Commands::Stats => cmd_stats(&cli),
        Commands::Remove { name } => cmd_remove(&cli, name),
        Commands::Upsert {
            name,
            category,
            embedding,
        } => cmd_upsert(&cli, name, category, embedding),
        Commands::Expand { file, attributes } => cmd_expand(file, *attributes),
        Commands::Verb { raw, core } => {
            let label = if *core { core_verb(raw) } else { modal_verb(raw) };
            println!("{label}");
            Ok(())
        }
    }
}

fn cmd_setup(cli: &Cli, seed_file: Option<&Path>) -> Result<()> {
    let store = open_store(cli)?;

    let mut symbols = well_known();
    if let Some(path) = seed_file {
        let file = SeedFile::load(path)
            .with_context(|| format!("failed to load seed file {}", path.display()))?;
        symbols.extend(file.symbols);
    }

    let n = seed(&store, &symbols).context("failed to seed symbols")?;
    tracing::info!("setup wrote {n} symbols");

    print_symbols(&store)
}

fn cmd_symbols(cli: &Cli) -> Result<()> {
    let store = open_store(cli)?;
    print_symbols(&store)
}

fn print_symbols(store: &SymbolStore) -> Result<()> {
    let records = store.lookup_all().context("failed to read symbols")?;
    println!("--- Data in system_symbols ---");
    for r in records {
        println!(
            "Name: {}, Thing: {}, Embedding: {}",
            r.public_name, r.category, r.embedding
        );
    }
    Ok(())
}

fn cmd_lookup(cli: &Cli, name: &str) -> Result<()> {
    let store = open_store(cli)?;
    let Some(record) = store.lookup_by_name(name).context("lookup failed")? else {
        bail!("symbol not found: {name}");
    };
    let vector = record
        .vector()
        .with_context(|| format!("stored embedding for {name} is malformed"))?;

    println!("category: {}", record.category());
    println!("embedding: {vector:?}");
    Ok(())
}

fn cmd_stats(cli: &Cli) -> Result<()> {
    let store = open_store(cli)?;
    let count = store.count().context("failed to count symbols")?;
    let version = store
        .schema_version()
        .context("failed to read schema version")?;
    let last_seed = store
        .get_metadata(LAST_SEED_KEY)
        .context("failed to read metadata")?;

    println!("db:        {}", db_path(cli).display());
    println!("schema:    v{}", version.unwrap_or(0));
    println!("symbols:   {count}");
    println!("last seed: {}", last_seed.as_deref().unwrap_or("never"));
    Ok(())
}

fn cmd_remove(cli: &Cli, name: &str) -> Result<()> {
    let store = open_store(cli)?;
    if !store.remove(name).context("remove failed")? {
        bail!("symbol not found: {name}");
    }
    println!("removed {name}");
    Ok(())
}

fn cmd_upsert(cli: &Cli, name: &str, category: &str, embedding: &str) -> Result<()> {
    parse_embedding(embedding).context("invalid embedding")?;

    let store = open_store(cli)?;
    store
        .upsert(name, category, embedding)
        .with_context(|| format!("failed to store {name}"))?;
    println!("stored {name}");
    Ok(())
}

fn cmd_expand(file: &Path, attributes: bool) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let wire: WireStatement = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse statement in {}", file.display()))?;
    let composite = FlatTripletStatement::try_from(wire)
        .with_context(|| format!("cannot expand statement in {}", file.display()))?;

    if !composite.is_composite() {
        tracing::warn!("statement is already atomic: {composite}");
    }

    let expanded = if attributes {
        expand_attribute_list(&composite)
    } else {
        expand_verb_list(&composite)
    };
    tracing::debug!("expanded into {} statements", expanded.len());

    for stmt in &expanded {
        let line = serde_json::to_string(&WireStatement::from(stmt))
            .context("failed to serialize statement")?;
        println!("{line}");
    }
    Ok(())
}
