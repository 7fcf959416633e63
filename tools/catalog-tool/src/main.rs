use std::fs;
use std::path::{Path, PathBuf};

use catalog_engine::selector::{self, ReferenceLists, SelectorKind};
use catalog_engine::source::{FileSource, HttpSource};
use catalog_engine::{CatalogEngine, CatalogError, EngineConfig, EngineStatus, FilterPatch, SortKey};
use clap::{Args, Parser, Subcommand, ValueEnum};
use gift_common::types::CatalogEntry;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "catalog-tool")]
#[command(about = "Browse a gift market catalog from the command line")]
struct Cli {
    /// Config file (default: ~/.config/gift-catalog/catalog.toml)
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the catalog, apply filters and print the released pages
    Browse(BrowseArgs),
    /// Print a picker reference list in display order
    List {
        #[arg(value_enum)]
        kind: ListKind,
        /// Directory holding collections_list.json, backdrops_list.json, symbols_list.json
        #[arg(long, default_value = ".")]
        dir: PathBuf,
        /// Already selected values, in selection order
        #[arg(long = "selected")]
        selected: Vec<String>,
        #[arg(long)]
        search: Option<String>,
    },
    /// Write a config file with default values
    InitConfig {
        /// Output file (default: ~/.config/gift-catalog/catalog.toml)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

#[derive(Args)]
struct BrowseArgs {
    /// Read the catalog from a JSON file
    #[arg(long, conflicts_with = "url")]
    file: Option<PathBuf>,
    /// Fetch the catalog from a URL
    #[arg(long)]
    url: Option<String>,
    #[arg(long, short, default_value = "")]
    search: String,
    /// none, latest, price-asc, price-desc, id-asc, id-desc, rarity-asc, rarity-desc
    #[arg(long)]
    sort: Option<SortKey>,
    #[arg(long = "collection")]
    collections: Vec<String>,
    #[arg(long = "backdrop")]
    backdrops: Vec<String>,
    #[arg(long = "symbol")]
    symbols: Vec<String>,
    #[arg(long)]
    min_price: Option<String>,
    #[arg(long)]
    max_price: Option<String>,
    /// Pages to release, counting the first
    #[arg(long, default_value_t = 1)]
    pages: usize,
    /// Print the view as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum ListKind {
    Collections,
    Backdrops,
    Symbols,
}

impl From<ListKind> for SelectorKind {
    fn from(kind: ListKind) -> Self {
        match kind {
            ListKind::Collections => SelectorKind::Collection,
            ListKind::Backdrops => SelectorKind::Backdrop,
            ListKind::Symbols => SelectorKind::Symbol,
        }
    }
}

enum Source {
    File(PathBuf),
    Url(String),
}

fn default_config_path() -> Option<PathBuf> {
    let mut p = dirs::config_dir()?;
    p.push("gift-catalog");
    p.push("catalog.toml");
    Some(p)
}

fn load_config(explicit: Option<&Path>) -> Result<EngineConfig, CatalogError> {
    match explicit {
        Some(path) => EngineConfig::from_file(path),
        None => match default_config_path() {
            Some(path) => EngineConfig::from_file_or_default(&path),
            None => Ok(EngineConfig::default()),
        },
    }
}

/// Flags win over the config file; a URL wins over a path.
fn resolve_source(args: &BrowseArgs, config: &EngineConfig) -> Option<Source> {
    if let Some(url) = &args.url {
        return Some(Source::Url(url.clone()));
    }
    if let Some(path) = &args.file {
        return Some(Source::File(path.clone()));
    }
    if let Some(url) = &config.source_url {
        return Some(Source::Url(url.clone()));
    }
    config.source_path.clone().map(Source::File)
}

async fn browse(config: EngineConfig, args: BrowseArgs) -> Result<(), Box<dyn std::error::Error>> {
    let source = resolve_source(&args, &config)
        .ok_or("No catalog source: pass --file or --url, or set one in the config")?;

    let mut engine = CatalogEngine::new(config);
    match &source {
        Source::File(path) => engine.load_from(&FileSource::new(path)).await,
        Source::Url(url) => engine.load_from(&HttpSource::new(url.as_str())).await,
    }

    if engine.status() == EngineStatus::Error {
        let message = engine.error_message().unwrap_or("Failed to load gifts");
        return Err(message.to_string().into());
    }

    let mut patch = FilterPatch::default()
        .search(args.search)
        .collections(args.collections)
        .backdrops(args.backdrops)
        .symbols(args.symbols);
    if let Some(sort) = args.sort {
        patch = patch.sort(sort);
    }
    if let Some(min) = args.min_price {
        patch = patch.price_min(min);
    }
    if let Some(max) = args.max_price {
        patch = patch.price_max(max);
    }
    engine.set_filter_state(patch);
    tracing::debug!(
        records = engine.dataset_len(),
        matches = engine.total_matches(),
        "filters applied"
    );

    for _ in 1..args.pages {
        if !engine.has_more() {
            break;
        }
        engine.load_more();
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&engine.view())?);
        return Ok(());
    }

    if engine.is_empty() {
        println!("Gifts not found");
        return Ok(());
    }

    for entry in engine.visible_entries() {
        print_entry(entry);
    }
    println!(
        "Showing {} of {}{}",
        engine.visible_entries().len(),
        engine.total_matches(),
        if engine.has_more() { " (more available)" } else { "" }
    );
    Ok(())
}

fn print_entry(entry: &CatalogEntry) {
    let stock = if entry.in_stock { "listed" } else { "unlisted" };
    println!(
        "{:>8}  {:<24} {:>10.2} TON  {:<8}  {}",
        entry.id,
        entry.name,
        entry.price,
        stock,
        entry.tags.join(", ")
    );
}

async fn list(
    kind: SelectorKind,
    dir: PathBuf,
    selected: Vec<String>,
    search: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = dir.join(kind.list_file());
    let path = path.as_path();
    let mut lists = ReferenceLists::new();
    let items = lists
        .cache_mut(kind)
        .get_or_load_async(move || async move {
            let bytes = tokio::fs::read(path).await.map_err(|e| {
                CatalogError::SourceUnavailable(format!("{}: {}", path.display(), e))
            })?;
            selector::parse_selector_list(&bytes)
        })
        .await?;

    let ordered = selector::order_for_display(kind, &items, &selected);
    for item in selector::search_items(&ordered, search.as_deref().unwrap_or("")) {
        let id = kind.identifier(item);
        let mark = if selected.iter().any(|s| s == id) { "x" } else { " " };
        println!("[{}] {}", mark, item.name);
    }
    Ok(())
}

fn init_config(output: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let path = output
        .or_else(default_config_path)
        .ok_or("Could not find config directory")?;
    if path.exists() {
        return Err(format!("Refusing to overwrite {}", path.display()).into());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, toml::to_string(&EngineConfig::default())?)?;
    println!("Config written to: {}", path.display());
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Browse(args) => {
            let config = load_config(cli.config.as_deref())?;
            browse(config, args).await
        }
        Commands::List {
            kind,
            dir,
            selected,
            search,
        } => list(kind.into(), dir, selected, search).await,
        Commands::InitConfig { output } => init_config(output),
    }
}
