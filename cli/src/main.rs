mod cli;
mod commands;
mod output;

use clap::Parser;
use commands::AppContext;
use linkvault::config::Config;
use linkvault::storage::LocalStorage;
use linkvault::LinkStore;
use std::path::Path;

/// Open the storage file, falling back to an in-memory store for this session
fn open_store(path: &Path) -> linkvault::error::Result<LinkStore> {
    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            log::warn!("Could not create {}: {}", parent.display(), e);
        }
    }

    match LocalStorage::init(path) {
        Ok(storage) => Ok(LinkStore::open(storage)),
        Err(e) => {
            log::error!("Error opening storage {}: {}", path.display(), e);
            eprintln!("Warning: storage unavailable, changes will not be saved.");
            LinkStore::init_in_memory()
        }
    }
}

fn main() {
    let args = cli::Cli::parse();

    // Initialize logger
    let mut logger = env_logger::Builder::from_default_env();
    if args.debug {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    // Load configuration
    let cfg = match &args.config {
        Some(config_path) => Config::load_from_path(config_path).unwrap_or_else(|e| {
            eprintln!("Warning: {}; using default configuration", e);
            Config::default()
        }),
        None => Config::load(),
    };

    let db_path = args.db.clone().unwrap_or_else(|| cfg.storage_path());
    let no_color = args.nc || !cfg.color;

    let mut store = match open_store(&db_path) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let mut ctx = AppContext {
        store: &mut store,
        config: &cfg,
        no_color,
    };

    if let Err(e) = args.into_command().execute(&mut ctx) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
