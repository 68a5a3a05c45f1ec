//! Common CLI utility functions shared across commands.

use std::path::Path;

use agent_map_core::{Config, FormSession, JsonFileStore, RecordStore, SqliteStore, StoreBackend};
use anyhow::{Result, bail};
use tracing::{info, warn};

use crate::cli::Args;

pub type Session = FormSession<Box<dyn RecordStore>>;

/// Load the config file, falling back to defaults when it is missing or invalid
pub fn load_config(path: &Path) -> Config {
    if !path.exists() {
        info!("No config at {}, using defaults", path.display());
        return Config::default();
    }
    match Config::load(path) {
        Ok(config) => {
            info!("Loaded config from {}", path.display());
            config
        }
        Err(e) => {
            warn!("Failed to load config: {}, using defaults", e);
            Config::default()
        }
    }
}

/// Config file plus command-line overrides
pub fn resolve_config(args: &Args) -> Config {
    let mut config = load_config(&args.config);
    if let Some(store) = &args.store {
        config.store.path = store.clone();
    }
    if let Some(backend) = args.backend {
        config.store.backend = backend;
    }
    config
}

pub fn open_store(config: &Config) -> Result<Box<dyn RecordStore>> {
    let path = &config.store.path;
    Ok(match config.store.backend {
        StoreBackend::Json => Box::new(JsonFileStore::open(path)),
        StoreBackend::Sqlite => Box::new(SqliteStore::open(path)?),
    })
}

pub fn open_session(config: &Config) -> Result<Session> {
    Ok(FormSession::new(open_store(config)?))
}

/// Open an associate that must already exist
pub fn open_existing(session: &mut Session, name: &str) -> Result<()> {
    if !session.store().contains(name.trim())? {
        bail!("No associate named {:?}", name.trim());
    }
    session.open(name)?;
    Ok(())
}
