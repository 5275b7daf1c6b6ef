//! Configuration loading with command line overrides

use anyhow::{Context, Result};
use lectern_config::LecternConfig;
use lectern_core::LookupResolver;
use lectern_sqlite::SqliteTranslationStore;
use std::sync::Arc;

use crate::cli::Cli;

/// Load the config file (or defaults) and apply global flag overrides
pub fn load(cli: &Cli) -> Result<LecternConfig> {
    let mut config = LecternConfig::load(cli.config.as_deref())
        .context("Failed to load configuration")?;

    if let Some(data_dir) = &cli.data_dir {
        config.storage.data_dir = data_dir.clone();
    }

    Ok(config)
}

/// Discover translations and build the resolver every command shares
pub fn open_resolver(config: &LecternConfig) -> Result<LookupResolver> {
    let store = SqliteTranslationStore::open(&config.storage).with_context(|| {
        format!(
            "Failed to open translations in {}",
            config.storage.data_dir.display()
        )
    })?;
    tracing::info!(
        data_dir = %config.storage.data_dir.display(),
        translations = store.registry().len(),
        "Discovered translations"
    );
    Ok(LookupResolver::new(Arc::new(store)))
}
