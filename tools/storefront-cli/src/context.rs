//! CLI execution context.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context as _, Result};
use storefront_core::catalog::{Catalog, CatalogProvider, FileCatalog, StaticCatalog};
use storefront_core::Storefront;

use crate::config::CliConfig;
use crate::output::Output;

const CONFIG_NAMES: [&str; 3] = ["storefront.toml", ".storefront.toml", "storefront.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Directory relative catalog paths are resolved against.
    pub base_dir: PathBuf,
    /// Config file in use, if any.
    pub config_path: Option<PathBuf>,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, base_dir, config_path) = if let Some(path) = config_path {
            let dir = Path::new(path)
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(Path::to_path_buf)
                .unwrap_or_else(|| cwd.clone());
            (CliConfig::load(path)?, dir, Some(PathBuf::from(path)))
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd) {
                Some((config, dir, path)) => (config, dir, Some(path)),
                None => (CliConfig::default(), cwd.clone(), None),
            }
        };

        Ok(Self {
            config,
            output,
            base_dir,
            config_path,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(CliConfig, PathBuf, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                        return Some((config, current, config_path));
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Resolve a path relative to the config directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.base_dir.join(path)
        }
    }

    /// Build the catalog from the configured source.
    pub fn catalog(&self) -> Result<Catalog> {
        let provider: Box<dyn CatalogProvider> = match &self.config.catalog.path {
            Some(path) => Box::new(FileCatalog::new(self.resolve_path(path))),
            None => Box::new(StaticCatalog),
        };
        Catalog::load(provider.as_ref()).context("Failed to load catalog")
    }

    /// Start a shopper session over the configured catalog.
    pub fn storefront(&self) -> Result<Storefront> {
        let catalog = Arc::new(self.catalog()?);
        Ok(Storefront::with_criteria(
            catalog,
            self.config.initial_criteria(),
        ))
    }
}
