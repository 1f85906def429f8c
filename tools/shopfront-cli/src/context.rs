//! CLI execution context.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use shopfront_cache::{Cache, FileStore};
use shopfront_commerce::cart::{CartStore, PricingRules};
use shopfront_commerce::catalog::Catalog;
use shopfront_commerce::currency::CurrencyStore;
use shopfront_commerce::notify::{Severity, ToastQueue};
use shopfront_commerce::persist::StorageKeys;
use shopfront_commerce::wishlist::WishlistStore;

use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Where the config came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// The product catalog.
    pub catalog: Catalog,
    toasts: RefCell<ToastQueue>,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (CliConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };
        tracing::debug!(config = ?config_path, "configuration loaded");

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
            catalog: Catalog::sample(),
            toasts: RefCell::new(ToastQueue::new()),
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(CliConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    match CliConfig::load(config_path.to_str()?) {
                        Ok(config) => return Some((config, config_path)),
                        Err(e) => {
                            tracing::warn!(path = %config_path.display(), error = %e, "skipping unreadable config")
                        }
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }

    /// Path of the state document.
    pub fn storage_path(&self) -> PathBuf {
        self.resolve_path(&self.config.storage.path)
    }

    /// Open the state document.
    pub fn cache(&self) -> Result<Cache<FileStore>> {
        let path = self.storage_path();
        let store = FileStore::open(&path)
            .with_context(|| format!("Failed to open storage: {}", path.display()))?;
        Ok(Cache::new(store))
    }

    pub fn keys(&self) -> StorageKeys {
        StorageKeys::new(&self.config.storage.namespace)
    }

    pub fn pricing(&self) -> PricingRules {
        self.config.pricing.rules()
    }

    pub fn cart(&self) -> Result<CartStore<FileStore>> {
        Ok(CartStore::load(
            self.cache()?,
            &self.keys(),
            self.config.cart.inventory_policy,
        ))
    }

    pub fn wishlist(&self) -> Result<WishlistStore<FileStore>> {
        Ok(WishlistStore::load(self.cache()?, &self.keys()))
    }

    pub fn currency(&self) -> Result<CurrencyStore<FileStore>> {
        Ok(CurrencyStore::load(
            self.cache()?,
            &self.keys(),
            self.config.currency.currency(),
        ))
    }

    /// Queue a toast, shown once the command finishes.
    pub fn toast(&self, severity: Severity, message: impl Into<String>) {
        self.toasts.borrow_mut().push(message, severity);
    }

    /// Print and clear queued toasts.
    pub fn flush_toasts(&self) {
        for toast in self.toasts.borrow_mut().drain() {
            self.output.toast(&toast);
        }
    }
}
