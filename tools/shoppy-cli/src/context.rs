//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use shoppy_catalog::CatalogLoader;
use shoppy_commerce::cart::CartStore;
use shoppy_commerce::Currency;

use crate::cart_file::CartFile;
use crate::config::{CliConfig, CONFIG_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Where the configuration came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Cart and search store, restored from the cart file.
    pub store: CartStore,
    /// Cart persistence.
    pub cart_file: CartFile,
}

impl Context {
    /// Load context from config file and restore the saved cart.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => {
                let path = resolve(&cwd, path);
                (CliConfig::load(&path)?, Some(path))
            }
            None => match find_config(&cwd) {
                Some(path) => (CliConfig::load(&path)?, Some(path)),
                None => (CliConfig::default(), None),
            },
        };
        if let Some(path) = &config_path {
            tracing::debug!(path = %path.display(), "loaded config");
        }

        let cart_file = CartFile::new(resolve(&cwd, &config.store.cart_file));
        let mut store = CartStore::new();
        store.set_cart(cart_file.load()?);

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
            store,
            cart_file,
        })
    }

    /// Catalog client built from the `[catalog]` settings.
    pub fn loader(&self) -> Result<CatalogLoader> {
        CatalogLoader::from_config(&self.config.catalog).context("Failed to create catalog client")
    }

    /// Currency prices are shown in.
    pub fn currency(&self) -> Currency {
        self.config.store.currency
    }

    /// Write the current cart back to the cart file.
    pub fn persist_cart(&self) -> Result<()> {
        self.cart_file.save(self.store.state())?;
        tracing::debug!(
            path = %self.cart_file.path().display(),
            entries = self.store.state().len(),
            "saved cart"
        );
        Ok(())
    }
}

/// Find a config file in the directory tree, nearest first.
fn find_config(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .flat_map(|dir| CONFIG_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.is_file())
}

/// Resolve a path relative to the working directory.
fn resolve(cwd: &Path, path: &str) -> PathBuf {
    let path = Path::new(path);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}
