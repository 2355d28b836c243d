//! Cart persistence between runs.
//!
//! The cart store itself keeps nothing on disk. This file holds the items
//! mapping as JSON; it is read once at start-up and handed to the store's
//! replace-all operation, and rewritten after each command that changes the
//! cart.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use shoppy_commerce::cart::{CartItems, CartState};

/// JSON file holding the cart items.
#[derive(Debug, Clone)]
pub struct CartFile {
    path: PathBuf,
}

impl CartFile {
    /// Use the file at `path`; it need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read saved items. A missing file means there is no saved cart.
    pub fn load(&self) -> Result<Option<CartItems>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read cart file: {}", self.path.display()))
            }
        };
        let items = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse cart file: {}", self.path.display()))?;
        Ok(Some(items))
    }

    /// Write the items of `state`, creating parent directories as needed.
    pub fn save(&self, state: &CartState) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(&state.items)?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write cart file: {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shoppy_commerce::prelude::*;

    #[test]
    fn test_missing_file_is_no_cart() {
        let dir = tempfile::tempdir().unwrap();
        let file = CartFile::new(dir.path().join("cart.json"));
        assert!(file.load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_restore_through_set_cart() {
        let dir = tempfile::tempdir().unwrap();
        let file = CartFile::new(dir.path().join("nested").join("cart.json"));

        let mut store = CartStore::new();
        store.add_to_cart(ProductSummary::new(ProductId::new(3), "Lamp", 12.5));
        store.add_to_cart(ProductSummary::new(ProductId::new(1), "Mug", 4.0));
        store.increment_quantity(ProductId::new(3));
        file.save(store.state()).unwrap();

        let mut restored = CartStore::new();
        restored.set_cart(file.load().unwrap());
        assert_eq!(restored.state().items, store.state().items);
        let order: Vec<u64> = restored.state().items.keys().map(|id| id.get()).collect();
        assert_eq!(order, vec![3, 1]);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");
        fs::write(&path, "not json").unwrap();
        assert!(CartFile::new(path).load().is_err());
    }
}
