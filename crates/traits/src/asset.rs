//! AssetProvider trait for checking and locating image assets.
//!
//! The layout core only ever carries asset locators. Providers answer
//! whether a locator points at something real and how an output document
//! should reference it; none of them read image bytes.

use folio_types::AssetRef;
use std::collections::HashSet;
use std::fmt::Debug;
use std::sync::RwLock;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Asset '{path}' is outside the asset root")]
    OutsideRoot { path: String },

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for AssetError {
    fn from(err: std::io::Error) -> Self {
        AssetError::Io(err.to_string())
    }
}

/// A source of truth for asset locators.
///
/// # Implementations
///
/// - `FilesystemAssetProvider` (folio-resource): files under an asset root
/// - [`InMemoryAssetProvider`]: a fixed set of known locators
pub trait AssetProvider: Send + Sync + Debug {
    /// Check whether the asset exists. Remote locators are the renderer's
    /// concern and are reported as existing.
    fn exists(&self, asset: &AssetRef) -> bool;

    /// The reference an output document should use for this asset.
    fn resolve_href(&self, asset: &AssetRef) -> Result<String, AssetError>;

    /// Returns a human-readable name for this provider (for logging/debugging).
    fn name(&self) -> &'static str;

    /// Every locator among `assets` that does not exist, in input order.
    fn missing<'a>(&self, assets: &[&'a AssetRef]) -> Vec<&'a AssetRef> {
        assets.iter().copied().filter(|a| !self.exists(a)).collect()
    }
}

/// A provider backed by a pre-registered set of locators.
#[derive(Debug, Default)]
pub struct InMemoryAssetProvider {
    known: RwLock<HashSet<String>>,
}

impl InMemoryAssetProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a locator as existing.
    ///
    /// Returns `AssetError::Io` if the internal lock is poisoned.
    pub fn add(&self, locator: impl Into<String>) -> Result<(), AssetError> {
        let mut known = self
            .known
            .write()
            .map_err(|_| AssetError::Io("asset registry lock poisoned".to_string()))?;
        known.insert(locator.into());
        Ok(())
    }

    /// Returns 0 if the lock is poisoned.
    pub fn len(&self) -> usize {
        self.known.read().map(|k| k.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AssetProvider for InMemoryAssetProvider {
    fn exists(&self, asset: &AssetRef) -> bool {
        if asset.is_remote() {
            return true;
        }
        self.known
            .read()
            .map(|k| k.contains(asset.as_str()))
            .unwrap_or(false)
    }

    fn resolve_href(&self, asset: &AssetRef) -> Result<String, AssetError> {
        if self.exists(asset) {
            Ok(asset.as_str().to_string())
        } else {
            Err(AssetError::NotFound(asset.as_str().to_string()))
        }
    }

    fn name(&self) -> &'static str {
        "InMemoryAssetProvider"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registered_assets_exist() {
        let provider = InMemoryAssetProvider::new();
        provider.add("capa.jpg").unwrap();

        assert!(provider.exists(&AssetRef::new("capa.jpg")));
        assert!(!provider.exists(&AssetRef::new("logo.png")));
        assert_eq!(provider.len(), 1);
    }

    #[test]
    fn remote_assets_are_not_checked() {
        let provider = InMemoryAssetProvider::new();
        assert!(provider.exists(&AssetRef::new("https://example.org/a.png")));
    }

    #[test]
    fn resolve_reports_not_found() {
        let provider = InMemoryAssetProvider::new();
        let err = provider.resolve_href(&AssetRef::new("x.png")).unwrap_err();
        assert_eq!(err, AssetError::NotFound("x.png".to_string()));
    }

    #[test]
    fn missing_keeps_input_order() {
        let provider = InMemoryAssetProvider::new();
        provider.add("b.png").unwrap();
        let (a, b, c) = (AssetRef::new("a.png"), AssetRef::new("b.png"), AssetRef::new("c.png"));
        let missing = provider.missing(&[&a, &b, &c]);
        assert_eq!(missing, vec![&a, &c]);
    }

    #[test]
    fn test_asset_error_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: AssetError = io_err.into();
        assert!(matches!(err, AssetError::Io(_)));
        assert!(err.to_string().contains("denied"));
    }
}
