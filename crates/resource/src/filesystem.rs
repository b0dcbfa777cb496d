//! Filesystem-based asset provider.
//!
//! Locators are resolved relative to an asset root. Paths that would leave
//! the root (absolute paths, `..` components, symlinks pointing outside)
//! are treated as missing.

use folio_traits::{AssetError, AssetProvider};
use folio_types::AssetRef;
use std::path::{Component, Path, PathBuf};

#[derive(Debug)]
pub struct FilesystemAssetProvider {
    root: PathBuf,
    canonical_root: Option<PathBuf>,
}

impl FilesystemAssetProvider {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        let root = root.as_ref().to_path_buf();
        let canonical_root = root.canonicalize().ok();
        if canonical_root.is_none() {
            log::warn!("Asset root {} does not exist yet", root.display());
        }
        Self {
            root,
            canonical_root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves a locator under the root, or `None` if it would escape it.
    fn resolve_path_safe(&self, locator: &str) -> Option<PathBuf> {
        let relative = Path::new(locator);
        if relative.is_absolute() {
            return None;
        }
        if relative
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)))
        {
            return None;
        }

        let full_path = self.root.join(relative);
        match (full_path.canonicalize(), &self.canonical_root) {
            (Ok(canonical), Some(base)) if canonical.starts_with(base) => Some(canonical),
            // Symlink or similar escaping the root.
            (Ok(_), Some(_)) => None,
            _ => Some(full_path),
        }
    }
}

impl AssetProvider for FilesystemAssetProvider {
    fn exists(&self, asset: &AssetRef) -> bool {
        if asset.is_remote() {
            return true;
        }
        self.resolve_path_safe(asset.as_str())
            .map(|p| p.is_file())
            .unwrap_or(false)
    }

    fn resolve_href(&self, asset: &AssetRef) -> Result<String, AssetError> {
        if asset.is_remote() {
            return Ok(asset.as_str().to_string());
        }
        let path = self
            .resolve_path_safe(asset.as_str())
            .ok_or_else(|| AssetError::OutsideRoot {
                path: asset.as_str().to_string(),
            })?;
        if !path.is_file() {
            return Err(AssetError::NotFound(asset.as_str().to_string()));
        }
        Ok(path.to_string_lossy().into_owned())
    }

    fn name(&self) -> &'static str {
        "FilesystemAssetProvider"
    }
}
