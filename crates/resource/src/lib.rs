//! Asset providers for the folio pipeline.
//!
//! - [`FilesystemAssetProvider`]: assets under a local directory
//! - [`InMemoryAssetProvider`]: re-exported from folio-traits

mod filesystem;

pub use filesystem::FilesystemAssetProvider;

pub use folio_traits::InMemoryAssetProvider;
