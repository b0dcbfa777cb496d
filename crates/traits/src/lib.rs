pub mod asset;
pub mod executor;

pub use asset::{AssetError, AssetProvider, InMemoryAssetProvider};
pub use executor::{Executor, SyncExecutor};
