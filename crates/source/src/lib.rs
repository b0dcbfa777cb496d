//! Edition sources for the pipeline.
//!
//! This crate provides the `EditionSource` trait and the implementations
//! that feed editions into document generation.
//!
//! ## Available Sources
//!
//! - `VecEditionSource`: In-memory editions
//! - `JsonEditionFile`: One edition read from a JSON file
//! - `SnapshotStore`: Curates the latest edition out of exported content snapshots
//!
//! ## Example
//!
//! ```ignore
//! use folio_source::{EditionSource, JsonEditionFile};
//!
//! let mut source = JsonEditionFile::new("edicao.json");
//! while let Some(edition) = source.next_edition() {
//!     println!("Edition {}", edition?.number);
//! }
//! ```

pub mod bbcode;
mod calendar;
mod error;
pub mod snapshot;

pub use calendar::{edition_subtitle, month_name_pt};
pub use error::SourceError;
pub use snapshot::{CurateOptions, SnapshotStore};

use folio_types::Edition;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// A trait for sources that feed editions into the pipeline.
///
/// Returns `None` when the source is exhausted. Each item is a `Result`
/// because sources backed by files or exports can fail per edition.
pub trait EditionSource: Send {
    fn next_edition(&mut self) -> Option<Result<Edition, SourceError>>;

    /// Hint about the total number of editions (for progress reporting).
    ///
    /// Returns `None` if the size is unknown.
    fn size_hint(&self) -> Option<usize> {
        None
    }
}

/// Editions held in memory, handed out in order.
pub struct VecEditionSource {
    editions: std::vec::IntoIter<Edition>,
    total: usize,
}

impl VecEditionSource {
    pub fn new(editions: Vec<Edition>) -> Self {
        Self {
            total: editions.len(),
            editions: editions.into_iter(),
        }
    }

    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn remaining(&self) -> usize {
        self.editions.len()
    }
}

impl EditionSource for VecEditionSource {
    fn next_edition(&mut self) -> Option<Result<Edition, SourceError>> {
        self.editions.next().map(Ok)
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.total)
    }
}

/// A single edition stored as JSON.
pub struct JsonEditionFile {
    path: PathBuf,
    consumed: bool,
}

impl JsonEditionFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            consumed: false,
        }
    }

    /// Reads and parses the file right away.
    pub fn load(&self) -> Result<Edition, SourceError> {
        let file = File::open(&self.path).map_err(|e| SourceError::io(&self.path, e))?;
        let edition: Edition = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| SourceError::json(&self.path, e))?;
        log::debug!(
            "Loaded edition {} ({} articles) from {}",
            edition.number,
            edition.articles.len(),
            self.path.display()
        );
        Ok(edition)
    }
}

impl EditionSource for JsonEditionFile {
    fn next_edition(&mut self) -> Option<Result<Edition, SourceError>> {
        if self.consumed {
            return None;
        }
        self.consumed = true;
        Some(self.load())
    }

    fn size_hint(&self) -> Option<usize> {
        Some(1)
    }
}
