//! Newtype wrappers for anchors and asset locators
//!
//! These keep anchor slugs and asset references from being mixed up with
//! each other or with display text.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// A stable, anchor-safe identifier for an article.
#[derive(Debug, Clone, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slug(Arc<str>);

impl Slug {
    /// Creates a new Slug from an already slugified string
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Returns the string representation of this slug
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The `#slug` fragment used by index links.
    pub fn fragment(&self) -> String {
        format!("#{}", self.0)
    }
}

impl From<String> for Slug {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for Slug {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A locator (path or URL) for an image asset. Never dereferenced by the layout core.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetRef(Arc<str>);

impl AssetRef {
    /// Creates a new AssetRef from a path or URL
    pub fn new(uri: impl Into<Arc<str>>) -> Self {
        Self(uri.into())
    }

    /// Returns the string representation of this locator
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for `http://`, `https://` and `data:` locators.
    pub fn is_remote(&self) -> bool {
        let s = self.0.as_ref();
        s.starts_with("http://") || s.starts_with("https://") || s.starts_with("data:")
    }
}

impl From<String> for AssetRef {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for AssetRef {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl AsRef<str> for AssetRef {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
