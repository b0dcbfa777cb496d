//! Total lookup from article type to style parameters.

use crate::stylesheet::{StyleMap, StyleParams};
use serde::Serialize;
use std::sync::Arc;

/// Where a resolved style came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleSource {
    /// An exact entry in the style map.
    Mapped,
    /// The type had no entry; [`StyleParams::FALLBACK`] was used.
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedStyle {
    pub params: StyleParams,
    pub source: StyleSource,
}

impl ResolvedStyle {
    pub fn is_fallback(&self) -> bool {
        self.source == StyleSource::Fallback
    }
}

/// Resolves article types against a shared, read-only [`StyleMap`].
///
/// Resolution never fails: a type missing from the map gets the fallback
/// style. The resolver itself has no side effects; callers that want to
/// report unknown types inspect [`ResolvedStyle::source`].
#[derive(Debug, Clone)]
pub struct StyleResolver {
    map: Arc<StyleMap>,
}

impl StyleResolver {
    pub fn new(map: Arc<StyleMap>) -> Self {
        Self { map }
    }

    pub fn map(&self) -> &StyleMap {
        &self.map
    }

    pub fn resolve(&self, article_type: &str) -> StyleParams {
        self.resolve_with_source(article_type).params
    }

    pub fn resolve_with_source(&self, article_type: &str) -> ResolvedStyle {
        match self.map.get(article_type) {
            Some(params) => ResolvedStyle {
                params: *params,
                source: StyleSource::Mapped,
            },
            None => ResolvedStyle {
                params: StyleParams::FALLBACK,
                source: StyleSource::Fallback,
            },
        }
    }
}
