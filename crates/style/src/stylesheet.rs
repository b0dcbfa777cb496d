//! The article-type style map and page layout configuration.

use super::dimension::{Margins, PageSize, PT_PER_CM};
use super::text::TextAlign;
use folio_types::Color;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use thiserror::Error;

/// Largest column count an article may request.
pub const MAX_COLUMNS: u8 = 4;

#[derive(Error, Debug)]
pub enum StyleLoadError {
    #[error("I/O error reading style map: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed style map: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Style '{article_type}' asks for {columns} columns; expected 1 to {max}")]
    InvalidColumns {
        article_type: String,
        columns: u8,
        max: u8,
    },
}

/// Visual parameters of one article type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleParams {
    #[serde(alias = "acc")]
    pub accent: Color,
    #[serde(alias = "cols")]
    pub columns: u8,
    #[serde(default)]
    pub align: TextAlign,
}

impl StyleParams {
    /// The style applied to any article type absent from the map.
    pub const FALLBACK: StyleParams = StyleParams {
        accent: Color::gray(0x33),
        columns: 1,
        align: TextAlign::Justify,
    };

    pub const fn new(accent: Color, columns: u8) -> Self {
        Self {
            accent,
            columns,
            align: TextAlign::Justify,
        }
    }

    pub const fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }
}

impl Default for StyleParams {
    fn default() -> Self {
        Self::FALLBACK
    }
}

/// Mapping from article type to visual parameters.
///
/// Keys are matched case-sensitively and exactly as supplied. A map has no
/// mutating methods: build it once and share it (usually as `Arc<StyleMap>`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleMap {
    entries: HashMap<String, StyleParams>,
}

impl StyleMap {
    /// The magazine's stock section styles.
    pub fn builtin() -> Self {
        let entry = |name: &str, hex: (u8, u8, u8), cols: u8| {
            (name.to_string(), StyleParams::new(Color::rgb(hex.0, hex.1, hex.2), cols))
        };
        let mut entries: HashMap<String, StyleParams> = [
            entry("Opinião", (0xd4, 0x23, 0x5a), 1),
            entry("Fatos", (0xd6, 0x28, 0x39), 2),
            entry("Editorial", (0x22, 0x22, 0x22), 1),
            entry("Poesia", (0x9f, 0x42, 0xe0), 1),
            entry("Divulgação científica", (0x00, 0x77, 0xff), 2),
            entry("Humor", (0x00, 0xb6, 0x6d), 2),
            entry("Eventos", (0xe6, 0x8e, 0x00), 2),
            entry("Filosofia", (0x00, 0x5f, 0x99), 2),
            entry("Contra-apologética", (0x95, 0x1d, 0xff), 2),
        ]
        .into_iter()
        .collect();
        if let Some(poetry) = entries.get_mut("Poesia") {
            poetry.align = TextAlign::Center;
        }
        Self { entries }
    }

    pub fn from_json(json: &str) -> Result<Self, StyleLoadError> {
        let map: StyleMap = serde_json::from_str(json)?;
        map.validated()
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, StyleLoadError> {
        let map: StyleMap = serde_json::from_reader(reader)?;
        map.validated()
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, StyleLoadError> {
        let file = File::open(path.as_ref())?;
        let map = Self::from_reader(BufReader::new(file))?;
        log::debug!(
            "Loaded {} article styles from {}",
            map.len(),
            path.as_ref().display()
        );
        Ok(map)
    }

    fn validated(self) -> Result<Self, StyleLoadError> {
        for (article_type, params) in &self.entries {
            if params.columns == 0 || params.columns > MAX_COLUMNS {
                return Err(StyleLoadError::InvalidColumns {
                    article_type: article_type.clone(),
                    columns: params.columns,
                    max: MAX_COLUMNS,
                });
            }
        }
        Ok(self)
    }

    /// Exact, case-sensitive lookup.
    pub fn get(&self, article_type: &str) -> Option<&StyleParams> {
        self.entries.get(article_type)
    }

    pub fn contains(&self, article_type: &str) -> bool {
        self.entries.contains_key(article_type)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Article types in sorted order.
    pub fn types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        types.sort_unstable();
        types
    }
}

impl FromIterator<(String, StyleParams)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (String, StyleParams)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageLayout {
    #[serde(default)]
    pub size: PageSize,
    #[serde(default = "PageLayout::default_margins")]
    pub margins: Margins,
}

impl PageLayout {
    fn default_margins() -> Margins {
        Margins::all(2.0 * PT_PER_CM)
    }

    /// A full-bleed layout with the same size.
    pub fn full_bleed(&self) -> Self {
        Self {
            size: self.size,
            margins: Margins::zero(),
        }
    }

    /// Width and height of the area inside the margins.
    pub fn content_size(&self) -> (f32, f32) {
        let (w, h) = self.size.dimensions_pt();
        (
            (w - self.margins.horizontal()).max(0.0),
            (h - self.margins.vertical()).max(0.0),
        )
    }
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            size: PageSize::A4,
            margins: Self::default_margins(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_short_keys_and_default_alignment() {
        let map = StyleMap::from_json(r##"{"Ensaio": {"acc": "#d62839", "cols": 2}}"##).unwrap();
        let params = map.get("Ensaio").unwrap();
        assert_eq!(params.accent, Color::rgb(0xd6, 0x28, 0x39));
        assert_eq!(params.columns, 2);
        assert_eq!(params.align, TextAlign::Justify);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let map = StyleMap::from_json(r##"{"Ensaio": {"accent": "#000", "columns": 1}}"##).unwrap();
        assert!(map.contains("Ensaio"));
        assert!(!map.contains("ensaio"));
        assert!(!map.contains("Ensaio "));
    }

    #[test]
    fn rejects_out_of_range_columns() {
        let err = StyleMap::from_json(r##"{"Humor": {"accent": "#000", "columns": 0}}"##).unwrap_err();
        assert!(matches!(err, StyleLoadError::InvalidColumns { columns: 0, .. }));
        let err = StyleMap::from_json(r##"{"Humor": {"accent": "#000", "columns": 9}}"##).unwrap_err();
        assert!(err.to_string().contains("Humor"));
    }

    #[test]
    fn rejects_bad_accent() {
        assert!(StyleMap::from_json(r#"{"Humor": {"accent": "red", "columns": 1}}"#).is_err());
    }

    #[test]
    fn builtin_map_centers_poetry() {
        let map = StyleMap::builtin();
        assert_eq!(map.len(), 9);
        assert_eq!(map.get("Poesia").unwrap().align, TextAlign::Center);
        assert_eq!(map.get("Fatos").unwrap().columns, 2);
    }

    #[test]
    fn page_layout_content_size_subtracts_margins() {
        let layout = PageLayout {
            size: PageSize::Custom { width: 500.0, height: 700.0 },
            margins: Margins::all(50.0),
        };
        assert_eq!(layout.content_size(), (400.0, 600.0));
        assert_eq!(layout.full_bleed().content_size(), (500.0, 700.0));
    }
}
