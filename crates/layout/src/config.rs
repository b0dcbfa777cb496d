use crate::LayoutError;
use folio_style::PageLayout;
use serde::{Deserialize, Serialize};

/// Geometry used to estimate how many pages each block occupies.
///
/// All lengths are in points. The defaults describe an A4 page with 2cm
/// margins set in a 10.5pt serif, close to what the HTML stylesheet produces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    pub page: PageLayout,
    /// Height reserved at the top of every main page for the running header.
    pub header_height: f32,
    pub font_size: f32,
    /// Line height as a multiple of `font_size`.
    pub line_height: f32,
    /// Average glyph advance as a fraction of `font_size`.
    pub glyph_width_em: f32,
    pub column_gap: f32,
    /// Title band at the start of an article. Spans all columns.
    pub article_heading_height: f32,
    /// Author box closing an article.
    pub author_box_height: f32,
    pub index_heading_height: f32,
    pub index_entry_height: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page: PageLayout::default(),
            header_height: 24.0,
            font_size: 10.5,
            line_height: 1.4,
            glyph_width_em: 0.5,
            column_gap: 14.0,
            article_heading_height: 140.0,
            author_box_height: 60.0,
            index_heading_height: 80.0,
            index_entry_height: 20.0,
        }
    }
}

impl LayoutConfig {
    pub fn line_advance(&self) -> f32 {
        self.font_size * self.line_height
    }

    /// Usable height of one column on a main page, below the header band.
    pub fn column_height(&self) -> f32 {
        let (_, h) = self.page.content_size();
        (h - self.header_height).max(0.0)
    }

    /// Width of one column when the content area is split into `columns`.
    pub fn column_width(&self, columns: u8) -> f32 {
        let (w, _) = self.page.content_size();
        let n = f32::from(columns.max(1));
        ((w - self.column_gap * (n - 1.0)) / n).max(0.0)
    }

    /// Rough number of characters set on one line of a column.
    pub fn chars_per_line(&self, columns: u8) -> usize {
        let glyph = self.font_size * self.glyph_width_em;
        if glyph <= 0.0 {
            return 1;
        }
        ((self.column_width(columns) / glyph).floor() as usize).max(1)
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        let positive = [
            ("fontSize", self.font_size),
            ("lineHeight", self.line_height),
            ("glyphWidthEm", self.glyph_width_em),
            ("indexEntryHeight", self.index_entry_height),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(LayoutError::InvalidConfig(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        let non_negative = [
            ("headerHeight", self.header_height),
            ("columnGap", self.column_gap),
            ("articleHeadingHeight", self.article_heading_height),
            ("authorBoxHeight", self.author_box_height),
            ("indexHeadingHeight", self.index_heading_height),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(LayoutError::InvalidConfig(format!(
                    "{name} must not be negative, got {value}"
                )));
            }
        }
        if self.column_height() < self.line_advance() {
            return Err(LayoutError::InvalidConfig(
                "page content area is shorter than one line".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_style::{Margins, PageSize};

    fn small_page() -> LayoutConfig {
        LayoutConfig {
            page: PageLayout {
                size: PageSize::Custom { width: 300.0, height: 400.0 },
                margins: Margins::all(50.0),
            },
            header_height: 20.0,
            column_gap: 10.0,
            ..LayoutConfig::default()
        }
    }

    #[test]
    fn column_geometry() {
        let config = small_page();
        assert_eq!(config.column_height(), 280.0);
        assert_eq!(config.column_width(1), 200.0);
        assert_eq!(config.column_width(2), 95.0);
    }

    #[test]
    fn chars_per_line_uses_glyph_width() {
        let config = LayoutConfig {
            font_size: 10.0,
            glyph_width_em: 0.5,
            ..small_page()
        };
        assert_eq!(config.chars_per_line(1), 40);
        assert_eq!(config.chars_per_line(2), 19);
    }

    #[test]
    fn deserializes_partial_json_with_defaults() {
        let config: LayoutConfig =
            serde_json::from_str(r#"{"fontSize": 12, "page": {"size": "A5"}}"#).unwrap();
        assert_eq!(config.font_size, 12.0);
        assert_eq!(config.page.size, PageSize::A5);
        assert_eq!(config.line_height, LayoutConfig::default().line_height);
    }

    #[test]
    fn default_is_valid() {
        assert!(LayoutConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_zero_font_size() {
        let config = LayoutConfig {
            font_size: 0.0,
            ..LayoutConfig::default()
        };
        assert!(matches!(config.validate(), Err(LayoutError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_page_too_short_for_a_line() {
        let config = LayoutConfig {
            header_height: 5000.0,
            ..LayoutConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
