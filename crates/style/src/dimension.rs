//! Page geometry: sizes and margins in points.
use serde::{de, ser::SerializeMap, Deserialize, Deserializer, Serialize, Serializer};

/// Points per centimetre.
pub const PT_PER_CM: f32 = 28.35;
/// Points per millimetre.
pub const PT_PER_MM: f32 = 2.835;

#[derive(Serialize, Debug, Default, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    pub fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub fn zero() -> Self {
        Self::all(0.0)
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    /// CSS shorthand in points, `top right bottom left`.
    pub fn to_css(&self) -> String {
        format!(
            "{}pt {}pt {}pt {}pt",
            self.top, self.right, self.bottom, self.left
        )
    }

    /// Parse a CSS-style length value with optional unit (e.g., "10pt", "5mm", "12")
    fn parse_length(input: &str) -> Result<f32, String> {
        let input = input.trim();
        let units: [(&str, f32); 5] = [
            ("pt", 1.0),
            ("px", 1.0),
            ("in", 72.0),
            ("cm", PT_PER_CM),
            ("mm", PT_PER_MM),
        ];

        for (suffix, factor) in units {
            if let Some(val) = input.strip_suffix(suffix) {
                return val
                    .trim()
                    .parse::<f32>()
                    .map(|v| v * factor)
                    .map_err(|e| format!("Invalid number: {}", e));
            }
        }

        // No unit, assume points
        input
            .parse::<f32>()
            .map_err(|e| format!("Invalid number: {}", e))
    }

    /// Parse CSS-style margin shorthand (1, 2, or 4 values)
    fn parse_shorthand(input: &str) -> Result<Self, String> {
        let values = input
            .split_whitespace()
            .map(Self::parse_length)
            .collect::<Result<Vec<_>, _>>()?;

        match values.as_slice() {
            [all] => Ok(Margins::all(*all)),
            [y, x] => Ok(Margins {
                top: *y,
                right: *x,
                bottom: *y,
                left: *x,
            }),
            [top, right, bottom, left] => Ok(Margins {
                top: *top,
                right: *right,
                bottom: *bottom,
                left: *left,
            }),
            _ => Err(format!(
                "Invalid margin shorthand: expected 1, 2, or 4 values, got {}",
                values.len()
            )),
        }
    }
}

impl<'de> Deserialize<'de> for Margins {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MarginsVisitor;
        impl<'de> de::Visitor<'de> for MarginsVisitor {
            type Value = Margins;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a string like '2cm' or '10pt 20pt' or a map")
            }

            fn visit_str<E>(self, value: &str) -> Result<Margins, E>
            where
                E: de::Error,
            {
                Margins::parse_shorthand(value).map_err(E::custom)
            }

            fn visit_map<A>(self, mut map: A) -> Result<Margins, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut margins = Margins::default();
                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "top" => margins.top = map.next_value()?,
                        "right" => margins.right = map.next_value()?,
                        "bottom" => margins.bottom = map.next_value()?,
                        "left" => margins.left = map.next_value()?,
                        _ => {
                            map.next_value::<de::IgnoredAny>()?;
                        }
                    }
                }
                Ok(margins)
            }
        }
        deserializer.deserialize_any(MarginsVisitor)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PageSize {
    #[default]
    A4,
    A5,
    Letter,
    Custom { width: f32, height: f32 },
}

impl PageSize {
    pub fn dimensions_pt(&self) -> (f32, f32) {
        match self {
            PageSize::A4 => (595.28, 841.89),
            PageSize::A5 => (419.53, 595.28),
            PageSize::Letter => (612.0, 792.0),
            PageSize::Custom { width, height } => (*width, *height),
        }
    }

    /// Value for the CSS `@page { size: ... }` descriptor.
    pub fn to_css(&self) -> String {
        match self {
            PageSize::A4 => "A4".to_string(),
            PageSize::A5 => "A5".to_string(),
            PageSize::Letter => "letter".to_string(),
            PageSize::Custom { width, height } => format!("{}pt {}pt", width, height),
        }
    }

    /// Parse a page size name (e.g., "A4", "Letter")
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.trim().to_lowercase().as_str() {
            "a4" => Ok(PageSize::A4),
            "a5" => Ok(PageSize::A5),
            "letter" => Ok(PageSize::Letter),
            _ => Err(format!("Unknown page size: {}", s)),
        }
    }
}

impl Serialize for PageSize {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            PageSize::A4 => serializer.serialize_str("A4"),
            PageSize::A5 => serializer.serialize_str("A5"),
            PageSize::Letter => serializer.serialize_str("Letter"),
            PageSize::Custom { width, height } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("width", width)?;
                map.serialize_entry("height", height)?;
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for PageSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum PageSizeDef {
            Str(String),
            Map { width: f32, height: f32 },
        }

        match PageSizeDef::deserialize(deserializer)? {
            PageSizeDef::Str(s) => Self::parse(&s).map_err(de::Error::custom),
            PageSizeDef::Map { width, height } => Ok(PageSize::Custom { width, height }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn margins_from_shorthand() {
        let m: Margins = serde_json::from_str("\"2cm\"").unwrap();
        assert!((m.top - 56.7).abs() < 0.01);
        assert_eq!(m.top, m.left);

        let m: Margins = serde_json::from_str("\"10pt 20pt\"").unwrap();
        assert_eq!(m, Margins { top: 10.0, right: 20.0, bottom: 10.0, left: 20.0 });
    }

    #[test]
    fn margins_from_map_ignores_unknown_keys() {
        let m: Margins = serde_json::from_str(r#"{"top": 5, "left": 7, "gutter": 3}"#).unwrap();
        assert_eq!(m.top, 5.0);
        assert_eq!(m.left, 7.0);
        assert_eq!(m.right, 0.0);
    }

    #[test]
    fn margins_reject_three_values() {
        assert!(serde_json::from_str::<Margins>("\"1pt 2pt 3pt\"").is_err());
    }

    #[test]
    fn page_size_round_trips_names() {
        let size: PageSize = serde_json::from_str("\"letter\"").unwrap();
        assert_eq!(size, PageSize::Letter);
        let size: PageSize = serde_json::from_str(r#"{"width": 500, "height": 700}"#).unwrap();
        assert_eq!(size.dimensions_pt(), (500.0, 700.0));
        assert_eq!(size.to_css(), "500pt 700pt");
    }
}
