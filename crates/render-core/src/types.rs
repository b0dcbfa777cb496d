use folio_layout::LayoutConfig;
use folio_style::PageLayout;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Html,
    Json,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" | "htm" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format '{other}' (expected html or json)")),
        }
    }
}

/// Page geometry handed to a renderer alongside the document.
///
/// Main pages carry the running header (page counter and section label);
/// cover pages are full-bleed and sit outside the counter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDirectives {
    pub main: PageLayout,
    pub cover: PageLayout,
    pub running_header: bool,
    pub header_height: f32,
}

impl From<&LayoutConfig> for PageDirectives {
    fn from(config: &LayoutConfig) -> Self {
        Self {
            main: config.page,
            cover: config.page.full_bleed(),
            running_header: config.header_height > 0.0,
            header_height: config.header_height,
        }
    }
}

impl Default for PageDirectives {
    fn default() -> Self {
        Self::from(&LayoutConfig::default())
    }
}
