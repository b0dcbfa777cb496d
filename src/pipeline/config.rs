// src/pipeline/config.rs
use crate::error::PipelineError;
use folio_layout::LayoutConfig;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub use folio_render_core::OutputFormat;

/// Reads a `LayoutConfig` from JSON. Missing keys keep their defaults.
pub fn load_layout_config<P: AsRef<Path>>(path: P) -> Result<LayoutConfig, PipelineError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        PipelineError::Config(format!(
            "Failed to read layout config from '{}': {}",
            path.display(),
            e
        ))
    })?;
    let config: LayoutConfig = serde_json::from_reader(BufReader::new(file))?;
    config.validate()?;
    log::debug!("Loaded layout config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn partial_layout_config_keeps_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("layout.json");
        fs::write(&path, r#"{ "fontSize": 12.0 }"#).unwrap();

        let config = load_layout_config(&path).unwrap();
        assert_eq!(config.font_size, 12.0);
        assert_eq!(config.line_height, LayoutConfig::default().line_height);
    }

    #[test]
    fn missing_layout_config_is_a_config_error() {
        let err = load_layout_config("/nonexistent/layout.json").unwrap_err();
        assert!(matches!(err, PipelineError::Config(_)));
    }
}
