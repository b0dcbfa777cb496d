#![allow(dead_code)]

pub mod fixtures;

use folio::{OutputFormat, Pipeline, PipelineBuilder, PipelineError};
use folio_executor::ExecutorImpl;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A sequential pipeline with the stock style map.
pub fn pipeline(format: OutputFormat) -> Result<Pipeline, PipelineError> {
    PipelineBuilder::new()
        .with_output_format(format)
        .with_executor(ExecutorImpl::sequential())
        .build()
}

/// Generates one edition in memory and returns the output as text.
pub fn generate_string(
    pipeline: &Pipeline,
    edition: &folio::Edition,
) -> Result<String, Box<dyn std::error::Error>> {
    let mut buffer = Vec::new();
    pipeline.generate(edition, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

/// Byte offset of `needle` in `haystack`, panicking with a readable message.
pub fn position(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("'{needle}' not found in output"))
}
