//! Core rendering abstractions for folio documents.
//!
//! This crate provides the contract every output backend fulfils:
//! - `DocumentRenderer` trait, writing a paginated document to any `Write`
//! - `PageDirectives`, the page geometry and header settings per page context
//! - `OutputFormat` and the error type for rendering operations
//! - `JsonRenderer`, a backend that dumps the resolved document as JSON

mod error;
mod json;
mod traits;
mod types;

pub use error::RenderError;
pub use json::JsonRenderer;
pub use traits::DocumentRenderer;
pub use types::{OutputFormat, PageDirectives};
