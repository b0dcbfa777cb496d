//! HTML renderer for folio documents.
//!
//! Produces a single self-contained HTML file whose stylesheet carries CSS
//! paged-media directives, ready for a print engine such as WeasyPrint.
//! The page counter and the running section label are expressed with
//! `counter(page)` and `string-set`, mirroring the furniture computed by
//! the layout crate. Cover pages opt out of the counter with a zero
//! `counter-increment` in their `@page` rule.

mod renderer;
mod view;

pub use renderer::HtmlRenderer;
