pub mod color;
pub mod document;
pub mod edition;
pub mod ids;

pub use color::Color;
pub use document::TocEntry;
pub use edition::{Article, Author, Edition, Highlight};
pub use ids::{AssetRef, Slug};
