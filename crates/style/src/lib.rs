pub mod dimension;
pub mod resolver;
pub mod stylesheet;
pub mod text;

pub use dimension::{Margins, PageSize};
pub use resolver::{ResolvedStyle, StyleResolver, StyleSource};
pub use stylesheet::{PageLayout, StyleLoadError, StyleMap, StyleParams};
pub use text::TextAlign;
