use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Block {block} needs {needed:.2}pt but a column holds only {available:.2}pt.")]
    ElementTooLarge {
        block: usize,
        needed: f32,
        available: f32,
    },
    #[error("Paginator reported zero pages for block {0}.")]
    EmptyBlock(usize),
    #[error("Paginator has page counts for {reported} blocks but the document has {expected}.")]
    CountMismatch { reported: usize, expected: usize },
    #[error("Invalid layout configuration: {0}")]
    InvalidConfig(String),
}

pub mod algorithms;
pub mod config;
pub mod flow;
pub mod furniture;
pub mod paginator;

pub use self::config::LayoutConfig;
pub use self::flow::{BlockContent, FlowBlock, PageContext};
pub use self::furniture::{BlockStart, PageFurniture, PageState, PhysicalPage};
pub use self::paginator::{EstimatingPaginator, Paginator, ReportedPaginator};
