//! Errors raised while turning an edition into a document.

use folio_layout::LayoutError;
use folio_types::Slug;
use std::fmt;
use thiserror::Error;

/// Article fields that must be present and non-blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Title,
    Type,
    Body,
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RequiredField::Title => "title",
            RequiredField::Type => "type",
            RequiredField::Body => "body",
        })
    }
}

/// Positions are 1-based places in the edition's article list.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssemblyError {
    #[error("Article {position} is missing its {field}")]
    MissingRequiredField { position: usize, field: RequiredField },

    #[error(
        "Articles {first_position} ('{first_title}') and {second_position} ('{second_title}') both resolve to anchor '{slug}'"
    )]
    SlugCollision {
        slug: Slug,
        first_title: String,
        first_position: usize,
        second_title: String,
        second_position: usize,
    },

    #[error("Article {position} ('{title}') does not yield a usable anchor")]
    EmptySlug { position: usize, title: String },

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),
}
