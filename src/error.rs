// Core error type for the similarity pipeline.
//
// The shells (CLI, web) work in anyhow::Result and decide how to present
// these; the pipeline itself never returns NaN in place of an error.

use std::fmt;

/// Which of the two compared documents an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentSide {
    First,
    Second,
}

impl fmt::Display for DocumentSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentSide::First => write!(f, "document 1"),
            DocumentSide::Second => write!(f, "document 2"),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SimilarityError {
    /// A document had no tokens left after cleaning and stop-word removal.
    #[error("cannot compute similarity of empty document after cleaning/tokenization ({which} is empty)")]
    EmptyDocument { which: DocumentSide },

    /// One of the frequency vectors has zero magnitude.
    #[error("cannot compute cosine similarity of a zero-norm vector")]
    ZeroNorm,

    #[error("max n-gram length must be at least 1 and at most {max} (got {0})", max = crate::similarity::compare::MAX_NGRAM)]
    InvalidNgramLength(usize),

    #[error("rounding precision must be at most {max} decimal places (got {got})")]
    InvalidPrecision { got: u32, max: u32 },
}

pub type Result<T> = core::result::Result<T, SimilarityError>;
