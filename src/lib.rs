// Docsim: token-frequency cosine similarity between two documents.
//
// This is the library root. `similarity` is the pipeline itself; the other
// modules are the shells around it (configuration, terminal output, CLI
// input and the web form).

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod similarity;

#[cfg(feature = "web")]
pub mod web;

pub use error::{DocumentSide, SimilarityError};
pub use similarity::{compare, similarity, similarity_with, Comparison, SimilarityOptions};
