// Document similarity: clean, tokenize, count n-grams, compare vectors.

pub mod clean;
pub mod compare;
pub mod frequency;
pub mod tokenize;
pub mod vector;

pub use compare::{compare, similarity, similarity_with, Comparison, SimilarityOptions};
