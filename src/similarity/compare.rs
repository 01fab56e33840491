// Similarity orchestrator: ties the four pipeline stages together.
//
//   clean -> tokenize -> vocabulary indices -> frequency -> cosine -> round
//
// Every call builds its own vocabulary and frequency maps; nothing is
// shared between calls, so these functions are safe to call concurrently.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::clean::clean;
use super::frequency::frequency;
use super::tokenize::tokenize;
use super::vector::{cosine_similarity, dot_product};
use crate::error::{DocumentSide, Result, SimilarityError};

/// Longest n-gram a comparison may count.
pub const MAX_NGRAM: usize = 16;

/// Largest supported rounding precision (decimal places).
pub const MAX_PRECISION: u32 = 10;

/// Tunable knobs for a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimilarityOptions {
    /// Longest n-gram counted in each frequency vector (1 = unigrams only)
    pub max_ngram: usize,
    /// Decimal places the final score is rounded to
    pub precision: u32,
}

impl Default for SimilarityOptions {
    fn default() -> Self {
        Self {
            max_ngram: 1,
            precision: 2,
        }
    }
}

impl SimilarityOptions {
    /// Reject options the pipeline cannot honor.
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_NGRAM).contains(&self.max_ngram) {
            return Err(SimilarityError::InvalidNgramLength(self.max_ngram));
        }
        if self.precision > MAX_PRECISION {
            return Err(SimilarityError::InvalidPrecision {
                got: self.precision,
                max: MAX_PRECISION,
            });
        }
        Ok(())
    }
}

/// Result of comparing two documents, with the numbers behind the score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// Cosine similarity rounded to `precision` decimal places
    pub score: f64,
    /// Cosine similarity before rounding
    pub raw_score: f64,
    /// Tokens in the first document after cleaning and stop-word removal
    pub tokens_first: usize,
    /// Tokens in the second document after cleaning and stop-word removal
    pub tokens_second: usize,
    /// Distinct tokens across both documents
    pub vocabulary_size: usize,
    /// Distinct n-grams that occur in both documents
    pub shared_ngrams: usize,
}

/// Token -> compact integer index, shared by both documents in one call.
///
/// Indices are handed out in first-seen order. Only equality between
/// indices carries meaning.
#[derive(Debug, Default)]
pub struct Vocabulary {
    index: HashMap<String, usize>,
}

impl Vocabulary {
    /// Build a vocabulary from the union of the given token sequences.
    pub fn build(sequences: &[&[String]]) -> Self {
        let mut vocab = Self::default();
        for token in sequences.iter().flat_map(|seq| seq.iter()) {
            let next = vocab.index.len();
            vocab.index.entry(token.clone()).or_insert(next);
        }
        vocab
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn get(&self, token: &str) -> Option<usize> {
        self.index.get(token).copied()
    }

    /// Map a token sequence to vocabulary indices, skipping unknown tokens.
    pub fn encode(&self, tokens: &[String]) -> Vec<usize> {
        tokens.iter().filter_map(|t| self.get(t)).collect()
    }
}

/// Round `value` to `places` decimal places, halves away from zero.
pub fn round_to(value: f64, places: u32) -> f64 {
    let scale = 10f64.powi(places as i32);
    (value * scale).round() / scale
}

/// Similarity of two raw documents at the default options: unigram
/// frequencies, score rounded to 2 decimal places.
pub fn similarity(doc1: &str, doc2: &str) -> Result<f64> {
    similarity_with(doc1, doc2, &SimilarityOptions::default())
}

/// Similarity of two raw documents with explicit options.
pub fn similarity_with(doc1: &str, doc2: &str, options: &SimilarityOptions) -> Result<f64> {
    compare(doc1, doc2, options).map(|c| c.score)
}

/// Run the full pipeline and report the score with its supporting counts.
///
/// Fails with `EmptyDocument` when either document has no tokens left after
/// cleaning and stop-word removal.
pub fn compare(doc1: &str, doc2: &str, options: &SimilarityOptions) -> Result<Comparison> {
    options.validate()?;

    let tokens1 = tokenize(&clean(doc1));
    let tokens2 = tokenize(&clean(doc2));

    if tokens1.is_empty() {
        return Err(SimilarityError::EmptyDocument {
            which: DocumentSide::First,
        });
    }
    if tokens2.is_empty() {
        return Err(SimilarityError::EmptyDocument {
            which: DocumentSide::Second,
        });
    }

    let vocab = Vocabulary::build(&[tokens1.as_slice(), tokens2.as_slice()]);
    let indexed1 = vocab.encode(&tokens1);
    let indexed2 = vocab.encode(&tokens2);

    let freq1 = frequency(&indexed1, options.max_ngram);
    let freq2 = frequency(&indexed2, options.max_ngram);

    let raw_score = cosine_similarity(&freq1, &freq2)?;
    let shared_ngrams = freq1.keys().filter(|k| freq2.contains_key(*k)).count();

    debug!(
        tokens_first = tokens1.len(),
        tokens_second = tokens2.len(),
        vocabulary = vocab.len(),
        shared_ngrams,
        dot = dot_product(&freq1, &freq2),
        raw_score,
        "Compared documents"
    );

    Ok(Comparison {
        score: round_to(raw_score, options.precision),
        raw_score,
        tokens_first: tokens1.len(),
        tokens_second: tokens2.len(),
        vocabulary_size: vocab.len(),
        shared_ngrams,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_vocabulary_indices_consistent_across_documents() {
        let a = strings(&["cat", "sat", "cat"]);
        let b = strings(&["mat", "cat"]);
        let vocab = Vocabulary::build(&[a.as_slice(), b.as_slice()]);

        assert_eq!(vocab.len(), 3);
        let ea = vocab.encode(&a);
        let eb = vocab.encode(&b);
        assert_eq!(ea[0], ea[2]);
        assert_eq!(ea[0], eb[1]);
        assert_ne!(ea[0], ea[1]);
        assert_ne!(eb[0], ea[1]);
    }

    #[test]
    fn test_vocabulary_empty() {
        let vocab = Vocabulary::build(&[]);
        assert!(vocab.is_empty());
        assert_eq!(vocab.get("anything"), None);
    }

    #[test]
    fn test_round_to_half_away_from_zero() {
        assert_eq!(round_to(0.125, 2), 0.13);
        assert_eq!(round_to(0.5, 0), 1.0);
        assert_eq!(round_to(0.8164965809277261, 2), 0.82);
        assert_eq!(round_to(1.0, 2), 1.0);
    }

    #[test]
    fn test_options_validate() {
        assert!(SimilarityOptions::default().validate().is_ok());
        let zero = SimilarityOptions {
            max_ngram: 0,
            precision: 2,
        };
        assert_eq!(zero.validate(), Err(SimilarityError::InvalidNgramLength(0)));
        let too_precise = SimilarityOptions {
            max_ngram: 1,
            precision: 11,
        };
        let too_long = SimilarityOptions {
            max_ngram: MAX_NGRAM + 1,
            precision: 2,
        };
        assert_eq!(
            too_long.validate(),
            Err(SimilarityError::InvalidNgramLength(MAX_NGRAM + 1))
        );
        assert!(SimilarityOptions {
            max_ngram: MAX_NGRAM,
            precision: 2,
        }
        .validate()
        .is_ok());
        assert!(matches!(
            too_precise.validate(),
            Err(SimilarityError::InvalidPrecision { got: 11, .. })
        ));
    }

    #[test]
    fn test_compare_rejects_zero_ngram_without_panicking() {
        let options = SimilarityOptions {
            max_ngram: 0,
            precision: 2,
        };
        assert_eq!(
            compare("cat", "cat", &options),
            Err(SimilarityError::InvalidNgramLength(0))
        );
    }

    #[test]
    fn test_compare_reports_counts() {
        let c = compare("cat sat mat", "cat dog", &SimilarityOptions::default()).unwrap();
        assert_eq!(c.tokens_first, 3);
        assert_eq!(c.tokens_second, 2);
        assert_eq!(c.vocabulary_size, 4);
        assert_eq!(c.shared_ngrams, 1);
        // 1 / (sqrt(3) * sqrt(2))
        assert_eq!(c.score, 0.41);
    }

    #[test]
    fn test_compare_names_the_empty_document() {
        let err = compare("real words", "the a an", &SimilarityOptions::default()).unwrap_err();
        assert_eq!(
            err,
            SimilarityError::EmptyDocument {
                which: DocumentSide::Second
            }
        );
    }

    #[test]
    fn test_bigrams_lower_score_for_reordered_text() {
        let unigram = similarity("cat sat mat", "mat sat cat").unwrap();
        let bigram = similarity_with(
            "cat sat mat",
            "mat sat cat",
            &SimilarityOptions {
                max_ngram: 2,
                precision: 2,
            },
        )
        .unwrap();
        assert_eq!(unigram, 1.0);
        assert!(bigram < unigram, "bigram score {bigram} should drop");
    }
}
