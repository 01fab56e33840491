// Unit tests for the pipeline stages as seen from outside the crate.
//
// Covers the published contracts of clean, tokenize, frequency and the
// vector comparator, including the edge cases the orchestrator depends on.

use std::collections::HashMap;

use docsim::similarity::clean::clean;
use docsim::similarity::frequency::{frequency, FrequencyMap};
use docsim::similarity::tokenize::{tokenize, STOP_WORDS};
use docsim::similarity::vector::{cosine_similarity, dot_product};
use docsim::SimilarityError;

// ============================================================
// clean
// ============================================================

#[test]
fn clean_sentence() {
    assert_eq!(clean("The cat sat on the mat."), "the cat sat on the mat");
    assert_eq!(clean("A cat sat on a mat!"), "a cat sat on a mat");
}

#[test]
fn clean_keeps_digits() {
    assert_eq!(clean("Route 66, Exit 12B"), "route 66 exit 12b");
}

#[test]
fn clean_strips_hyphens_and_apostrophes_inside_words() {
    assert_eq!(clean("don't well-known"), "dont wellknown");
}

#[test]
fn clean_is_idempotent_on_messy_input() {
    let messy = "  Hello,\tWORLD!!   It's  2024 -- ok?  ";
    let once = clean(messy);
    assert_eq!(clean(&once), once);
}

// ============================================================
// tokenize
// ============================================================

#[test]
fn tokenize_never_returns_stop_words() {
    let tokens = tokenize("a an the of for and or cat or dog and the bird");
    assert_eq!(tokens, vec!["cat", "dog", "bird"]);
    for token in &tokens {
        assert!(!STOP_WORDS.contains(&token.as_str()));
    }
}

#[test]
fn tokenize_keeps_on_and_in() {
    // Only the seven listed words are stop words
    assert_eq!(tokenize("on in at"), vec!["on", "in", "at"]);
}

// ============================================================
// frequency
// ============================================================

#[test]
fn frequency_unigrams_of_strings() {
    let tokens = vec!["a".to_string(), "b".to_string(), "a".to_string()];
    let counts = frequency(&tokens, 1);
    let expected: FrequencyMap<String> = [
        (vec!["a".to_string()], 2),
        (vec!["b".to_string()], 1),
    ]
    .into();
    assert_eq!(counts, expected);
}

#[test]
fn frequency_unigrams_plus_bigrams() {
    let counts = frequency(&["a", "b", "c"], 2);
    assert_eq!(counts.len(), 5);
    assert_eq!(counts[&vec!["a", "b"]], 1);
    assert_eq!(counts[&vec!["b", "c"]], 1);
    assert!(!counts.contains_key(&vec!["a", "c"]));
}

#[test]
fn frequency_total_window_count() {
    // len 4, widths 1..=3 -> 4 + 3 + 2 windows
    let counts = frequency(&[1, 1, 1, 1], 3);
    let total: usize = counts.values().sum();
    assert_eq!(total, 9);
    assert_eq!(counts[&vec![1]], 4);
    assert_eq!(counts[&vec![1, 1]], 3);
    assert_eq!(counts[&vec![1, 1, 1]], 2);
}

#[test]
#[should_panic]
fn frequency_zero_length_is_a_contract_violation() {
    let _ = frequency(&[1, 2, 3], 0);
}

// ============================================================
// dot_product / cosine_similarity
// ============================================================

fn counts(pairs: &[(&str, usize)]) -> HashMap<String, usize> {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

#[test]
fn dot_product_is_commutative() {
    let a = counts(&[("cat", 2), ("sat", 1), ("mat", 4)]);
    let b = counts(&[("cat", 5), ("mat", 1), ("hat", 9)]);
    assert_eq!(dot_product(&a, &b), 14.0);
    assert_eq!(dot_product(&b, &a), 14.0);
}

#[test]
fn dot_product_disjoint_is_zero() {
    let a = counts(&[("x", 3)]);
    let b = counts(&[("y", 3)]);
    assert_eq!(dot_product(&a, &b), 0.0);
}

#[test]
fn cosine_self_similarity_is_one() {
    for v in [
        counts(&[("one", 1)]),
        counts(&[("a", 1), ("b", 1)]),
        counts(&[("a", 7), ("b", 3), ("c", 12), ("d", 1)]),
    ] {
        assert_eq!(cosine_similarity(&v, &v).unwrap(), 1.0);
    }
}

#[test]
fn cosine_empty_is_error_not_nan() {
    let empty: HashMap<String, usize> = HashMap::new();
    let result = cosine_similarity(&empty, &empty);
    assert_eq!(result, Err(SimilarityError::ZeroNorm));
}
