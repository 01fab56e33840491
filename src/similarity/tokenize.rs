// Whitespace tokenizer with a fixed stop-word list.

/// Words dropped from every token sequence.
pub const STOP_WORDS: [&str; 7] = ["a", "an", "the", "of", "for", "and", "or"];

/// Whether `word` is in [`STOP_WORDS`]. Case-sensitive; callers pass
/// already-cleaned (lowercase) text.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

/// Split a cleaned document on whitespace and drop stop words.
///
/// Order and duplicates are preserved. Accepts any string; it is simply
/// split and filtered.
pub fn tokenize(doc: &str) -> Vec<String> {
    doc.split_whitespace()
        .filter(|word| !is_stop_word(word))
        .map(str::to_string)
        .collect()
}
