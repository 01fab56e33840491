// Text cleaning: the first stage of the pipeline.

use std::sync::LazyLock;

use regex_lite::Regex;

// Both patterns are literals, so compilation cannot fail on user input.
static NON_ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9 ]").expect("valid literal regex"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid literal regex"));

/// Normalize a raw document for tokenizing.
///
/// Drops everything except ASCII letters, digits and the space character,
/// squeezes runs of whitespace to one space, lowercases and trims. Tabs and
/// newlines are removed by the first step, so words separated only by a
/// line break end up joined.
pub fn clean(doc: &str) -> String {
    let kept = NON_ALPHANUMERIC.replace_all(doc, "");
    let squeezed = WHITESPACE_RUN.replace_all(&kept, " ");
    squeezed.to_lowercase().trim().to_string()
}
