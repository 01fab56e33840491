// Colored terminal output for comparison results.
//
// Callers pass the writer so the CLI can print to stdout while tests
// capture the same bytes in a Vec.

use std::io::{self, Write};

use colored::Colorize;

use crate::similarity::Comparison;

/// Write the score line, plus the supporting counts when `verbose` is set.
pub fn display_comparison<W: Write>(
    out: &mut W,
    comparison: &Comparison,
    verbose: bool,
) -> io::Result<()> {
    let score = super::format_score(comparison.score);
    writeln!(out, "Similarity score: {}", colorize_score(comparison.score, &score))?;

    if !verbose {
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "  {:<18} {:.6}", "Unrounded:".dimmed(), comparison.raw_score)?;
    writeln!(
        out,
        "  {:<18} {} / {}",
        "Tokens:".dimmed(),
        comparison.tokens_first,
        comparison.tokens_second
    )?;
    writeln!(
        out,
        "  {:<18} {}",
        "Vocabulary:".dimmed(),
        comparison.vocabulary_size
    )?;
    writeln!(
        out,
        "  {:<18} {}",
        "Shared n-grams:".dimmed(),
        comparison.shared_ngrams
    )
}

/// Color a score by how close the documents are.
fn colorize_score(score: f64, text: &str) -> colored::ColoredString {
    if score >= 0.75 {
        text.green().bold()
    } else if score >= 0.4 {
        text.yellow()
    } else {
        text.red()
    }
}
