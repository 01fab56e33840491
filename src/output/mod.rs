// Output formatting: terminal display of comparison results.

pub mod terminal;

/// Format a rounded score for display.
///
/// Uses the shortest representation that round-trips, but always keeps at
/// least one decimal place so a perfect match prints as `1.0`, not `1`.
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{score:.1}")
    } else {
        format!("{score}")
    }
}
