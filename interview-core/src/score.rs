//! Best-effort score extraction from free-text evaluations.

/// Score used when nothing recognizable is found.
pub const DEFAULT_SCORE: u8 = 7;

/// Extracts a 1..=10 score from `text`.
///
/// Candidates are tried by integer, ascending: for each `i`, the
/// case-insensitive forms `score: i` / `rating: i`, then the literal `i/10`.
/// The first integer with any hit wins, regardless of where it appears in
/// the text, so `"score: 10"` matches `i = 1` first.
pub fn extract_score(text: &str) -> u8 {
    let lower = text.to_lowercase();
    for i in 1..=10u8 {
        if lower.contains(&format!("score: {i}")) || lower.contains(&format!("rating: {i}")) {
            return i;
        }
        if text.contains(&format!("{i}/10")) {
            return i;
        }
    }
    DEFAULT_SCORE
}
