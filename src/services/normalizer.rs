//! Text normalization.

/// Collapse every whitespace run (spaces, tabs, newlines, carriage returns)
/// into a single space and strip the ends.
///
/// Pure and idempotent: `normalize(normalize(t)) == normalize(t)`.
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
