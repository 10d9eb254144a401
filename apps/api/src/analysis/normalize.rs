//! Text normalization — the first stage of every analysis pass.
//!
//! Canonical form: lowercase, punctuation and underscores collapsed to single
//! spaces, leading/trailing whitespace trimmed. Idempotent, so downstream
//! stages may re-normalize defensively without changing the result.

/// Canonicalizes raw text for keyword extraction.
///
/// Every character that is neither alphanumeric nor whitespace (underscore
/// included) becomes a space, runs of whitespace collapse to one space, and
/// the result is lowercased and trimmed. Empty input yields empty output.
pub fn normalize_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for c in text.chars() {
        if c.is_alphanumeric() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            for lower in c.to_lowercase() {
                out.push(lower);
            }
        } else {
            pending_space = true;
        }
    }

    out
}
