// Resume/JD analysis engine.
// Implements: text normalization, keyword extraction, skill matching,
// experience extraction, composite scoring, and feedback synthesis.
// Everything except handlers.rs is pure and synchronous — safe to call
// concurrently, deterministic for identical input.

pub mod analyzer;
pub mod document;
pub mod experience;
pub mod feedback;
pub mod handlers;
pub mod keywords;
pub mod normalize;
pub mod scoring;
pub mod skills;
pub mod stopwords;
