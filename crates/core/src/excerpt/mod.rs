//! Heading-scoped excerpts of daily notes.
//!
//! Only heading boundaries are scanned; the markdown itself is left
//! untouched for the rendering sink.

pub mod extractor;
pub mod types;

pub use extractor::{HeadingMatcher, extract_excerpt, heading_level};
pub use types::{Excerpt, HeadingMatch};
