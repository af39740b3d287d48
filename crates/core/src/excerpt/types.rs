use serde::Serialize;

/// What the summary heading of a note yielded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "text", rename_all = "snake_case")]
pub enum Excerpt {
    /// No heading matched the keyword.
    NotFound,
    /// The heading exists but nothing but whitespace sits under it.
    Empty,
    /// Trimmed content under the heading.
    Text(String),
}

impl Excerpt {
    pub fn text(&self) -> Option<&str> {
        match self {
            Excerpt::Text(t) => Some(t),
            _ => None,
        }
    }
}

/// The heading an excerpt starts at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingMatch {
    /// Zero-based line index of the heading.
    pub line: usize,
    /// Number of leading `#`.
    pub level: usize,
}
