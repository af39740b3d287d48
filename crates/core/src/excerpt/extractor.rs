use std::sync::LazyLock;

use regex::Regex;

use super::types::{Excerpt, HeadingMatch};

/// A line that closes a section: hashes followed by whitespace.
/// `#tag` lines are body text, not headings.
static SECTION_HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#+)\s+").unwrap());

/// Matches heading lines introducing a literal keyword.
#[derive(Debug, Clone)]
pub struct HeadingMatcher {
    re: Regex,
}

impl HeadingMatcher {
    /// The keyword is trimmed and escaped; it never acts as a pattern.
    pub fn new(keyword: &str) -> Self {
        let pattern = format!(r"^#+\s*{}", regex::escape(keyword.trim()));
        // An escaped literal behind a fixed prefix always compiles
        let re = Regex::new(&pattern).expect("escaped heading pattern is valid");
        Self { re }
    }

    /// First heading in `lines` that introduces the keyword.
    pub fn find(&self, lines: &[&str]) -> Option<HeadingMatch> {
        lines.iter().position(|l| self.re.is_match(l)).map(|line| HeadingMatch {
            line,
            level: heading_level(lines[line]),
        })
    }

    pub fn extract(&self, text: &str) -> Excerpt {
        let lines: Vec<&str> = text.split('\n').collect();
        let Some(start) = self.find(&lines) else {
            return Excerpt::NotFound;
        };

        let end = lines
            .iter()
            .enumerate()
            .skip(start.line + 1)
            .find(|(_, l)| closes_section(l, start.level))
            .map_or(lines.len(), |(i, _)| i);

        let body = lines[start.line + 1..end].join("\n");
        let body = body.trim();
        if body.is_empty() { Excerpt::Empty } else { Excerpt::Text(body.to_string()) }
    }
}

/// Extract the text under the first heading introducing `heading_keyword`,
/// up to the next heading of the same or shallower depth.
pub fn extract_excerpt(text: &str, heading_keyword: &str) -> Excerpt {
    HeadingMatcher::new(heading_keyword).extract(text)
}

/// Count of leading `#`.
pub fn heading_level(line: &str) -> usize {
    line.bytes().take_while(|b| *b == b'#').count()
}

fn closes_section(line: &str, start_level: usize) -> bool {
    SECTION_HEADING_RE
        .captures(line)
        .and_then(|c| c.get(1))
        .is_some_and(|m| m.as_str().len() <= start_level)
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "[DAILY_SUMMARY]";

    #[test]
    fn test_stops_at_next_heading() {
        let text = "# [DAILY_SUMMARY]\nhello\nworld\n## Next\nignored";
        assert_eq!(extract_excerpt(text, KEY), Excerpt::Text("hello\nworld".into()));
    }

    #[test]
    fn test_blank_section_is_empty() {
        assert_eq!(extract_excerpt("# [DAILY_SUMMARY]\n\n", KEY), Excerpt::Empty);
        assert_eq!(extract_excerpt("# [DAILY_SUMMARY]", KEY), Excerpt::Empty);
        assert_eq!(extract_excerpt("## [DAILY_SUMMARY]\n  \n## Other\ntext", KEY), Excerpt::Empty);
    }

    #[test]
    fn test_missing_heading() {
        assert_eq!(extract_excerpt("no heading here", KEY), Excerpt::NotFound);
        assert_eq!(extract_excerpt("", KEY), Excerpt::NotFound);
        // keyword outside a heading does not count
        assert_eq!(extract_excerpt("[DAILY_SUMMARY]\ntext", KEY), Excerpt::NotFound);
    }

    #[test]
    fn test_deeper_heading_stays_inside() {
        let text = "# [DAILY_SUMMARY]\nfoo\n### Sub\nbar\n# Next";
        assert_eq!(extract_excerpt(text, KEY), Excerpt::Text("foo\n### Sub\nbar".into()));
    }

    #[test]
    fn test_shallower_heading_ends_section() {
        let text = "## [DAILY_SUMMARY]\nfoo\n# Top\nbar";
        assert_eq!(extract_excerpt(text, KEY), Excerpt::Text("foo".into()));
    }

    #[test]
    fn test_runs_to_end_of_document() {
        let text = "intro\n## [DAILY_SUMMARY]\nline one\n### detail\nline two\n";
        assert_eq!(
            extract_excerpt(text, KEY),
            Excerpt::Text("line one\n### detail\nline two".into())
        );
    }

    #[test]
    fn test_keyword_is_literal() {
        assert_eq!(extract_excerpt("# axb\nbody", "a.b"), Excerpt::NotFound);
        assert_eq!(extract_excerpt("# a.b\nbody", "a.b"), Excerpt::Text("body".into()));
        // brackets would be a character class if not escaped
        assert_eq!(extract_excerpt("# D\nbody", KEY), Excerpt::NotFound);
    }

    #[test]
    fn test_first_matching_heading_wins() {
        let text = "# [DAILY_SUMMARY]\nfirst\n# [DAILY_SUMMARY]\nsecond";
        assert_eq!(extract_excerpt(text, KEY), Excerpt::Text("first".into()));
    }

    #[test]
    fn test_heading_without_space_and_trailing_text() {
        let text = "##[DAILY_SUMMARY] (mood: good)\ncontent";
        assert_eq!(extract_excerpt(text, KEY), Excerpt::Text("content".into()));
    }

    #[test]
    fn test_keyword_is_trimmed() {
        let text = "# Summary\ncontent";
        assert_eq!(extract_excerpt(text, "  Summary  "), Excerpt::Text("content".into()));
    }

    #[test]
    fn test_tag_lines_are_not_headings() {
        let text = "# [DAILY_SUMMARY]\n#gratitude walked the dog\n# Next";
        assert_eq!(
            extract_excerpt(text, KEY),
            Excerpt::Text("#gratitude walked the dog".into())
        );
    }

    #[test]
    fn test_crlf_content() {
        let text = "# [DAILY_SUMMARY]\r\nhello\r\n# Next\r\n";
        assert_eq!(extract_excerpt(text, KEY), Excerpt::Text("hello".into()));
    }

    #[test]
    fn test_empty_keyword_matches_any_heading() {
        let text = "text\n## Any\nbody\n## Other";
        assert_eq!(extract_excerpt(text, ""), Excerpt::Text("body".into()));
    }

    #[test]
    fn test_heading_level() {
        assert_eq!(heading_level("### x"), 3);
        assert_eq!(heading_level("x #"), 0);
    }
}
