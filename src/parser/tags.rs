// Tag scanning for hand-authored descriptor fragments
//
// Descriptors are scanned as text, not parsed as XML: entries are often
// half-commented, nested or otherwise not well-formed, and the extraction
// has to stay best-effort.

use regex::Regex;

/// Compiled matcher for the first `<name>…</name>` pair in a text
#[derive(Debug, Clone)]
pub struct TagPattern {
    regex: Regex,
    /// Any opening form of the tag, including `<name/>` and unclosed `<name>`
    open_regex: Regex,
}

impl TagPattern {
    pub fn new(name: &str) -> Self {
        let escaped = regex::escape(name);
        // Non-greedy and dot-matches-newline so the inner text may span lines
        let regex = Regex::new(&format!(r"(?s)<{0}>(.*?)</{0}>", escaped))
            .expect("escaped tag name always forms a valid pattern");
        let open_regex = Regex::new(&format!(r"<{}[\s/>]", escaped))
            .expect("escaped tag name always forms a valid pattern");

        Self { regex, open_regex }
    }

    /// Whether the tag appears at all, well-formed or not
    pub fn is_present(&self, text: &str) -> bool {
        self.open_regex.is_match(text)
    }

    /// Inner text of the first match, or `None` when the tag is absent
    pub fn find<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.regex
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Inner text of the first match, empty when the tag is absent
    pub fn content<'t>(&self, text: &'t str) -> &'t str {
        self.find(text).unwrap_or("")
    }
}

/// Extract the inner text of the first `<tag>…</tag>` in `text`.
///
/// Compiles the pattern on every call; hot paths should hold a [`TagPattern`].
pub fn extract_tag<'t>(text: &'t str, tag: &str) -> Option<&'t str> {
    TagPattern::new(tag).find(text)
}

/// Collapses markup-bearing fragments down to plain field values
#[derive(Debug, Clone)]
pub struct TagScanner {
    /// An element with text-only content: `<a>text</a>`
    element_pattern: Regex,
    /// Any leftover opening or closing tag
    bare_tag_pattern: Regex,
    /// Newlines, tabs and spaces
    whitespace_pattern: Regex,
}

impl TagScanner {
    pub fn new() -> Self {
        let element_pattern =
            Regex::new(r"<[^>]+>[^<>]*</[^>]+>").expect("element pattern is valid");
        let bare_tag_pattern = Regex::new(r"<[^>]+>").expect("bare tag pattern is valid");
        let whitespace_pattern = Regex::new(r"[\n\t ]").expect("whitespace pattern is valid");

        Self {
            element_pattern,
            bare_tag_pattern,
            whitespace_pattern,
        }
    }

    /// Reduce a fragment to a whitespace-free plain string.
    ///
    /// Nested elements are dropped together with their content in a single
    /// pass, then any remaining tags are dropped on their own, then every
    /// newline, tab and space is removed. Values that legitimately contain
    /// spaces are collapsed as well.
    pub fn strip(&self, fragment: &str) -> String {
        let without_elements = self.element_pattern.replace_all(fragment, "");
        let without_tags = self.bare_tag_pattern.replace_all(&without_elements, "");
        self.whitespace_pattern
            .replace_all(&without_tags, "")
            .into_owned()
    }
}

impl Default for TagScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalize a fragment with a freshly built [`TagScanner`]
pub fn strip(fragment: &str) -> String {
    TagScanner::new().strip(fragment)
}
