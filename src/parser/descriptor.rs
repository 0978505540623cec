// Descriptor dependency extraction
//
// Handles both schema generations of project.xml dependency entries:
//
// ```xml
// <dependency>
//     <groupId>org.bar</groupId>
//     <artifactId>bar</artifactId>
//     <version>3.0</version>
// </dependency>
//
// <dependency>
//     <id>foo</id>
//     <version>1.0</version>
// </dependency>
// ```
//
// The legacy `<id>` element names both the group and the artifact.

use super::tags::{TagPattern, TagScanner};
use crate::aggregate::Dependency;
use regex::Regex;
use std::borrow::Cow;
use tracing::trace;

/// Closing boundary between two dependency entries
pub const DEPENDENCY_BOUNDARY: &str = "</dependency>";

/// Extracts dependency records from descriptor text
#[derive(Debug, Clone)]
pub struct DescriptorParser {
    scanner: TagScanner,
    dependencies: TagPattern,
    comment_pattern: Regex,
    artifact_id: TagPattern,
    group_id: TagPattern,
    legacy_id: TagPattern,
    version: TagPattern,
}

impl DescriptorParser {
    pub fn new() -> Self {
        Self {
            scanner: TagScanner::new(),
            dependencies: TagPattern::new("dependencies"),
            comment_pattern: Regex::new(r"(?s)<!--.*?-->").expect("comment pattern is valid"),
            artifact_id: TagPattern::new("artifactId"),
            group_id: TagPattern::new("groupId"),
            legacy_id: TagPattern::new("id"),
            version: TagPattern::new("version"),
        }
    }

    /// First `<dependencies>` block of a descriptor, if any
    pub fn dependencies_block<'t>(&self, descriptor: &'t str) -> Option<&'t str> {
        self.dependencies.find(descriptor)
    }

    /// Remove `<!-- … -->` comments, including multi-line ones
    pub fn strip_comments<'t>(&self, block: &'t str) -> Cow<'t, str> {
        self.comment_pattern.replace_all(block, "")
    }

    /// Split a comment-free block into candidate entries.
    ///
    /// The text after the last boundary is yielded too; it carries no
    /// artifact and is dropped by [`parse_fragment`](Self::parse_fragment).
    pub fn fragments<'t>(&self, block: &'t str) -> impl Iterator<Item = &'t str> {
        block.split(DEPENDENCY_BOUNDARY)
    }

    /// `artifactId`, falling back to the legacy `id` only when the tag is absent
    pub fn artifact_id(&self, fragment: &str) -> String {
        self.field_or_legacy(&self.artifact_id, fragment)
    }

    /// `groupId`, falling back to the legacy `id` only when the tag is absent
    pub fn group_id(&self, fragment: &str) -> String {
        self.field_or_legacy(&self.group_id, fragment)
    }

    /// A present but empty or unclosed tag yields "" rather than the legacy `id`
    fn field_or_legacy(&self, field: &TagPattern, fragment: &str) -> String {
        let raw = if field.is_present(fragment) {
            field.content(fragment)
        } else {
            self.legacy_id.content(fragment)
        };
        self.scanner.strip(raw)
    }

    pub fn version(&self, fragment: &str) -> String {
        self.scanner.strip(self.version.content(fragment))
    }

    /// Build a record from one entry; `None` when no artifact can be found
    pub fn parse_fragment(&self, fragment: &str) -> Option<Dependency> {
        let artifact_id = self.artifact_id(fragment);
        if artifact_id.is_empty() {
            return None;
        }

        let group_id = self.group_id(fragment);
        let version = self.version(fragment);
        trace!(
            "Extracted {} (group: {:?}, version: {:?})",
            artifact_id,
            group_id,
            version
        );

        Some(Dependency::new(artifact_id, group_id, version))
    }

    /// All records of a descriptor in document order, duplicates included.
    ///
    /// Returns `None` when the descriptor has no `<dependencies>` block.
    pub fn parse(&self, descriptor: &str) -> Option<Vec<Dependency>> {
        let block = self.dependencies_block(descriptor)?;
        let block = self.strip_comments(block);

        Some(
            self.fragments(&block)
                .filter_map(|fragment| self.parse_fragment(fragment))
                .collect(),
        )
    }
}

impl Default for DescriptorParser {
    fn default() -> Self {
        Self::new()
    }
}
