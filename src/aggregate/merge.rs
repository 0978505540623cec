// First-seen-wins merging of dependency records
//
// The merged list is threaded through the aggregation as a plain value:
// each descriptor consumes the list so far and returns the extended one.

use super::Dependency;
use crate::parser::DescriptorParser;
use std::collections::HashSet;
use tracing::debug;

/// Ordered dependency records, unique by artifact
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyList {
    entries: Vec<Dependency>,
    seen: HashSet<String>,
}

impl DependencyList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, artifact_id: &str) -> bool {
        self.seen.contains(artifact_id)
    }

    pub fn get(&self, artifact_id: &str) -> Option<&Dependency> {
        if !self.contains(artifact_id) {
            return None;
        }
        self.entries.iter().find(|d| d.artifact_id() == artifact_id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Dependency> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[Dependency] {
        &self.entries
    }

    /// Append unless the artifact is already present; returns whether it was added
    pub fn push(&mut self, dependency: Dependency) -> bool {
        if self.seen.contains(dependency.artifact_id()) {
            debug!(
                "Skipping duplicate {} (version {:?})",
                dependency.artifact_id(),
                dependency.version()
            );
            return false;
        }

        self.seen.insert(dependency.artifact_id().to_string());
        self.entries.push(dependency);
        true
    }

    /// Fold one descriptor into the list
    pub fn merge(mut self, parser: &DescriptorParser, descriptor: &str) -> Self {
        let Some(found) = parser.parse(descriptor) else {
            debug!("No dependencies block, nothing to merge");
            return self;
        };

        let total = found.len();
        let mut added = 0;
        for dependency in found {
            if self.push(dependency) {
                added += 1;
            }
        }
        debug!("Merged {} of {} dependencies", added, total);

        self
    }
}

impl<'a> IntoIterator for &'a DependencyList {
    type Item = &'a Dependency;
    type IntoIter = std::slice::Iter<'a, Dependency>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Merge one descriptor's dependencies into `merged` with a default parser
pub fn merge_dependencies(descriptor: &str, merged: DependencyList) -> DependencyList {
    merged.merge(&DescriptorParser::new(), descriptor)
}
