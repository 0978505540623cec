//! Dependency aggregation across descriptor files
//!
//! Descriptors are folded in the order they are supplied. That order decides
//! which definition of a shared artifact survives, so files are never
//! reordered or processed concurrently.

mod dependency;
mod merge;

pub use dependency::Dependency;
pub use merge::{merge_dependencies, DependencyList};

use crate::parser::DescriptorParser;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Aggregation errors
#[derive(Error, Debug)]
pub enum AggregateError {
    #[error("Failed to read descriptor {}: {source}", .path.display())]
    ReadDescriptor {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write manifest {}: {source}", .path.display())]
    WriteManifest {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to render report: {0}")]
    Render(#[from] serde_json::Error),
}

/// Outcome of a run
#[derive(Debug, Clone, Default)]
pub struct AggregateSummary {
    pub files_processed: usize,
    pub dependencies: DependencyList,
}

/// Folds descriptors into one merged dependency list
#[derive(Debug, Default)]
pub struct Aggregator {
    parser: DescriptorParser,
    merged: DependencyList,
    files_processed: usize,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a descriptor and merge it; an unreadable file aborts the run
    pub fn process_file(&mut self, path: &Path) -> Result<(), AggregateError> {
        debug!("Processing {}", path.display());

        let bytes = std::fs::read(path).map_err(|source| AggregateError::ReadDescriptor {
            path: path.to_path_buf(),
            source,
        })?;
        // Descriptors are often Latin-1; only the ASCII markup has to survive decoding
        let contents = String::from_utf8_lossy(&bytes);
        self.process_contents(&contents);

        Ok(())
    }

    /// Merge already loaded descriptor text
    pub fn process_contents(&mut self, contents: &str) {
        let merged = std::mem::take(&mut self.merged);
        self.merged = merged.merge(&self.parser, contents);
        self.files_processed += 1;
    }

    pub fn finish(self) -> AggregateSummary {
        AggregateSummary {
            files_processed: self.files_processed,
            dependencies: self.merged,
        }
    }
}

/// Aggregate the given descriptors in order
pub fn aggregate<P: AsRef<Path>>(paths: &[P]) -> Result<AggregateSummary, AggregateError> {
    let mut aggregator = Aggregator::new();
    for path in paths {
        aggregator.process_file(path.as_ref())?;
    }
    Ok(aggregator.finish())
}
