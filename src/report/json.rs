use crate::aggregate::{AggregateError, AggregateSummary, Dependency};
use serde::Serialize;

/// JSON rendering of the merged dependency list
pub struct JsonReporter;

impl JsonReporter {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, summary: &AggregateSummary) -> Result<String, AggregateError> {
        let report = JsonReport::from_summary(summary);
        Ok(serde_json::to_string_pretty(&report)?)
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    version: &'static str,
    files_processed: usize,
    total_dependencies: usize,
    dependencies: &'a [Dependency],
}

impl<'a> JsonReport<'a> {
    fn from_summary(summary: &'a AggregateSummary) -> Self {
        Self {
            version: "1.0",
            files_processed: summary.files_processed,
            total_dependencies: summary.dependencies.len(),
            dependencies: summary.dependencies.as_slice(),
        }
    }
}
