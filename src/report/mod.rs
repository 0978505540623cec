mod json;
mod manifest;
mod terminal;

pub use json::JsonReporter;
pub use manifest::{
    render_dependency, resolve_output_path, verify_well_formed, write_avoiding_collision,
    ManifestCheckError, ManifestTemplate, COLLISION_SUFFIX,
};
pub use terminal::TerminalReporter;

use crate::aggregate::{AggregateError, AggregateSummary};
use std::path::PathBuf;
use tracing::warn;

/// Output format for the merged list
#[derive(Debug, Clone, Default)]
pub enum ReportFormat {
    #[default]
    Manifest,
    Json,
}

/// Emits the merged dependency list
pub struct Reporter {
    format: ReportFormat,
    template: ManifestTemplate,
    /// `None` prints to stdout
    output_path: Option<PathBuf>,
}

impl Reporter {
    pub fn new(format: ReportFormat, template: ManifestTemplate, output_path: Option<PathBuf>) -> Self {
        Self {
            format,
            template,
            output_path,
        }
    }

    /// Emit the report; returns the file written, if any
    pub fn report(&self, summary: &AggregateSummary) -> Result<Option<PathBuf>, AggregateError> {
        let contents = match &self.format {
            ReportFormat::Manifest => {
                let rendered = self.template.render(&summary.dependencies);
                if let Err(e) = verify_well_formed(&rendered) {
                    warn!("Merged manifest is not well-formed XML: {}", e);
                }
                rendered
            }
            ReportFormat::Json => JsonReporter::new().render(summary)?,
        };

        match &self.output_path {
            Some(path) => write_avoiding_collision(path, &contents).map(Some),
            None => {
                print!("{}", contents);
                Ok(None)
            }
        }
    }
}
