use crate::aggregate::AggregateSummary;
use colored::Colorize;
use std::path::Path;

/// Human-readable run summary
pub struct TerminalReporter {
    /// List every merged artifact, not only the totals
    show_dependencies: bool,
}

impl TerminalReporter {
    pub fn new() -> Self {
        Self {
            show_dependencies: false,
        }
    }

    pub fn with_dependencies(mut self, show: bool) -> Self {
        self.show_dependencies = show;
        self
    }

    /// Print the summary; goes to stderr when stdout carries the report itself
    pub fn report(&self, summary: &AggregateSummary, written: Option<&Path>) {
        let lines = self.lines(summary, written);
        if written.is_some() {
            for line in lines {
                println!("{}", line);
            }
        } else {
            for line in lines {
                eprintln!("{}", line);
            }
        }
    }

    fn lines(&self, summary: &AggregateSummary, written: Option<&Path>) -> Vec<String> {
        let mut lines = Vec::new();

        if self.show_dependencies {
            for dep in &summary.dependencies {
                let group = dep
                    .explicit_group_id()
                    .map(|g| format!(" ({})", g).dimmed().to_string())
                    .unwrap_or_default();
                lines.push(format!("  {} {}{}", dep.artifact_id().cyan(), dep.version(), group));
            }
        }

        lines.push(
            format!("Merged {} unique dependencies", summary.dependencies.len())
                .green()
                .to_string(),
        );
        if let Some(path) = written {
            lines.push(format!("Manifest written to: {}", path.display().to_string().bold()));
        }
        lines.push(format!("transformed {} files.", summary.files_processed));

        lines
    }
}

impl Default for TerminalReporter {
    fn default() -> Self {
        Self::new()
    }
}
