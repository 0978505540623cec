//! depmerge - merged dependency manifests for multi-module project trees
//!
//! Scans a tree of per-module `project.xml` descriptors, extracts the
//! dependencies each one declares and writes a single manifest holding
//! their union, for example to drive a combined javadoc/reporting build.
//!
//! # Architecture
//!
//! The run is a single ordered fold:
//! 1. **Discovery** - Find descriptor files below the scan root
//! 2. **Parsing** - Pull dependency entries out of each descriptor's text
//! 3. **Merging** - Keep the first definition of every artifact
//! 4. **Reporting** - Write the merged manifest (or JSON)

pub mod aggregate;
pub mod config;
pub mod discovery;
pub mod parser;
pub mod report;

pub use aggregate::{
    aggregate, merge_dependencies, AggregateError, AggregateSummary, Aggregator, Dependency,
    DependencyList,
};
pub use config::Config;
pub use discovery::{DescriptorFile, DescriptorFinder};
pub use parser::DescriptorParser;
pub use report::{ManifestTemplate, ReportFormat, Reporter};
