use crate::config::Config;
use ignore::WalkBuilder;
use miette::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

/// A discovered project descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptorFile {
    /// Path as reached from the scan root
    pub path: PathBuf,

    /// Path relative to the scan root
    pub relative: PathBuf,
}

impl DescriptorFile {
    pub fn new(path: PathBuf, relative: PathBuf) -> Self {
        Self { path, relative }
    }
}

/// Finds descriptor files below a root directory
pub struct DescriptorFinder<'a> {
    config: &'a Config,
}

impl<'a> DescriptorFinder<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Find all descriptors below `root`, in a stable order
    pub fn find_descriptors(&self, root: &Path) -> Result<Vec<DescriptorFile>> {
        debug!("Scanning for {} in: {}", self.config.descriptor_name, root.display());

        if !root.exists() {
            warn!("Scan root does not exist: {}", root.display());
            return Ok(Vec::new());
        }

        let walker = WalkBuilder::new(root)
            .standard_filters(false)          // Plain scan: hidden and ignored files included
            .follow_links(false)
            .max_depth(Some(self.config.max_depth))
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        let files: Vec<DescriptorFile> = walker
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
            .filter_map(|entry| {
                let path = entry.path();

                if path.file_name()? != self.config.descriptor_name.as_str() {
                    return None;
                }

                let relative = path.strip_prefix(root).unwrap_or(path);
                if self.config.should_exclude(relative) {
                    trace!("Excluding: {}", path.display());
                    return None;
                }

                trace!("Found descriptor: {}", path.display());
                Some(DescriptorFile::new(path.to_path_buf(), relative.to_path_buf()))
            })
            .collect();

        debug!("Found {} descriptors", files.len());
        Ok(files)
    }
}
