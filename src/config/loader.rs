use crate::report::ManifestTemplate;
use miette::{IntoDiagnostic, Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name searched for in every module directory
pub const DEFAULT_DESCRIPTOR_NAME: &str = "project.xml";

/// Name of the merged manifest
pub const DEFAULT_OUTPUT_NAME: &str = "project-all-deps.xml";

/// Configuration for a depmerge run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root the descriptor scan starts from
    pub root: PathBuf,

    /// Descriptor file name to collect
    pub descriptor_name: String,

    /// Deepest directory level searched, the root being level 0
    pub max_depth: usize,

    /// Path fragments that exclude a descriptor
    pub exclude: Vec<String>,

    /// Output configuration
    pub output: OutputConfig,

    /// Header of the merged manifest
    pub manifest: ManifestTemplate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the manifest is written to
    pub directory: PathBuf,

    /// Manifest file name; `.new` is appended when it already exists
    pub file_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from(".."),
            descriptor_name: DEFAULT_DESCRIPTOR_NAME.to_string(),
            max_depth: 4,
            exclude: vec!["site".to_string(), "bean".to_string()],
            output: OutputConfig::default(),
            manifest: ManifestTemplate::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            file_name: DEFAULT_OUTPUT_NAME.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a file (YAML or TOML)
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to read config file: {}", path.display()))?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        match extension {
            "yml" | "yaml" => serde_yaml::from_str(&contents)
                .into_diagnostic()
                .wrap_err("Failed to parse YAML config"),
            "toml" => toml::from_str(&contents)
                .into_diagnostic()
                .wrap_err("Failed to parse TOML config"),
            _ => {
                // Try YAML first, then TOML
                if let Ok(config) = serde_yaml::from_str(&contents) {
                    Ok(config)
                } else {
                    toml::from_str(&contents)
                        .into_diagnostic()
                        .wrap_err("Failed to parse config file")
                }
            }
        }
    }

    /// Try to load configuration from default locations
    pub fn from_default_locations(dir: &Path) -> Result<Self> {
        let default_names = [
            ".depmerge.yml",
            ".depmerge.yaml",
            ".depmerge.toml",
            "depmerge.yml",
            "depmerge.yaml",
            "depmerge.toml",
        ];

        for name in &default_names {
            let path = dir.join(name);
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        // No config file found, use defaults
        Ok(Self::default())
    }

    /// Check whether a descriptor path, relative to the scan root, is excluded
    pub fn should_exclude(&self, relative: &Path) -> bool {
        relative.components().any(|component| {
            let component = component.as_os_str().to_string_lossy();
            self.exclude
                .iter()
                .any(|pattern| !pattern.is_empty() && component.contains(pattern.as_str()))
        })
    }

    /// Where the manifest goes by default
    pub fn output_path(&self) -> PathBuf {
        self.output.directory.join(&self.output.file_name)
    }
}
