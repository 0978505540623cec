mod loader;

pub use loader::{Config, OutputConfig, DEFAULT_DESCRIPTOR_NAME, DEFAULT_OUTPUT_NAME};
