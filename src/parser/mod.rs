mod descriptor;
pub mod tags;

pub use descriptor::{DescriptorParser, DEPENDENCY_BOUNDARY};
pub use tags::{extract_tag, strip, TagPattern, TagScanner};
