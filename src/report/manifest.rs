// Merged manifest rendering
//
// Output layout:
// ```xml
// <project>
//     <extend>…</extend>
//     …
//     <dependencies>
//     <dependency>
//         <id>ARTIFACT</id>
//         <version>VERSION</version>
//         <groupId>GROUP</groupId>
//     </dependency>
//
//     </dependencies>
// </project>
// ```

use crate::aggregate::{AggregateError, Dependency, DependencyList};
use quick_xml::events::Event;
use quick_xml::Reader;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Suffix used when the manifest name is already taken
pub const COLLISION_SUFFIX: &str = ".new";

/// Static project header of the merged manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManifestTemplate {
    /// Parent descriptor the manifest extends
    pub extend: String,
    pub name: String,
    pub id: String,
    pub short_description: String,
    pub description: String,
    /// Report plugins listed in `<reports>`
    pub reports: Vec<String>,
}

impl Default for ManifestTemplate {
    fn default() -> Self {
        Self {
            extend: "${basedir}/../../../buildsystem/project-common.xml".to_string(),
            name: "Apache Excalibur".to_string(),
            id: "excalibur-javadocs".to_string(),
            short_description: "Apache Excalibur".to_string(),
            description: "Apache Excalibur".to_string(),
            reports: vec![
                "maven-clover-plugin".to_string(),
                "maven-junit-report-plugin".to_string(),
                "maven-javadoc-plugin".to_string(),
            ],
        }
    }
}

impl ManifestTemplate {
    /// Everything up to and including the opening `<dependencies>`
    pub fn header(&self) -> String {
        let mut header = String::new();

        header.push_str("<project>\n");
        let _ = writeln!(header, "    <extend>{}</extend>", self.extend);
        header.push('\n');
        let _ = writeln!(header, "    <name>{}</name>", self.name);
        let _ = writeln!(header, "    <id>{}</id>", self.id);
        header.push('\n');
        let _ = writeln!(
            header,
            "    <shortDescription>{}</shortDescription>",
            self.short_description
        );
        let _ = writeln!(header, "    <description>{}</description>", self.description);
        header.push('\n');
        header.push_str("    <reports>\n");
        for report in &self.reports {
            let _ = writeln!(header, "      <report>{}</report>", report);
        }
        header.push_str("    </reports>\n");
        header.push('\n');
        header.push_str("    <dependencies>\n");

        header
    }

    pub fn footer(&self) -> &'static str {
        "\n    </dependencies>\n</project>\n"
    }

    /// Full manifest for a merged list
    pub fn render(&self, dependencies: &DependencyList) -> String {
        let mut out = self.header();

        if dependencies.is_empty() {
            out.push('\n');
        }
        for dependency in dependencies {
            out.push_str(&render_dependency(dependency));
            out.push('\n');
        }

        out.push_str(self.footer());
        out
    }
}

/// One `<dependency>` block; the group only appears when it differs from the artifact
pub fn render_dependency(dependency: &Dependency) -> String {
    let mut block = String::from("    <dependency>\n");
    let _ = writeln!(block, "        <id>{}</id>", dependency.artifact_id());
    let _ = writeln!(block, "        <version>{}</version>", dependency.version());
    if let Some(group_id) = dependency.explicit_group_id() {
        let _ = writeln!(block, "        <groupId>{}</groupId>", group_id);
    }
    block.push_str("    </dependency>\n");
    block
}

/// Pick `dir/file_name`, or `dir/file_name.new` when the former exists
pub fn resolve_output_path(dir: &Path, file_name: &str) -> PathBuf {
    let preferred = dir.join(file_name);
    if preferred.exists() {
        let alternate = dir.join(format!("{}{}", file_name, COLLISION_SUFFIX));
        info!(
            "{} already exists, writing {} instead",
            preferred.display(),
            alternate.display()
        );
        alternate
    } else {
        preferred
    }
}

/// Write `contents` to `path`, diverting to the `.new` name when `path` exists
pub fn write_avoiding_collision(path: &Path, contents: &str) -> Result<PathBuf, AggregateError> {
    let dir = path.parent().unwrap_or_else(|| Path::new(""));
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let target = resolve_output_path(dir, &file_name);

    std::fs::write(&target, contents).map_err(|source| AggregateError::WriteManifest {
        path: target.clone(),
        source,
    })?;
    debug!("Wrote {} bytes to {}", contents.len(), target.display());

    Ok(target)
}

/// Structural problems found in a rendered manifest
#[derive(Error, Debug)]
pub enum ManifestCheckError {
    #[error("Malformed manifest near byte {position}: {source}")]
    Malformed {
        position: usize,
        source: quick_xml::Error,
    },
    #[error("Manifest ends with {0} unclosed element(s)")]
    Unclosed(usize),
}

/// Stream the manifest through an XML reader and report the first problem
pub fn verify_well_formed(xml: &str) -> Result<(), ManifestCheckError> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut buf = Vec::new();
    let mut depth = 0usize;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(_)) => depth += 1,
            Ok(Event::End(_)) => depth = depth.saturating_sub(1),
            Ok(Event::Text(ref text)) => {
                if let Err(source) = text.unescape() {
                    return Err(ManifestCheckError::Malformed {
                        position: reader.buffer_position(),
                        source,
                    });
                }
            }
            Ok(Event::Eof) => break,
            Err(source) => {
                return Err(ManifestCheckError::Malformed {
                    position: reader.buffer_position(),
                    source,
                });
            }
            _ => {}
        }
        buf.clear();
    }

    if depth > 0 {
        return Err(ManifestCheckError::Unclosed(depth));
    }
    Ok(())
}
