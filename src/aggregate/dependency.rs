use serde::Serialize;

/// A normalized dependency entry, identified by its artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dependency {
    artifact_id: String,

    /// Only set when it differs from the artifact
    #[serde(skip_serializing_if = "Option::is_none")]
    group_id: Option<String>,

    version: String,
}

impl Dependency {
    /// Create a record; an empty group or one equal to the artifact is dropped
    pub fn new(
        artifact_id: impl Into<String>,
        group_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        let artifact_id = artifact_id.into();
        let group_id = group_id.into();
        let group_id = if group_id.is_empty() || group_id == artifact_id {
            None
        } else {
            Some(group_id)
        };

        Self {
            artifact_id,
            group_id,
            version: version.into(),
        }
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    /// Effective group, which defaults to the artifact
    pub fn group_id(&self) -> &str {
        self.group_id.as_deref().unwrap_or(&self.artifact_id)
    }

    /// Group only when it carries information beyond the artifact
    pub fn explicit_group_id(&self) -> Option<&str> {
        self.group_id.as_deref()
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}
