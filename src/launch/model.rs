use serde::{Deserialize, Serialize};

/// One resolved launch intent: which engine, which tool inside it, which project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ConfigModel {
    /// Engine installation root. Empty when unresolved.
    pub engine: String,
    /// Binary name inside `Engine/Binaries/<Platform>`.
    pub tool: String,
    /// Project descriptor path, stored without trailing whitespace.
    pub project: String,
    /// Extra arguments passed after the project.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<String>,
}

impl ConfigModel {
    /// Returns true when both `engine` and `tool` are set.
    pub fn is_launchable(&self) -> bool {
        !self.engine.is_empty() && !self.tool.is_empty()
    }
}
