use serde::Deserialize;

/// Payload a tool framework sends before running a tool. Only
/// `tool_input.file_path` is read; every other field is ignored.
#[derive(Debug, Deserialize)]
pub struct ToolInvocation {
    pub tool_input: Option<ToolInput>,
}

#[derive(Debug, Deserialize)]
pub struct ToolInput {
    pub file_path: Option<String>,
}

impl ToolInvocation {
    pub fn for_path(path: &str) -> Self {
        Self {
            tool_input: Some(ToolInput {
                file_path: Some(path.to_string()),
            }),
        }
    }

    /// The candidate file path, if present and non-empty.
    pub fn file_path(&self) -> Option<&str> {
        self.tool_input
            .as_ref()
            .and_then(|i| i.file_path.as_deref())
            .filter(|p| !p.is_empty())
    }
}
