use serde::Serialize;
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advisory {
    ProtectedFile { basename: String },
    ReservedDirectory { basename: String },
}

impl Advisory {
    pub fn reason(&self) -> String {
        self.to_string()
    }

    pub fn to_hook_output(&self) -> HookOutput {
        HookOutput {
            hook_specific_output: HookSpecificOutput {
                hook_event_name: HookEventName::PreToolUse,
                permission_decision: PermissionDecision::Ask,
                permission_decision_reason: self.reason(),
            },
        }
    }
}

impl Display for Advisory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Advisory::ProtectedFile { basename } => write!(
                f,
                "Modifying protected configuration file: {}. Are you sure?",
                basename
            ),
            Advisory::ReservedDirectory { basename } => write!(
                f,
                "Modifying Claude configuration: {}. This affects development workflow.",
                basename
            ),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HookOutput {
    hook_specific_output: HookSpecificOutput,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HookSpecificOutput {
    hook_event_name: HookEventName,
    permission_decision: PermissionDecision,
    permission_decision_reason: String,
}

#[derive(Debug, Serialize)]
pub enum HookEventName {
    PreToolUse,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionDecision {
    Ask,
}
