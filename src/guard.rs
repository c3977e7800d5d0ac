use crate::domain::{Advisory, ProtectionPolicy, ToolInvocation};
use std::path::{Component, Path};
use tracing::{Level, instrument};

#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("payload is empty")]
    Empty,
    #[error("couldn't parse payload: {0}")]
    CouldntParse(#[from] serde_json::Error),
}

pub fn parse_payload(payload: &[u8]) -> Result<ToolInvocation, PayloadError> {
    if payload.trim_ascii().is_empty() {
        return Err(PayloadError::Empty);
    }

    Ok(serde_json::from_slice(payload)?)
}

/// Evaluates a raw hook payload. Payloads that don't parse carry no opinion.
pub fn evaluate_payload(policy: &ProtectionPolicy, payload: &[u8]) -> Option<Advisory> {
    match parse_payload(payload) {
        Ok(invocation) => evaluate(policy, &invocation),
        Err(e) => {
            tracing::debug!(error = %e, "ignoring payload");
            None
        }
    }
}

#[instrument(level = Level::DEBUG, ret, skip_all, fields(path = invocation.file_path()))]
pub fn evaluate(policy: &ProtectionPolicy, invocation: &ToolInvocation) -> Option<Advisory> {
    let path = invocation.file_path()?;
    let basename = basename(path);

    if policy.is_protected_file(&basename) {
        Some(Advisory::ProtectedFile { basename })
    } else if policy.is_in_reserved_dir(path) {
        Some(Advisory::ReservedDirectory { basename })
    } else {
        None
    }
}

/// Last path component as written; `..` is kept, a bare root yields "".
fn basename(path: &str) -> String {
    match Path::new(path).components().next_back() {
        Some(Component::Normal(name)) => name.to_string_lossy().into_owned(),
        Some(Component::ParentDir) => "..".to_string(),
        _ => String::new(),
    }
}
