use anyhow::Context;
use etcetera::BaseStrategy;
use etcetera::base_strategy::Xdg;
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const LOG_ENV_VAR: &str = "CFGGUARD_LOG";

/// Sets up file logging when `CFGGUARD_LOG` holds a filter. Stdout carries the
/// hook protocol, so nothing is ever logged there.
pub fn setup() -> anyhow::Result<()> {
    if !get_optional_env_var(LOG_ENV_VAR)?.is_some_and(|v| !v.is_empty()) {
        return Ok(());
    }

    let xdg = etcetera::choose_base_strategy().context("couldn't determine your home directory")?;
    let log_file_path = get_log_file_path(&xdg).context("couldn't determine log file path")?;

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)
        .context("couldn't open log file")?;

    let json_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(false)
        .with_writer(log_file)
        .with_filter(EnvFilter::from_env(LOG_ENV_VAR));

    tracing_subscriber::registry()
        .with(json_layer)
        .try_init()
        .context("couldn't initialize tracing subscriber")?;

    Ok(())
}

fn get_log_file_path(xdg: &Xdg) -> anyhow::Result<PathBuf> {
    let log_dir = get_log_dir(xdg);
    std::fs::create_dir_all(&log_dir).context("couldn't create log directory")?;

    Ok(log_dir.join("cfgguard.log"))
}

#[cfg(not(target_os = "windows"))]
fn get_log_dir(xdg: &Xdg) -> PathBuf {
    // XDG_STATE_HOME is meant for logs
    xdg.state_dir()
        .map(|d| d.join("cfgguard"))
        .unwrap_or_else(|| xdg.home_dir().join(".cfgguard"))
}

#[cfg(target_os = "windows")]
fn get_log_dir(xdg: &Xdg) -> PathBuf {
    xdg.cache_dir().join("cfgguard")
}

fn get_optional_env_var(key: &str) -> anyhow::Result<Option<String>> {
    match std::env::var(key) {
        Ok(v) => Ok(Some(v)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(std::env::VarError::NotUnicode(_)) => Err(anyhow::anyhow!(
            r#"environment variable "{}" is invalid unicode"#,
            key
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_env_var_is_none() -> anyhow::Result<()> {
        // GIVEN
        let key = "CFGGUARD_TEST_VAR_THAT_IS_NEVER_SET";

        // WHEN
        let value = get_optional_env_var(key)?;

        // THEN
        assert_eq!(value, None);

        Ok(())
    }
}
