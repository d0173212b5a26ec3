//! Init command - scaffold gangway.toml.

use std::path::Path;

use tracing::info;

use crate::cli::output;
use crate::core::config::Config;
use crate::core::constants;
use crate::core::validation;
use crate::error::{ConfigError, Result};

/// Scaffold a configuration file at `config_path`.
pub fn execute(
    config_path: &Path,
    name: Option<String>,
    region: Option<String>,
    key_path: Option<String>,
    force: bool,
) -> Result<()> {
    if config_path.exists() && !force {
        return Err(ConfigError::AlreadyInitialized(config_path.display().to_string()).into());
    }

    let stack_name = name.unwrap_or_else(default_stack_name);
    validation::validate_stack_name(&stack_name)?;

    let region = region.unwrap_or_else(|| constants::DEFAULT_REGION.to_string());
    let key_path = key_path.unwrap_or_else(|| constants::DEFAULT_KEY_PATH.to_string());

    info!(stack = %stack_name, region = %region, "initializing");

    let config = Config::scaffold(&stack_name, &region, &key_path);
    config.validate()?;
    config.save_to(config_path)?;

    output::success(&format!(
        "initialized {}",
        output::path(&config_path.display().to_string())
    ));
    output::kv("stack", &stack_name);
    output::kv("region", &region);
    output::kv("key", &key_path);
    output::hint(&format!("review it, then run: {}", output::cmd("gangway check")));

    Ok(())
}

/// Default stack name derived from the local username.
///
/// Usernames can carry characters a stack name cannot, so the name is
/// filtered down to the allowed alphabet first.
fn default_stack_name() -> String {
    let user: String = whoami::username()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect();

    let user = user.trim_matches('-');
    if user.is_empty() || !user.starts_with(|c: char| c.is_ascii_alphabetic()) {
        "gangway-dev".to_string()
    } else {
        format!("{}-gangway", user)
    }
}
