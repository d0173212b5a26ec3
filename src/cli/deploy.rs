//! Deploy command - the whole pipeline: load, render, submit, poll.

use std::path::Path;
use std::time::Duration;

use tracing::info;

use crate::cli::output;
use crate::core::config::Config;
use crate::core::constants;
use crate::core::key;
use crate::core::stack::{self, Cloud, StackBackend};
use crate::core::template::Template;
use crate::error::{Result, StackError};

/// Load, render, submit, and (unless `no_wait`) poll to a terminal state.
pub fn execute(config_path: &Path, no_wait: bool, timeout_secs: u64) -> Result<()> {
    // Full offline validation first: nothing reaches the provider unless
    // the subnet/key invariants already hold.
    let config = Config::load_from(config_path)?;
    let public_key = key::load(&config.key.path)?;

    let template = Template::render(&config, &public_key)?;
    let body = template.to_json_pretty()?;

    let stack_name = &config.stack.name;
    let backend = Cloud::new(config.stack.region.clone());

    output::header(&format!("deploying {}", stack_name));
    output::kv("region", &config.stack.region);
    output::kv("key", public_key.fingerprint());

    let stack_id = backend.submit(stack_name, &body)?;
    info!(stack_id = %stack_id, "stack submitted");
    output::kv("stack id", &stack_id);

    if no_wait {
        output::hint(&format!("follow it with: {}", output::cmd("gangway status")));
        return Ok(());
    }

    let desc = stack::wait_for_terminal(
        &backend,
        stack_name,
        Duration::from_secs(constants::POLL_INTERVAL_SECS),
        Duration::from_secs(timeout_secs),
        |status| output::dimmed(&format!("  {}", status)),
    )?;

    if desc.status.is_failure() {
        output::error(&format!("stack ended in {}", desc.status));
        if let Some(event) = backend.failure_reason(stack_name)? {
            output::kv("resource", &event.logical_id);
            output::kv("status", &event.status);
            output::kv("reason", &event.reason);
        }
        return Err(StackError::Failed {
            name: stack_name.clone(),
            status: desc.status.to_string(),
        }
        .into());
    }

    println!();
    output::success(&format!("stack {} is up", stack_name));
    for (key, value) in &desc.outputs {
        output::kv(key, value);
    }

    Ok(())
}
