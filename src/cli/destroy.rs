//! Destroy command - delete the stack.
//!
//! Deleting the stack also deletes the key-pair record; the local key files
//! are untouched, so the same key can board the next instance.

use std::io::{BufRead, Write};
use std::path::Path;
use std::time::Duration;

use tracing::info;

use crate::cli::output;
use crate::core::config::Config;
use crate::core::constants;
use crate::core::stack::{self, Cloud, StackBackend, StackStatus};
use crate::error::Result;

/// Delete the configured stack.
pub fn execute(config_path: &Path, yes: bool, no_wait: bool) -> Result<()> {
    let config = Config::load_from(config_path)?;
    let stack_name = &config.stack.name;

    if !yes && !confirm(stack_name)? {
        output::warn("aborted");
        return Ok(());
    }

    let backend = Cloud::new(config.stack.region.clone());
    backend.delete(stack_name)?;
    info!(stack = %stack_name, "delete requested");

    if no_wait {
        output::success(&format!("delete requested for {}", stack_name));
        output::hint(&format!("follow it with: {}", output::cmd("gangway status")));
        return Ok(());
    }

    let desc = stack::wait_for_terminal(
        &backend,
        stack_name,
        Duration::from_secs(constants::POLL_INTERVAL_SECS),
        Duration::from_secs(constants::DEFAULT_WAIT_TIMEOUT_SECS),
        |status| output::dimmed(&format!("  {}", status)),
    )?;

    match desc.status {
        StackStatus::DeleteComplete | StackStatus::NotFound => {
            output::success(&format!("stack {} deleted", stack_name));
        }
        other => {
            output::error(&format!("stack ended in {}", other));
            if let Some(event) = backend.failure_reason(stack_name)? {
                output::kv("resource", &event.logical_id);
                output::kv("reason", &event.reason);
            }
        }
    }

    Ok(())
}

/// Ask the operator to type the stack name back.
fn confirm(stack_name: &str) -> Result<bool> {
    print!("type the stack name to confirm deletion [{}]: ", stack_name);
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;

    Ok(line.trim() == stack_name)
}
