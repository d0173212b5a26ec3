//! Status command - current stack state and outputs.

use std::path::Path;

use serde_json::json;

use crate::cli::output;
use crate::core::config::Config;
use crate::core::stack::{Cloud, StackBackend, StackStatus};
use crate::error::Result;

/// Describe the configured stack.
pub fn execute(config_path: &Path, json_output: bool) -> Result<()> {
    let config = Config::load_from(config_path)?;
    let backend = Cloud::new(config.stack.region.clone());

    let desc = backend.status(&config.stack.name)?;

    if json_output {
        let doc = json!({
            "stack": config.stack.name,
            "region": config.stack.region,
            "status": desc.status.as_str(),
            "status_reason": desc.status_reason,
            "updated_at": desc.updated_at,
            "outputs": desc.outputs,
        });
        println!("{}", serde_json::to_string_pretty(&doc).unwrap_or_default());
        return Ok(());
    }

    output::section(&config.stack.name);
    output::kv("region", &config.stack.region);
    output::kv("status", &desc.status);

    if let Some(reason) = &desc.status_reason {
        output::kv("reason", reason);
    }
    if let Some(at) = desc.updated_at {
        if let Some(when) = chrono::DateTime::from_timestamp(at, 0) {
            output::kv("updated", when.format("%Y-%m-%d %H:%M:%S UTC"));
        }
    }

    match desc.status {
        StackStatus::NotFound => {
            output::hint(&format!("deploy it with: {}", output::cmd("gangway deploy")));
        }
        StackStatus::CreateComplete => {
            for (key, value) in &desc.outputs {
                output::kv(key, value);
            }
        }
        _ => {}
    }

    Ok(())
}
