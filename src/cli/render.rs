//! Render command - emit the CloudFormation template.

use std::path::Path;

use tracing::info;

use crate::cli::output;
use crate::core::config::Config;
use crate::core::key;
use crate::core::template::Template;
use crate::error::Result;

/// Render the template to stdout or a file.
pub fn execute(config_path: &Path, out: Option<&Path>, compact: bool) -> Result<()> {
    let config = Config::load_from(config_path)?;
    let public_key = key::load(&config.key.path)?;

    let template = Template::render(&config, &public_key)?;
    let body = if compact {
        template.to_json()?
    } else {
        template.to_json_pretty()?
    };

    info!(
        resources = template.logical_ids().len(),
        bytes = body.len(),
        "template rendered"
    );

    match out {
        Some(path) => {
            std::fs::write(path, &body)?;
            output::success(&format!(
                "wrote template to {}",
                output::path(&path.display().to_string())
            ));
        }
        None => println!("{}", body),
    }

    Ok(())
}
