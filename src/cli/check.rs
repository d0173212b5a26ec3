//! Check command - offline validation of configuration and key.
//!
//! Everything a deploy validates, without touching the provider. A config
//! that passes `check` renders; whether the provider accepts the stack is
//! its own business.

use std::path::Path;

use serde_json::json;
use tracing::info;

use crate::cli::output;
use crate::core::config::Config;
use crate::core::key;
use crate::error::Result;

/// Validate config and key, printing a summary.
pub fn execute(config_path: &Path, json_output: bool) -> Result<()> {
    let config = Config::load_from(config_path)?;
    let public_key = key::load(&config.key.path)?;

    info!(stack = %config.stack.name, "configuration and key are valid");

    let vpc = config.vpc_cidr()?;
    let subnet = config.subnet_cidr()?;

    if json_output {
        let doc = json!({
            "stack": config.stack.name,
            "region": config.stack.region,
            "vpc_cidr": vpc.to_string(),
            "subnet_cidr": subnet.to_string(),
            "subnet_hosts": subnet.hosts(),
            "availability_zone": config.network.availability_zone,
            "ssh_ingress_cidr": config.network.ssh_ingress_cidr,
            "instance_type": config.instance.instance_type,
            "key_name": config.instance.key_name,
            "key": {
                "algorithm": public_key.algorithm().display_name(),
                "bits": public_key.bits(),
                "fingerprint": public_key.fingerprint(),
                "comment": public_key.comment(),
            },
        });
        println!("{}", serde_json::to_string_pretty(&doc).unwrap_or_default());
        return Ok(());
    }

    output::section("Configuration");
    output::kv("stack", &config.stack.name);
    output::kv("region", &config.stack.region);
    output::kv("vpc", vpc);
    output::kv(
        "subnet",
        format!(
            "{} ({} hosts, {})",
            subnet,
            subnet.hosts(),
            config.network.availability_zone
        ),
    );
    output::kv("ssh from", &config.network.ssh_ingress_cidr);
    output::kv("instance", &config.instance.instance_type);

    output::section("Public key");
    output::kv("name", &config.instance.key_name);
    output::kv(
        "algorithm",
        match public_key.bits() {
            Some(bits) => format!("{} ({} bits)", public_key.algorithm().display_name(), bits),
            None => public_key.algorithm().display_name().to_string(),
        },
    );
    output::kv("fingerprint", public_key.fingerprint());
    if let Some(comment) = public_key.comment() {
        output::kv("comment", comment);
    }

    println!();
    output::success("configuration is valid");

    Ok(())
}
