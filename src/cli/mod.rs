//! Command-line interface.

pub mod check;
pub mod completions;
pub mod deploy;
pub mod destroy;
pub mod init;
pub mod output;
pub mod render;
pub mod status;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::core::constants;

/// Gangway - provision an SSH-reachable EC2 instance from one template.
#[derive(Parser)]
#[command(
    name = "gangway",
    about = "Provision an SSH-reachable EC2 instance from one declarative template",
    version,
    after_help = "Lower the gangway. Climb aboard."
)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = constants::CONFIG_FILE)]
    pub config: PathBuf,

    /// Verbose logging (same as GANGWAY_LOG=gangway=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Scaffold a gangway.toml in the current directory
    Init {
        /// Stack name (defaults to <username>-gangway)
        #[arg(short, long)]
        name: Option<String>,
        /// Target region
        #[arg(short, long)]
        region: Option<String>,
        /// Path to the SSH public key file
        #[arg(short, long)]
        key_path: Option<String>,
        /// Overwrite an existing configuration
        #[arg(long)]
        force: bool,
    },

    /// Validate the configuration and public key without touching the provider
    Check {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render the CloudFormation template
    Render {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Emit compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Submit the stack and wait for it to settle
    Deploy {
        /// Return immediately after submitting
        #[arg(long)]
        no_wait: bool,
        /// Seconds to wait before giving up
        #[arg(long, default_value_t = constants::DEFAULT_WAIT_TIMEOUT_SECS)]
        timeout: u64,
    },

    /// Show current stack status and outputs
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete the stack
    Destroy {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
        /// Return immediately after requesting deletion
        #[arg(long)]
        no_wait: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command, config_path: &Path) -> crate::error::Result<()> {
    use Command::*;

    match command {
        Init {
            name,
            region,
            key_path,
            force,
        } => init::execute(config_path, name, region, key_path, force),
        Check { json } => check::execute(config_path, json),
        Render { out, compact } => render::execute(config_path, out.as_deref(), compact),
        Deploy { no_wait, timeout } => deploy::execute(config_path, no_wait, timeout),
        Status { json } => status::execute(config_path, json),
        Destroy { yes, no_wait } => destroy::execute(config_path, yes, no_wait),
        Completions { shell } => completions::execute(shell),
    }
}
