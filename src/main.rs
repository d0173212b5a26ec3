//! Gangway - provision an SSH-reachable EC2 instance from one template.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use gangway::cli::output;
use gangway::cli::{execute, Cli};
use gangway::error::{ConfigError, Error, KeyError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("GANGWAY_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("gangway=debug")
        } else {
            EnvFilter::new("gangway=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .init();

    if let Err(e) = execute(cli.command, &cli.config) {
        let suggestion = match &e {
            Error::Config(ConfigError::NotInitialized) => Some("run: gangway init"),
            Error::Config(ConfigError::AlreadyInitialized(_)) => {
                Some("pass --force to overwrite the existing config")
            }
            Error::Key(KeyError::NotFound(_)) => {
                Some("generate a key pair with: ssh-keygen -t ed25519")
            }
            Error::Key(KeyError::PrivateKeyMaterial(_)) => {
                Some("point key.path at the .pub file, not the private key")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
