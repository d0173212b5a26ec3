//! Constants used throughout gangway.
//!
//! Centralizes magic strings and configuration defaults.

/// Configuration file name (gangway.toml).
pub const CONFIG_FILE: &str = "gangway.toml";

/// Default stack region.
pub const DEFAULT_REGION: &str = "eu-central-1";

/// Default VPC address range.
pub const DEFAULT_VPC_CIDR: &str = "10.0.0.0/16";

/// Default subnet address range. Must stay inside [`DEFAULT_VPC_CIDR`].
pub const DEFAULT_SUBNET_CIDR: &str = "10.0.0.0/24";

/// Default source range allowed to reach the SSH port.
pub const DEFAULT_SSH_INGRESS_CIDR: &str = "0.0.0.0/0";

/// Default instance size class.
pub const DEFAULT_INSTANCE_TYPE: &str = "t2.micro";

/// Default public key location. A leading `~` is expanded at load time.
pub const DEFAULT_KEY_PATH: &str = "~/.ssh/id_ed25519.pub";

/// TCP port opened by the rendered security group.
pub const SSH_PORT: u16 = 22;

/// Seconds between stack status polls.
pub const POLL_INTERVAL_SECS: u64 = 5;

/// Default ceiling on a deploy or destroy wait.
pub const DEFAULT_WAIT_TIMEOUT_SECS: u64 = 900;

/// Public SSM parameter resolving to the latest Amazon Linux 2023 AMI.
///
/// Referencing the alias keeps the template region-agnostic; the provider
/// resolves it at stack-create time.
pub const AMI_SSM_ALIAS: &str =
    "/aws/service/ami-amazon-linux-latest/al2023-ami-kernel-default-x86_64";
