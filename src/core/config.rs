//! Configuration file management.
//!
//! Handles reading, writing, and validating `gangway.toml`. The values here
//! are the template parameters of a deploy: immutable once loaded, consumed
//! once at render time.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::constants;
use crate::core::net::CidrBlock;
use crate::core::validation;
use crate::error::{ConfigError, Result, ValidationError};

/// Project configuration stored in `gangway.toml`.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Stack identity: name and region
    pub stack: StackSection,
    /// Address ranges and placement
    pub network: NetworkSection,
    /// Instance size and key-pair record name
    pub instance: InstanceSection,
    /// Local public key location
    pub key: KeySection,
}

/// `[stack]` section.
#[derive(Debug, Serialize, Deserialize)]
pub struct StackSection {
    /// CloudFormation stack name
    pub name: String,
    /// Target region, e.g. `eu-central-1`
    pub region: String,
}

/// `[network]` section.
#[derive(Debug, Serialize, Deserialize)]
pub struct NetworkSection {
    /// VPC address range
    pub vpc_cidr: String,
    /// Subnet address range; must be contained in `vpc_cidr`
    pub subnet_cidr: String,
    /// Availability zone the subnet is placed in
    pub availability_zone: String,
    /// Source range allowed to reach the SSH port
    #[serde(default = "default_ssh_ingress")]
    pub ssh_ingress_cidr: String,
}

fn default_ssh_ingress() -> String {
    constants::DEFAULT_SSH_INGRESS_CIDR.to_string()
}

/// `[instance]` section.
#[derive(Debug, Serialize, Deserialize)]
pub struct InstanceSection {
    /// Instance size class, e.g. `t2.micro`
    #[serde(rename = "type")]
    pub instance_type: String,
    /// Name of the key-pair record created in the stack
    pub key_name: String,
}

/// `[key]` section.
#[derive(Debug, Serialize, Deserialize)]
pub struct KeySection {
    /// Path to the public key file; `-` reads stdin, `~` is expanded
    pub path: String,
}

impl Config {
    /// Build a fresh configuration with documented defaults.
    pub fn scaffold(stack_name: &str, region: &str, key_path: &str) -> Self {
        Self {
            stack: StackSection {
                name: stack_name.to_string(),
                region: region.to_string(),
            },
            network: NetworkSection {
                vpc_cidr: constants::DEFAULT_VPC_CIDR.to_string(),
                subnet_cidr: constants::DEFAULT_SUBNET_CIDR.to_string(),
                availability_zone: format!("{}a", region),
                ssh_ingress_cidr: constants::DEFAULT_SSH_INGRESS_CIDR.to_string(),
            },
            instance: InstanceSection {
                instance_type: constants::DEFAULT_INSTANCE_TYPE.to_string(),
                key_name: format!("{}-key", stack_name),
            },
            key: KeySection {
                path: key_path.to_string(),
            },
        }
    }

    /// Load and validate configuration from `path`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotInitialized` if the file doesn't exist,
    /// `ConfigError::Parse` if the TOML is malformed, and validation errors
    /// for incoherent values.
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");

        if !path.exists() {
            return Err(ConfigError::NotInitialized.into());
        }
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;

        config.validate()?;

        Ok(config)
    }

    /// Save configuration to `path`.
    ///
    /// # Errors
    ///
    /// Returns error if serialization or the file write fails.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        debug!(path = %path.display(), "saving config");

        let contents = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        std::fs::write(path, contents).map_err(ConfigError::WriteFile)?;

        Ok(())
    }

    /// Parsed VPC address range.
    pub fn vpc_cidr(&self) -> Result<CidrBlock> {
        Ok(self.network.vpc_cidr.parse::<CidrBlock>()?)
    }

    /// Parsed subnet address range.
    pub fn subnet_cidr(&self) -> Result<CidrBlock> {
        Ok(self.network.subnet_cidr.parse::<CidrBlock>()?)
    }

    /// Parsed SSH ingress source range.
    pub fn ssh_ingress_cidr(&self) -> Result<CidrBlock> {
        Ok(self.network.ssh_ingress_cidr.parse::<CidrBlock>()?)
    }

    /// Validate the configuration as a whole.
    ///
    /// Checks naming rules, that all three CIDR blocks parse, that the
    /// subnet is contained in the VPC range, and that the availability zone
    /// belongs to the configured region.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<()> {
        debug!("validating config");

        validation::validate_stack_name(&self.stack.name)?;
        validation::validate_key_name(&self.instance.key_name)?;
        validation::validate_instance_type(&self.instance.instance_type)?;
        validation::validate_availability_zone(
            &self.network.availability_zone,
            &self.stack.region,
        )?;

        let vpc = self.vpc_cidr()?;
        let subnet = self.subnet_cidr()?;
        self.ssh_ingress_cidr()?;

        if !vpc.contains(&subnet) {
            return Err(ValidationError::SubnetNotInVpc {
                subnet: subnet.to_string(),
                vpc: vpc.to_string(),
            }
            .into());
        }

        if self.key.path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "key.path",
                reason: "cannot be empty".to_string(),
            }
            .into());
        }

        Ok(())
    }
}
