//! Error types for gangway operations.
//!
//! Each subsystem has its own error enum; the top-level [`Error`] composes
//! them so `?` works across module boundaries.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Key(#[from] KeyError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Stack(#[from] StackError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from `gangway.toml` handling.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("not initialized: run `gangway init` first")]
    NotInitialized,

    #[error("already initialized: {0} exists")]
    AlreadyInitialized(String),

    #[error("failed to read config: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to write config: {0}")]
    WriteFile(#[source] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Errors from loading and parsing SSH public keys.
#[derive(Error, Debug)]
pub enum KeyError {
    #[error("public key file not found: {0}")]
    NotFound(String),

    #[error("refusing to read {0}: it contains private key material")]
    PrivateKeyMaterial(String),

    #[error("no public key line found in {0}")]
    Empty(String),

    #[error("failed to read public key: {0}")]
    ReadFailed(#[source] std::io::Error),

    #[error("unknown key algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("malformed public key line: {0}")]
    MalformedLine(String),

    #[error("invalid base64 key material: {0}")]
    InvalidBase64(String),

    #[error("key material tag {inner} does not match declared algorithm {outer}")]
    WireMismatch { outer: String, inner: String },
}

/// Errors from template rendering.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("template serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors from the stack backend.
#[derive(Error, Debug)]
pub enum StackError {
    #[error("failed to create async runtime: {0}")]
    Runtime(String),

    #[error("stack submit failed: {0}")]
    SubmitFailed(String),

    #[error("stack lookup failed: {0}")]
    DescribeFailed(String),

    #[error("stack delete failed: {0}")]
    DeleteFailed(String),

    #[error("stack {name} ended in {status}")]
    Failed { name: String, status: String },

    #[error("timed out after {seconds}s waiting for stack {name}")]
    Timeout { name: String, seconds: u64 },

    #[error("stack not found: {0}")]
    NotFound(String),
}

/// Errors from input validation.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("invalid CIDR block '{value}': {reason}")]
    InvalidCidr { value: String, reason: String },

    #[error("subnet {subnet} is not contained in network {vpc}")]
    SubnetNotInVpc { subnet: String, vpc: String },

    #[error("invalid stack name '{name}': {reason}")]
    InvalidStackName { name: String, reason: String },

    #[error("invalid key pair name '{name}': {reason}")]
    InvalidKeyName { name: String, reason: String },

    #[error("invalid instance type '{value}': {reason}")]
    InvalidInstanceType { value: String, reason: String },

    #[error("availability zone '{zone}' does not belong to region '{region}'")]
    ZoneOutsideRegion { zone: String, region: String },
}
