//! Gangway - provision an SSH-reachable EC2 instance from one template.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── init          # Scaffold gangway.toml
//! │   ├── check         # Offline config + key validation
//! │   ├── render        # Render the CloudFormation template
//! │   ├── deploy        # Submit the stack and poll to completion
//! │   ├── status        # Current stack status and outputs
//! │   ├── destroy       # Delete the stack
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # gangway.toml management
//!     ├── key           # SSH public key loading and validation
//!     ├── net           # CIDR block parsing and containment
//!     ├── template      # CloudFormation template rendering
//!     ├── stack/        # Stack backends
//!     │   ├── mod       # StackBackend trait, status model, polling
//!     │   └── cloudformation  # AWS CloudFormation implementation
//!     └── validation    # Input validation rules
//! ```
//!
//! # Pipeline
//!
//! The tool is a linear pipeline: load a local SSH public key, render a
//! declarative template around it, submit the template as a stack, then
//! poll until the stack settles. The private half of the key pair is never
//! read, let alone transmitted.

pub mod cli;
pub mod core;
pub mod error;
