//! Stack backends.
//!
//! Abstracts the provider's stack-management API behind a trait so the
//! deploy pipeline can be exercised without a cloud account. Status values
//! are parsed into a crate-local enum at the backend boundary; provider SDK
//! types do not leak past the implementation module.

use std::collections::BTreeMap;
use std::fmt;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::error::{Result, StackError};

pub mod cloudformation;

pub use cloudformation::Cloud;

/// Lifecycle state of a stack, parsed from the provider's status string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackStatus {
    CreateInProgress,
    CreateComplete,
    CreateFailed,
    RollbackInProgress,
    RollbackComplete,
    RollbackFailed,
    DeleteInProgress,
    DeleteComplete,
    DeleteFailed,
    /// The stack does not exist (never created, or delete finished and the
    /// record aged out).
    NotFound,
    /// Any status this tool does not model (update flows, review states).
    Other(String),
}

impl StackStatus {
    /// Parse a provider status string.
    pub fn parse(s: &str) -> Self {
        match s {
            "CREATE_IN_PROGRESS" => Self::CreateInProgress,
            "CREATE_COMPLETE" => Self::CreateComplete,
            "CREATE_FAILED" => Self::CreateFailed,
            "ROLLBACK_IN_PROGRESS" => Self::RollbackInProgress,
            "ROLLBACK_COMPLETE" => Self::RollbackComplete,
            "ROLLBACK_FAILED" => Self::RollbackFailed,
            "DELETE_IN_PROGRESS" => Self::DeleteInProgress,
            "DELETE_COMPLETE" => Self::DeleteComplete,
            "DELETE_FAILED" => Self::DeleteFailed,
            other => Self::Other(other.to_string()),
        }
    }

    /// Whether the stack has settled and polling can stop.
    pub fn is_terminal(&self) -> bool {
        !matches!(
            self,
            Self::CreateInProgress
                | Self::RollbackInProgress
                | Self::DeleteInProgress
                | Self::Other(_)
        )
    }

    /// Whether this terminal state means the operation did not succeed.
    ///
    /// `RollbackComplete` counts as failure: the create was undone.
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Self::CreateFailed | Self::RollbackInProgress | Self::RollbackComplete
                | Self::RollbackFailed | Self::DeleteFailed
        )
    }

    /// The provider-format status string.
    pub fn as_str(&self) -> &str {
        match self {
            Self::CreateInProgress => "CREATE_IN_PROGRESS",
            Self::CreateComplete => "CREATE_COMPLETE",
            Self::CreateFailed => "CREATE_FAILED",
            Self::RollbackInProgress => "ROLLBACK_IN_PROGRESS",
            Self::RollbackComplete => "ROLLBACK_COMPLETE",
            Self::RollbackFailed => "ROLLBACK_FAILED",
            Self::DeleteInProgress => "DELETE_IN_PROGRESS",
            Self::DeleteComplete => "DELETE_COMPLETE",
            Self::DeleteFailed => "DELETE_FAILED",
            Self::NotFound => "NOT_FOUND",
            Self::Other(s) => s,
        }
    }
}

impl fmt::Display for StackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of a stack as reported by the provider.
#[derive(Debug, Clone)]
pub struct StackDescription {
    pub status: StackStatus,
    /// Provider's own explanation of the status, when it gives one
    pub status_reason: Option<String>,
    /// Template outputs, populated once the stack is complete
    pub outputs: BTreeMap<String, String>,
    /// Last status change, epoch seconds
    pub updated_at: Option<i64>,
}

impl StackDescription {
    fn not_found() -> Self {
        Self {
            status: StackStatus::NotFound,
            status_reason: None,
            outputs: BTreeMap::new(),
            updated_at: None,
        }
    }
}

/// First resource-level failure of a stack operation.
#[derive(Debug, Clone)]
pub struct FailureEvent {
    pub logical_id: String,
    pub status: String,
    pub reason: String,
}

/// Stack-management backend trait.
///
/// One method per provider API call the pipeline needs. Implementations are
/// synchronous; the AWS backend drives its async SDK from a short-lived
/// runtime per call.
pub trait StackBackend {
    /// Backend name for display/logging.
    fn name(&self) -> &'static str;

    /// Submit a rendered template as a new stack. Returns the stack id.
    ///
    /// # Errors
    ///
    /// Returns `StackError::SubmitFailed` with the provider message,
    /// including the name-collision case.
    fn submit(&self, stack_name: &str, template_body: &str) -> Result<String>;

    /// Describe the current state of a stack.
    ///
    /// A stack the provider has no record of yields `StackStatus::NotFound`
    /// rather than an error, so polling a delete can converge.
    fn status(&self, stack_name: &str) -> Result<StackDescription>;

    /// Request deletion of a stack.
    fn delete(&self, stack_name: &str) -> Result<()>;

    /// First failed resource event of the most recent operation, if any.
    fn failure_reason(&self, stack_name: &str) -> Result<Option<FailureEvent>>;
}

/// Poll `backend` until the stack reaches a terminal state.
///
/// Reports each status transition through `on_transition`. Polling is a
/// plain sleep loop: the whole tool is single-shot and human-driven, so
/// there is nothing to overlap with.
///
/// # Errors
///
/// Returns `StackError::Timeout` if no terminal state is reached within
/// `timeout`, and any error the backend itself produces.
pub fn wait_for_terminal(
    backend: &dyn StackBackend,
    stack_name: &str,
    poll_interval: Duration,
    timeout: Duration,
    mut on_transition: impl FnMut(&StackStatus),
) -> Result<StackDescription> {
    let started = Instant::now();
    let mut last: Option<StackStatus> = None;

    loop {
        let desc = backend.status(stack_name)?;

        if last.as_ref() != Some(&desc.status) {
            debug!(stack = stack_name, status = %desc.status, "status transition");
            on_transition(&desc.status);
            last = Some(desc.status.clone());
        }

        if desc.status.is_terminal() {
            return Ok(desc);
        }

        if started.elapsed() >= timeout {
            return Err(StackError::Timeout {
                name: stack_name.to_string(),
                seconds: timeout.as_secs(),
            }
            .into());
        }

        std::thread::sleep(poll_interval);
    }
}
