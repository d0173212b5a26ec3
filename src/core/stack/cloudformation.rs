//! AWS CloudFormation stack backend.
//!
//! Credentials come from the environment (AWS_ACCESS_KEY_ID, etc.) or the
//! default credential provider chain; the region comes from `gangway.toml`.
//!
//! The SDK is async but the tool is not: each provider call runs on a
//! short-lived current-thread runtime. A deploy makes one call every poll
//! interval, so there is nothing for a long-lived runtime to amortize.

use std::collections::BTreeMap;

use aws_sdk_cloudformation::config::Region;
use aws_sdk_cloudformation::error::ProvideErrorMetadata;
use aws_sdk_cloudformation::Client;
use tracing::{debug, trace};

use super::{FailureEvent, StackBackend, StackDescription, StackStatus};
use crate::error::{Result, StackError};

/// CloudFormation implementation of [`StackBackend`].
pub struct Cloud {
    region: String,
}

impl Cloud {
    /// Create a backend targeting `region`.
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
        }
    }

    async fn client(&self) -> Client {
        let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new(self.region.clone()))
            .load()
            .await;
        Client::new(&config)
    }
}

fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| StackError::Runtime(e.to_string()).into())
}

/// Prefer the provider's message; fall back to the error's own rendering.
fn error_text<E>(err: &E) -> String
where
    E: ProvideErrorMetadata + std::fmt::Display,
{
    match err.message() {
        Some(msg) => msg.to_string(),
        None => err.to_string(),
    }
}

impl StackBackend for Cloud {
    fn name(&self) -> &'static str {
        "cloudformation"
    }

    fn submit(&self, stack_name: &str, template_body: &str) -> Result<String> {
        debug!(
            stack = stack_name,
            region = %self.region,
            template_len = template_body.len(),
            "submitting stack"
        );

        let rt = runtime()?;
        rt.block_on(async {
            let client = self.client().await;

            let result = client
                .create_stack()
                .stack_name(stack_name)
                .template_body(template_body)
                .send()
                .await
                .map_err(|e| StackError::SubmitFailed(error_text(&e.into_service_error())))?;

            let stack_id = result
                .stack_id()
                .unwrap_or(stack_name)
                .to_string();

            trace!(stack_id = %stack_id, "stack submitted");
            Ok(stack_id)
        })
    }

    fn status(&self, stack_name: &str) -> Result<StackDescription> {
        trace!(stack = stack_name, "describing stack");

        let rt = runtime()?;
        rt.block_on(async {
            let client = self.client().await;

            let result = client
                .describe_stacks()
                .stack_name(stack_name)
                .send()
                .await;

            let output = match result {
                Ok(output) => output,
                Err(e) => {
                    let service_err = e.into_service_error();
                    let msg = error_text(&service_err);
                    // DescribeStacks reports a missing stack as a
                    // ValidationError, not a typed variant.
                    if msg.contains("does not exist") {
                        return Ok(StackDescription::not_found());
                    }
                    return Err(StackError::DescribeFailed(msg).into());
                }
            };

            let stack = match output.stacks().first() {
                Some(stack) => stack,
                None => return Ok(StackDescription::not_found()),
            };

            let status = stack
                .stack_status()
                .map(|s| StackStatus::parse(s.as_str()))
                .unwrap_or_else(|| StackStatus::Other("UNKNOWN".to_string()));

            let mut outputs = BTreeMap::new();
            for output in stack.outputs() {
                if let (Some(key), Some(value)) = (output.output_key(), output.output_value()) {
                    outputs.insert(key.to_string(), value.to_string());
                }
            }

            let updated_at = stack
                .last_updated_time()
                .or(stack.creation_time())
                .map(|t| t.secs());

            Ok(StackDescription {
                status,
                status_reason: stack.stack_status_reason().map(str::to_string),
                outputs,
                updated_at,
            })
        })
    }

    fn delete(&self, stack_name: &str) -> Result<()> {
        debug!(stack = stack_name, region = %self.region, "deleting stack");

        let rt = runtime()?;
        rt.block_on(async {
            let client = self.client().await;

            client
                .delete_stack()
                .stack_name(stack_name)
                .send()
                .await
                .map_err(|e| StackError::DeleteFailed(error_text(&e.into_service_error())))?;

            Ok(())
        })
    }

    fn failure_reason(&self, stack_name: &str) -> Result<Option<FailureEvent>> {
        debug!(stack = stack_name, "fetching stack events");

        let rt = runtime()?;
        rt.block_on(async {
            let client = self.client().await;

            let output = client
                .describe_stack_events()
                .stack_name(stack_name)
                .send()
                .await
                .map_err(|e| StackError::DescribeFailed(error_text(&e.into_service_error())))?;

            // Events arrive newest first; the chronologically first failure
            // is the one that explains the rollback.
            let failed = output.stack_events().iter().rev().find(|event| {
                event
                    .resource_status()
                    .map(|s| s.as_str().ends_with("FAILED"))
                    .unwrap_or(false)
            });

            Ok(failed.map(|event| FailureEvent {
                logical_id: event
                    .logical_resource_id()
                    .unwrap_or("unknown")
                    .to_string(),
                status: event
                    .resource_status()
                    .map(|s| s.as_str().to_string())
                    .unwrap_or_default(),
                reason: event
                    .resource_status_reason()
                    .unwrap_or("no reason reported")
                    .to_string(),
            }))
        })
    }
}
