//! Executes script through the native bridge and maps the raw result.

use std::{sync::Arc, time::Duration};

use serde_json::Value;

use super::{error::BridgeError, native::NativeBridge};
use crate::host::HostEnvironment;

/// The host bridge adapter. Wraps the native bridge with availability
/// handling, a bounded eval timeout, and per-host result decoding.
///
/// Pure request/response mapping: the only side effect is the native call
/// itself. One native round trip per invocation; nothing is batched, queued,
/// or retried.
pub struct ScriptExecutor {
    bridge: Arc<dyn NativeBridge>,
    eval_timeout: Duration,
}

impl ScriptExecutor {
    /// Creates an executor over the given native bridge.
    pub fn new(bridge: Arc<dyn NativeBridge>, eval_timeout: Duration) -> Self {
        Self { bridge, eval_timeout }
    }

    /// Executes script source with the full failure taxonomy exposed, so
    /// callers can distinguish an unavailable bridge from a timed-out call
    /// from a malformed descriptor.
    ///
    /// The host identity is queried once per call. Hosts whose capability
    /// record suppresses automatic decoding get the raw string back
    /// unmodified; for every other host the raw result is returned parsed
    /// when it is valid JSON and unchanged when it is not.
    pub async fn try_execute(&self, source: &str) -> Result<Value, BridgeError> {
        if !self.bridge.is_available() {
            return Err(BridgeError::Unavailable);
        }

        let raw = tokio::time::timeout(self.eval_timeout, self.bridge.eval(source))
            .await
            .map_err(|_| BridgeError::Timeout(self.eval_timeout))?;

        let environment = HostEnvironment::from_json(&self.bridge.host_environment())?;
        if environment.host_app().capabilities().suppress_auto_json_decode {
            tracing::debug!(host = %environment.app_name, "automatic JSON decoding suppressed for host");
            return Ok(Value::String(raw));
        }

        // A result that does not parse as JSON is the normal plain-string
        // case, not an error.
        Ok(serde_json::from_str(&raw).unwrap_or_else(|_| Value::String(raw)))
    }

    /// Executes script source with the soft contract: any failure is logged
    /// and collapses to `None`. Never panics, never propagates an error.
    pub async fn execute_script(&self, source: &str) -> Option<Value> {
        match self.try_execute(source).await {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::error!(error = %e, "script execution failed");
                None
            }
        }
    }
}
