//! Error taxonomy for the host bridge adapter.

use std::time::Duration;

use thiserror::Error;

/// Errors that can occur while executing script through the native bridge.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The native scripting bridge is not present in this execution context,
    /// typically because the call was attempted at the wrong frame depth.
    #[error("native scripting bridge unavailable in this context")]
    Unavailable,

    /// The native callback did not fire within the configured bound.
    #[error("native eval did not complete within {0:?}")]
    Timeout(Duration),

    /// The host-environment descriptor returned by the native bridge was not
    /// valid JSON.
    #[error("malformed host-environment descriptor: {0}")]
    MalformedEnvironment(#[from] serde_json::Error),
}
