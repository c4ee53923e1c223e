//! Error taxonomy for the message relay.

use thiserror::Error;

use crate::models::Origin;

/// Errors that can occur while relaying requests and replies.
#[derive(Debug, Error)]
pub enum RelayError {
    /// No child frame is registered under the requesting origin when a reply
    /// is due. The reply is dropped; nothing is retried or queued.
    #[error("no target frame registered for origin '{0}'")]
    NoTargetFrame(Origin),

    /// The frame registered under the origin has dropped its reply stream.
    #[error("reply channel for origin '{0}' is closed")]
    ChannelClosed(Origin),

    /// The relay has shut down and no longer accepts messages.
    #[error("relay inbound channel closed")]
    Shutdown,
}
