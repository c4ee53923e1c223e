//! The message relay: forwards scripting requests from child frames to the
//! host bridge adapter and routes results back to the frame registered under
//! the requesting origin.
//!
//! The relay is constructed once at startup and owns its subscription for its
//! whole lifetime; a [`CancellationToken`](tokio_util::sync::CancellationToken)
//! tears it down on shutdown. Each request is serviced on its own task, so
//! overlapping requests are independent and their replies carry no ordering
//! guarantee.

pub mod error;
pub mod registry;

pub use error::RelayError;
pub use registry::FrameRegistry;

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::{
    bridge::ScriptExecutor,
    models::{Envelope, ScriptReply},
};

/// Posting side of the relay's inbound channel. Cloneable; one handle per
/// child frame (or per producer sharing the channel).
#[derive(Debug, Clone)]
pub struct RelayHandle {
    inbound_tx: mpsc::Sender<Envelope>,
}

impl RelayHandle {
    /// Posts a message to the relay. Fails only once the relay has shut down.
    pub async fn post(&self, envelope: Envelope) -> Result<(), RelayError> {
        self.inbound_tx.send(envelope).await.map_err(|_| RelayError::Shutdown)
    }
}

/// The relay service.
///
/// Owns the inbound message subscription, the script executor, and the frame
/// registry. Drive it with [`MessageRelay::run`]; it stops when the
/// cancellation token fires or every [`RelayHandle`] has been dropped.
pub struct MessageRelay {
    executor: Arc<ScriptExecutor>,
    frames: Arc<FrameRegistry>,
    inbound_rx: mpsc::Receiver<Envelope>,
    cancellation_token: CancellationToken,
}

impl MessageRelay {
    /// Creates a relay and the posting handle for its inbound channel.
    pub fn new(
        executor: Arc<ScriptExecutor>,
        frames: Arc<FrameRegistry>,
        channel_capacity: usize,
        cancellation_token: CancellationToken,
    ) -> (Self, RelayHandle) {
        let (inbound_tx, inbound_rx) = mpsc::channel(channel_capacity);
        let relay = Self { executor, frames, inbound_rx, cancellation_token };
        (relay, RelayHandle { inbound_tx })
    }

    /// Runs the relay loop until shutdown.
    ///
    /// A failure while servicing one request never halts the loop; the next
    /// message is picked up regardless.
    pub async fn run(mut self) {
        tracing::info!("message relay started");
        loop {
            tokio::select! {
                _ = self.cancellation_token.cancelled() => {
                    tracing::info!("message relay received shutdown signal");
                    break;
                }
                maybe_envelope = self.inbound_rx.recv() => {
                    match maybe_envelope {
                        Some(envelope) => self.dispatch(envelope),
                        None => {
                            tracing::info!("all relay handles dropped, stopping message relay");
                            break;
                        }
                    }
                }
            }
        }
        tracing::info!("message relay stopped");
    }

    /// Routes one inbound envelope.
    ///
    /// Envelopes without a string `evalScript` field are out of band for the
    /// relay and ignored without touching the bridge. Scripting requests are
    /// serviced on their own task: execute, then deliver the reply to the
    /// frame registered under the origin captured from the envelope.
    fn dispatch(&self, envelope: Envelope) {
        let Some(request) = envelope.script_request() else {
            // Other consumers may share the channel; not an error.
            tracing::debug!(origin = %envelope.origin, "ignoring message without evalScript field");
            return;
        };

        let executor = Arc::clone(&self.executor);
        let frames = Arc::clone(&self.frames);
        let origin = envelope.origin;
        tokio::spawn(async move {
            let result = executor.execute_script(&request.eval_script).await;
            // A soft failure relays as an explicit null result, exactly as
            // the adapter handed it over.
            let reply = ScriptReply { eval_script_result: result.unwrap_or(Value::Null) };
            if let Err(e) = frames.deliver(&origin, reply) {
                tracing::error!(error = %e, %origin, "could not deliver script result");
            }
        });
    }
}
