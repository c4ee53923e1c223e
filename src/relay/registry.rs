//! Registry of child frames addressable by origin.

use dashmap::DashMap;
use tokio::sync::mpsc;

use super::error::RelayError;
use crate::models::{Origin, ScriptReply};

/// Maps each registered child frame's origin to its reply channel.
///
/// This is the capability boundary of the relay: a reply is deliverable only
/// to the channel registered under the requesting origin, so a frame at a
/// different origin can never observe it.
#[derive(Debug, Default)]
pub struct FrameRegistry {
    frames: DashMap<Origin, mpsc::UnboundedSender<ScriptReply>>,
}

impl FrameRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self { frames: DashMap::new() }
    }

    /// Registers a child frame under its origin and returns its reply stream.
    ///
    /// Registering an origin that already has a route replaces the previous
    /// one; the old receiver stops seeing replies.
    pub fn register(&self, origin: Origin) -> mpsc::UnboundedReceiver<ScriptReply> {
        let (reply_tx, reply_rx) = mpsc::unbounded_channel();
        if self.frames.insert(origin.clone(), reply_tx).is_some() {
            tracing::warn!(%origin, "replacing existing frame registration");
        } else {
            tracing::debug!(%origin, "frame registered");
        }
        reply_rx
    }

    /// Removes the route for an origin, if one exists.
    pub fn unregister(&self, origin: &Origin) {
        if self.frames.remove(origin).is_some() {
            tracing::debug!(%origin, "frame unregistered");
        }
    }

    /// Delivers a reply to the frame registered under `origin`.
    pub fn deliver(&self, origin: &Origin, reply: ScriptReply) -> Result<(), RelayError> {
        let route = self
            .frames
            .get(origin)
            .ok_or_else(|| RelayError::NoTargetFrame(origin.clone()))?;
        route.send(reply).map_err(|_| RelayError::ChannelClosed(origin.clone()))
    }

    /// Number of registered frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether no frames are registered.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn reply(value: serde_json::Value) -> ScriptReply {
        ScriptReply { eval_script_result: value }
    }

    #[test]
    fn test_deliver_reaches_registered_frame() {
        let registry = FrameRegistry::new();
        let origin = Origin::from("http://localhost:8080");
        let mut reply_rx = registry.register(origin.clone());

        registry.deliver(&origin, reply(json!(4))).unwrap();
        assert_eq!(reply_rx.try_recv().unwrap().eval_script_result, json!(4));
    }

    #[test]
    fn test_deliver_without_route_is_no_target_frame() {
        let registry = FrameRegistry::new();
        let origin = Origin::from("http://localhost:8080");

        let result = registry.deliver(&origin, reply(json!(null)));
        assert!(matches!(result, Err(RelayError::NoTargetFrame(o)) if o == origin));
    }

    #[test]
    fn test_reregistration_replaces_route() {
        let registry = FrameRegistry::new();
        let origin = Origin::from("http://localhost:8080");
        let mut old_rx = registry.register(origin.clone());
        let mut new_rx = registry.register(origin.clone());
        assert_eq!(registry.len(), 1);

        registry.deliver(&origin, reply(json!("fresh"))).unwrap();
        assert!(old_rx.try_recv().is_err());
        assert_eq!(new_rx.try_recv().unwrap().eval_script_result, json!("fresh"));
    }

    #[test]
    fn test_unregister_removes_route() {
        let registry = FrameRegistry::new();
        let origin = Origin::from("http://localhost:8080");
        let _reply_rx = registry.register(origin.clone());
        assert!(!registry.is_empty());

        registry.unregister(&origin);
        assert!(registry.is_empty());
        assert!(matches!(
            registry.deliver(&origin, reply(json!(null))),
            Err(RelayError::NoTargetFrame(_))
        ));
    }

    #[test]
    fn test_dropped_receiver_is_channel_closed() {
        let registry = FrameRegistry::new();
        let origin = Origin::from("http://localhost:8080");
        drop(registry.register(origin.clone()));

        let result = registry.deliver(&origin, reply(json!(null)));
        assert!(matches!(result, Err(RelayError::ChannelClosed(_))));
    }
}
