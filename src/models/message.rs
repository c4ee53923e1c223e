//! Wire types for the cross-frame message channel.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::origin::Origin;

/// An inbound cross-frame message: an arbitrary JSON payload plus the origin
/// of the frame that sent it.
///
/// The channel is shared with other consumers, so any payload shape is
/// permitted here; only envelopes carrying a string-typed `evalScript` field
/// are scripting requests.
#[derive(Debug, Clone)]
pub struct Envelope {
    /// The message payload as posted by the sender.
    pub data: Value,

    /// The origin of the sending frame, captured on delivery.
    pub origin: Origin,
}

impl Envelope {
    /// Creates an envelope from a payload and its sender origin.
    pub fn new(data: Value, origin: Origin) -> Self {
        Self { data, origin }
    }

    /// Extracts a scripting request, if the payload carries a string-typed
    /// `evalScript` field. Any other shape is out of band for the relay.
    pub fn script_request(&self) -> Option<ScriptRequest> {
        match self.data.get("evalScript") {
            Some(Value::String(source)) => Some(ScriptRequest { eval_script: source.clone() }),
            _ => None,
        }
    }
}

/// A unit of executable script source, carried as the payload of an inbound
/// cross-frame message. Consumed once; never persisted or retried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptRequest {
    /// The script source to execute in the host.
    #[serde(rename = "evalScript")]
    pub eval_script: String,
}

/// The reply posted back to the originating frame once the host has produced
/// a result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptReply {
    /// The host's return value: a JSON structure when the result was
    /// decodable and the host permits decoding, otherwise the raw string.
    #[serde(rename = "evalScriptResult")]
    pub eval_script_result: Value,
}
