//! This module contains the data models for the panel bridge.

pub mod message;
pub mod origin;

pub use message::{Envelope, ScriptReply, ScriptRequest};
pub use origin::Origin;
