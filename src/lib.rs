#![warn(missing_docs)]
//! Panel Bridge is the scripting core of a host-application panel: it forwards
//! `evalScript` requests from embedded developer-mode frames to the native host
//! bridge and routes the results back to the originating frame, scoped to the
//! origin that made the request.

pub mod bridge;
pub mod config;
pub mod host;
pub mod models;
pub mod relay;
pub mod test_helpers;
