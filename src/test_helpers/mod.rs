//! Shared helpers for unit and integration tests.

mod bridge;

pub use bridge::{FakeBridge, host_environment_json};
