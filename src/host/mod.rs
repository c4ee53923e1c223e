//! Host application identity and scripting capabilities.

pub mod capabilities;
pub mod environment;

pub use capabilities::{HostApp, HostCapabilities};
pub use environment::HostEnvironment;
