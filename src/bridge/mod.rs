//! The host bridge adapter: the single entry point for executing script in
//! the hosting desktop application.

pub mod error;
pub mod executor;
pub mod native;

pub use error::BridgeError;
pub use executor::ScriptExecutor;
pub use native::NativeBridge;
