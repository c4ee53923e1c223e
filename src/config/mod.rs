//! Configuration module for the panel bridge.

mod bridge_config;

pub use bridge_config::BridgeConfig;
