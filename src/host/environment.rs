//! The host-environment descriptor reported by the native bridge.

use serde::Deserialize;

use super::capabilities::HostApp;

/// The host-environment descriptor, deserialized from the JSON the native
/// bridge returns. Field names follow the descriptor's wire format; fields
/// this crate does not consume are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostEnvironment {
    /// Application identity code (e.g. `ILST`, `IDSN`).
    pub app_name: String,

    /// Numeric application identifier, when reported.
    #[serde(default)]
    pub app_id: Option<String>,

    /// Application version string, when reported.
    #[serde(default)]
    pub app_version: Option<String>,

    /// UI locale of the host, when reported.
    #[serde(default)]
    pub app_locale: Option<String>,
}

impl HostEnvironment {
    /// Parses a descriptor from its JSON form.
    pub fn from_json(descriptor: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(descriptor)
    }

    /// Resolves the host application this descriptor belongs to.
    pub fn host_app(&self) -> HostApp {
        HostApp::from_app_name(&self.app_name)
    }
}
