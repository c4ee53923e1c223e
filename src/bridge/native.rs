//! Interface to the native host scripting facility.

use async_trait::async_trait;

/// The native host bridge: the facility by which panel-side code requests
/// execution of script in the hosting desktop application and receives its
/// return value.
///
/// Implementations wrap the host's callback-based API; the adapter layer on
/// top of this trait handles availability, timeouts, and result decoding.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NativeBridge: Send + Sync {
    /// Whether the native scripting facility is reachable from this execution
    /// context. False when running at the wrong frame depth.
    fn is_available(&self) -> bool;

    /// Executes script source in the host and resolves exactly once with the
    /// raw string result. Constraints on the source are delegated to the
    /// host; no validation is performed here.
    async fn eval(&self, source: &str) -> String;

    /// Returns the JSON host-environment descriptor, containing at least an
    /// application-name field.
    fn host_environment(&self) -> String;
}
