//! A scriptable stand-in for the native host bridge.

use std::{
    sync::atomic::{AtomicUsize, Ordering},
    time::Duration,
};

use async_trait::async_trait;

use crate::bridge::NativeBridge;

/// Produces a host-environment descriptor reporting the given application
/// name.
pub fn host_environment_json(app_name: &str) -> String {
    serde_json::json!({
        "appName": app_name,
        "appVersion": "25.3.0",
        "appLocale": "en_US",
    })
    .to_string()
}

/// A configurable [`NativeBridge`] test double.
///
/// Echoes the script source back by default; availability, a canned result,
/// an eval delay, and the reported host can all be overridden. Counts eval
/// invocations so tests can assert the bridge was (or was not) reached.
pub struct FakeBridge {
    available: bool,
    canned_result: Option<String>,
    eval_delay: Option<Duration>,
    environment: String,
    eval_calls: AtomicUsize,
}

impl FakeBridge {
    /// An available bridge reporting Illustrator, echoing script source back.
    pub fn echo() -> Self {
        Self {
            available: true,
            canned_result: None,
            eval_delay: None,
            environment: host_environment_json("ILST"),
            eval_calls: AtomicUsize::new(0),
        }
    }

    /// A bridge that is not reachable from this execution context.
    pub fn unavailable() -> Self {
        Self { available: false, ..Self::echo() }
    }

    /// Overrides the eval result with a canned string.
    pub fn with_result(mut self, result: impl Into<String>) -> Self {
        self.canned_result = Some(result.into());
        self
    }

    /// Reports the given application name in the host descriptor.
    pub fn with_host(mut self, app_name: &str) -> Self {
        self.environment = host_environment_json(app_name);
        self
    }

    /// Overrides the raw descriptor wholesale, malformed ones included.
    pub fn with_environment_json(mut self, descriptor: impl Into<String>) -> Self {
        self.environment = descriptor.into();
        self
    }

    /// Delays every eval, for exercising the timeout path.
    pub fn with_eval_delay(mut self, delay: Duration) -> Self {
        self.eval_delay = Some(delay);
        self
    }

    /// Number of times `eval` has been invoked.
    pub fn eval_calls(&self) -> usize {
        self.eval_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NativeBridge for FakeBridge {
    fn is_available(&self) -> bool {
        self.available
    }

    async fn eval(&self, source: &str) -> String {
        self.eval_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.eval_delay {
            tokio::time::sleep(delay).await;
        }
        self.canned_result.clone().unwrap_or_else(|| source.to_string())
    }

    fn host_environment(&self) -> String {
        self.environment.clone()
    }
}
