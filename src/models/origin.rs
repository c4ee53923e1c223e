//! This module defines the `Origin` security identifier.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Scheme+host+port triple identifying the security boundary of a message
/// sender or receiver.
///
/// Replies are always addressed to the origin captured from the inbound
/// message; the relay never broadcasts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Origin(String);

impl Origin {
    /// Creates an origin from its string form (e.g. `http://localhost:8080`).
    pub fn new(origin: impl Into<String>) -> Self {
        Self(origin.into())
    }

    /// Returns the origin as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Origin {
    fn from(origin: &str) -> Self {
        Self(origin.to_string())
    }
}
