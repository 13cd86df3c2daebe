use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Gateway-style invocation event handed to the request handler.
///
/// Headers are flattened to one value per name; when the transport delivered
/// several values for the same name, only the first is kept.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvocationEvent {
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl InvocationEvent {
    /// Case-insensitive single-header lookup.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.iter().find_map(|(key, value)| {
            if key.eq_ignore_ascii_case(name) {
                Some(value.as_str())
            } else {
                None
            }
        })
    }
}

/// Result returned by the request handler; immutable once produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResult {
    pub status_code: u16,
    pub body: String,
}

/// Per-request execution context passed to the handler.
///
/// Carries the optional dispatch deadline; a default context imposes none.
#[derive(Debug, Clone, Default)]
pub struct Context {
    pub deadline: Option<Duration>,
}
