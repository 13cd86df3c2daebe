//! HTTP request → invocation event translation.

use std::collections::HashMap;

use axum::http::HeaderMap;
use bytes::Bytes;

use crate::core::models::InvocationEvent;

/// Build the invocation event from the already-buffered request.
///
/// The body is decoded as text in full; no size cap is enforced. For each
/// header name the first value wins, repeats are dropped. Header values that
/// are not valid UTF-8 are skipped. Total function, no failure path.
#[must_use]
pub fn invocation_event(headers: &HeaderMap, body: &Bytes) -> InvocationEvent {
    let mut event_headers = HashMap::new();
    for name in headers.keys() {
        if let Some(value) = headers.get(name).and_then(|v| v.to_str().ok()) {
            event_headers.insert(name.as_str().to_string(), value.to_string());
        }
    }

    InvocationEvent {
        headers: event_headers,
        body: String::from_utf8_lossy(body).into_owned(),
    }
}
