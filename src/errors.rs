use std::any::Any;
use std::time::Duration;
use thiserror::Error;

/// Failures surfaced by the adapter boundary.
///
/// The `Display` output of a variant is exactly what the client receives as
/// the body of the 500 response, so the messages stay bare.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// Explicit handler error, or a text panic payload caught at the
    /// dispatch boundary.
    #[error("{0}")]
    Handler(String),

    /// Panic payload that was neither text nor an `AdapterError`.
    #[error("Unknown error")]
    UnknownPanic,

    /// The configured dispatch deadline expired before the handler returned.
    #[error("handler timed out after {0:?}")]
    Timeout(Duration),

    /// Startup-only configuration failure; never reaches the request path.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl AdapterError {
    /// Classify a caught panic payload.
    ///
    /// Text payloads keep their message, an `AdapterError` thrown as a panic
    /// passes through unchanged, and anything else collapses to
    /// [`AdapterError::UnknownPanic`].
    #[must_use]
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        match payload.downcast::<AdapterError>() {
            Ok(err) => *err,
            Err(payload) => match payload.downcast::<String>() {
                Ok(text) => AdapterError::Handler(*text),
                Err(payload) => match payload.downcast::<&'static str>() {
                    Ok(text) => AdapterError::Handler((*text).to_string()),
                    Err(_) => AdapterError::UnknownPanic,
                },
            },
        }
    }
}
