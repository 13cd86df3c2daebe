//! Dispatch boundary: invokes the request handler and contains its failures.

use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use tracing::error;

use crate::core::models::{Context, InvocationEvent, InvocationResult};
use crate::errors::AdapterError;
use crate::handler::RequestHandler;

/// Invoke `handler` with the event under the given context.
///
/// Guarantees that nothing abnormal escapes: a panic inside the handler is
/// caught and classified (see [`AdapterError::from_panic`]), an explicit
/// error is carried over with its message, and when the context declares a
/// deadline the invocation is cut off at expiry. Callers only ever observe
/// ordinary `Result` values.
///
/// # Errors
///
/// Returns [`AdapterError`] on any of the three failure channels: explicit
/// handler error, contained panic, or deadline expiry.
pub async fn dispatch(
    handler: &dyn RequestHandler,
    ctx: &Context,
    event: InvocationEvent,
) -> Result<InvocationResult, AdapterError> {
    let body = event.body.clone();

    let invoke = async {
        match ctx.deadline {
            Some(limit) => tokio::time::timeout(limit, handler.handle(ctx, event))
                .await
                .unwrap_or_else(|_| Err(AdapterError::Timeout(limit).into())),
            None => handler.handle(ctx, event).await,
        }
    };

    match AssertUnwindSafe(invoke).catch_unwind().await {
        Ok(Ok(result)) => Ok(result),
        Ok(Err(err)) => {
            error!("handler failed: {}", err);
            Err(match err.downcast::<AdapterError>() {
                Ok(adapter_err) => *adapter_err,
                Err(other) => AdapterError::Handler(other.to_string()),
            })
        }
        Err(payload) => {
            let err = AdapterError::from_panic(payload);
            error!("Caught {} for {}", err, body);
            Err(err)
        }
    }
}
