//! Router, per-request flow, and response materialization.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::any;

use super::{dispatch, translate};
use crate::core::models::{Context, InvocationResult};
use crate::handler::RequestHandler;

/// Immutable per-process state shared by request flows.
#[derive(Clone)]
pub struct AppState {
    handler: Arc<dyn RequestHandler>,
    deadline: Option<Duration>,
}

impl AppState {
    #[must_use]
    pub fn new(handler: Arc<dyn RequestHandler>, deadline: Option<Duration>) -> Self {
        Self { handler, deadline }
    }
}

/// Build the router: one route, any method.
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/sparql", any(sparql_handler))
        .with_state(state)
}

/// The full per-request flow: translate, dispatch, materialize.
///
/// Exactly one response leaves this function under every outcome; both
/// failure channels collapse to a plain-text 500 carrying the error message.
async fn sparql_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let event = translate::invocation_event(&headers, &body);
    let ctx = Context {
        deadline: state.deadline,
    };

    match dispatch::dispatch(state.handler.as_ref(), &ctx, event).await {
        Ok(result) => materialize(result),
        Err(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response(),
    }
}

/// Write the handler's result back: status verbatim, body verbatim.
///
/// No response headers are translated; the result carries none. A status code
/// outside the valid HTTP range degrades to 500.
fn materialize(result: InvocationResult) -> Response {
    let status =
        StatusCode::from_u16(result.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let mut response = Response::new(Body::from(result.body));
    *response.status_mut() = status;
    response
}
