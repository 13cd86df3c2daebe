//! The loader runtime sitting behind the handler seam.
//!
//! Mirrors the serverless deployment: the same handler that would run behind
//! a gateway runs here behind the HTTP facade. It proxies the statement to
//! the graph store and, for update requests that the store accepted, notifies
//! the topic with the raw statement so downstream consumers can react.

use async_trait::async_trait;
use tracing::info;

use crate::clients::message::MessageClient;
use crate::clients::sparql::SparqlClient;
use crate::core::models::{Context, InvocationEvent, InvocationResult};
use crate::handler::{BoxError, RequestHandler};

/// Requests announcing this media type are SPARQL updates. Detection is by
/// header only; the statement itself is never parsed.
const SPARQL_UPDATE_CONTENT_TYPE: &str = "application/sparql-update";

/// The clients the loader handler operates on.
pub struct Registry {
    sparql: SparqlClient,
    messages: MessageClient,
}

impl Registry {
    #[must_use]
    pub fn new(sparql: SparqlClient, messages: MessageClient) -> Self {
        Self { sparql, messages }
    }
}

pub struct LoaderHandler {
    registry: Registry,
}

impl LoaderHandler {
    #[must_use]
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl RequestHandler for LoaderHandler {
    async fn handle(
        &self,
        _ctx: &Context,
        event: InvocationEvent,
    ) -> Result<InvocationResult, BoxError> {
        let content_type = event.header("Content-Type");
        let is_update =
            content_type.is_some_and(|ct| ct.starts_with(SPARQL_UPDATE_CONTENT_TYPE));

        let response = self.registry.sparql.post(&event.body, content_type).await?;

        if is_update && response.is_success() {
            self.registry.messages.publish(&event.body).await?;
            info!("Notified topic of accepted update");
        }

        Ok(InvocationResult {
            status_code: response.status,
            body: response.body,
        })
    }
}
