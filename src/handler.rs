use async_trait::async_trait;

use crate::core::models::{Context, InvocationEvent, InvocationResult};

/// Error type at the handler seam; any error the handler produces is boxed
/// and surfaced to the client through its `Display` output.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The seam to the query-execution subsystem.
///
/// Implementations receive the translated invocation event together with the
/// per-request [`Context`] and return a status code plus body, or an error.
/// Panics raised inside an implementation are contained by the dispatch
/// boundary and never reach the network layer.
#[async_trait]
pub trait RequestHandler: Send + Sync {
    async fn handle(
        &self,
        ctx: &Context,
        event: InvocationEvent,
    ) -> Result<InvocationResult, BoxError>;
}
