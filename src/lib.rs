//! HTTP facade for the RIALTO SPARQL loader.
//!
//! The loader's request handler speaks the serverless-gateway dialect: it takes
//! an invocation event (flat header map + body string) and returns a status
//! code and a body. This crate puts a plain HTTP server in front of that
//! handler:
//!
//! 1. [`api::translate`] turns the live HTTP request into an invocation event
//! 2. [`api::dispatch`] invokes the handler and contains anything that goes
//!    wrong inside it, including panics
//! 3. [`api::server`] writes the handler's result (or a plain-text 500) back
//!    to the client
//!
//! The handler behind the seam ([`runtime::LoaderHandler`]) proxies the SPARQL
//! statement to the configured graph store and publishes update statements to
//! an SNS topic.

pub mod api;
pub mod clients;
pub mod core;
pub mod errors;
pub mod handler;
pub mod runtime;

/// Configure structured logging with JSON format.
///
/// Sets up tracing-subscriber with a JSON formatter suitable for log
/// aggregation. Call once at process start.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
