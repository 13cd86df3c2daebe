//! The request-adaptation boundary: translation, dispatch, materialization.

pub mod dispatch;
pub mod server;
pub mod translate;

// Re-export the router builder for convenience
pub use server::router;
