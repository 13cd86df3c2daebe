//! Configuration and the value objects exchanged with the request handler.

pub mod config;
pub mod models;
