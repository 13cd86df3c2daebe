use std::sync::Arc;

use sparql_loader::api::server::{AppState, router};
use sparql_loader::clients::message::MessageClient;
use sparql_loader::clients::sparql::SparqlClient;
use sparql_loader::core::config::AppConfig;
use sparql_loader::runtime::{LoaderHandler, Registry};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    sparql_loader::setup_logging();

    let config = AppConfig::from_env()?;

    // Establish the clients and the loader handler behind the seam
    let sparql = SparqlClient::new(&config.sparql_endpoint);
    let messages = MessageClient::new(&config).await;
    let handler = LoaderHandler::new(Registry::new(sparql, messages));

    let state = AppState::new(Arc::new(handler), config.handler_timeout);
    let app = router(state);

    let address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!("Starting server on {}", address);

    axum::serve(listener, app).await?;
    Ok(())
}
