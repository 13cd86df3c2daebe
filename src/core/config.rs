use std::env;
use std::time::Duration;

use crate::errors::AdapterError;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub sparql_endpoint: String,
    pub sns_endpoint: String,
    pub topic_arn: String,
    pub aws_region: String,
    pub host: String,
    pub port: u16,
    /// Deadline applied to each handler invocation. Unset means the handler
    /// may run unbounded; there is no built-in default.
    pub handler_timeout: Option<Duration>,
}

impl AppConfig {
    /// Read the configuration from the environment, consumed once at startup.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::Config`] when `PORT` or `HANDLER_TIMEOUT_MS`
    /// fail to parse.
    pub fn from_env() -> Result<Self, AdapterError> {
        let port = get_env("PORT", "8080")
            .parse()
            .map_err(|e| AdapterError::Config(format!("PORT: {e}")))?;

        let handler_timeout = match env::var("HANDLER_TIMEOUT_MS") {
            Ok(raw) => Some(
                raw.parse::<u64>()
                    .map(Duration::from_millis)
                    .map_err(|e| AdapterError::Config(format!("HANDLER_TIMEOUT_MS: {e}")))?,
            ),
            Err(_) => None,
        };

        Ok(Self {
            sparql_endpoint: get_env("RIALTO_SPARQL_ENDPOINT", ""),
            sns_endpoint: get_env("RIALTO_SNS_ENDPOINT", ""),
            topic_arn: get_env("RIALTO_TOPIC_ARN", ""),
            aws_region: get_env("AWS_REGION", ""),
            host: get_env("HOST", "0.0.0.0"),
            port,
            handler_timeout,
        })
    }
}

fn get_env(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}
