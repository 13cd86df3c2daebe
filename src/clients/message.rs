use aws_config::Region;
use aws_sdk_sns::Client as SnsClient;
use tracing::info;

use crate::core::config::AppConfig;

/// Publisher for the change-notification topic.
pub struct MessageClient {
    client: SnsClient,
    topic_arn: String,
}

impl MessageClient {
    /// Build the SNS client from the shared AWS environment config, honoring
    /// the explicit endpoint/region overrides when set.
    pub async fn new(config: &AppConfig) -> Self {
        let mut loader = aws_config::from_env();
        if !config.aws_region.is_empty() {
            loader = loader.region(Region::new(config.aws_region.clone()));
        }
        let shared_config = loader.load().await;

        let mut builder = aws_sdk_sns::config::Builder::from(&shared_config);
        if !config.sns_endpoint.is_empty() {
            builder = builder.endpoint_url(&config.sns_endpoint);
        }

        Self {
            client: SnsClient::from_conf(builder.build()),
            topic_arn: config.topic_arn.clone(),
        }
    }

    /// Publish a message to the configured topic.
    ///
    /// # Errors
    ///
    /// Returns the SDK error when the publish call fails.
    pub async fn publish(&self, message: &str) -> Result<(), aws_sdk_sns::Error> {
        let output = self
            .client
            .publish()
            .topic_arn(&self.topic_arn)
            .message(message)
            .send()
            .await
            .map_err(aws_sdk_sns::Error::from)?;

        info!(
            "Published message {} to {}",
            output.message_id().unwrap_or_default(),
            self.topic_arn
        );
        Ok(())
    }
}
