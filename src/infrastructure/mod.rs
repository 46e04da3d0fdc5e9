pub mod records;
pub mod storage;

use crate::config::JobConfig;
use aws_config::{BehaviorVersion, Region, SdkConfig};

/// Shared SDK configuration for the S3 and DynamoDB clients. Credentials
/// come from the default provider chain.
pub async fn load_aws_config(config: &JobConfig) -> SdkConfig {
    let mut loader = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.region.clone()));
    if let Some(endpoint_url) = &config.endpoint_url {
        loader = loader.endpoint_url(endpoint_url);
    }
    loader.load().await
}
