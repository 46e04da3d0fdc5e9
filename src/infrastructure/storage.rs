use crate::config::JobConfig;
use crate::services::storage::S3ObjectStorage;
use aws_config::SdkConfig;
use std::sync::Arc;
use tracing::info;

pub async fn setup_storage(config: &JobConfig, aws_config: &SdkConfig) -> Arc<S3ObjectStorage> {
    let mut builder = aws_sdk_s3::config::Builder::from(aws_config);
    if let Some(endpoint_url) = &config.endpoint_url {
        info!("☁️  S3 Storage: {} (path-style)", endpoint_url);
        builder = builder.force_path_style(true);
    } else {
        info!("☁️  S3 Storage: region {}", config.region);
    }

    let s3_client = aws_sdk_s3::Client::from_conf(builder.build());
    Arc::new(S3ObjectStorage::new(s3_client))
}
