use crate::config::JobConfig;
use crate::services::records::DynamoRecordStore;
use aws_config::SdkConfig;
use std::sync::Arc;
use tracing::info;

pub async fn setup_record_store(config: &JobConfig, aws_config: &SdkConfig) -> Arc<DynamoRecordStore> {
    info!(
        "🗄️  DynamoDB: {}",
        config.endpoint_url.as_deref().unwrap_or(&config.region)
    );

    let client = aws_sdk_dynamodb::Client::new(aws_config);
    Arc::new(DynamoRecordStore::new(client))
}
