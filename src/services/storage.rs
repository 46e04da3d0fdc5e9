use crate::error::{AugmentError, Result};
use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::primitives::ByteStream;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Object storage collaborator. Containers are S3 buckets.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Writes the object at `container/key` to `local_path`, creating parent
    /// directories as needed.
    async fn download(&self, container: &str, key: &str, local_path: &Path) -> Result<()>;

    /// Uploads the file at `local_path` to `container/key`.
    async fn upload(&self, local_path: &Path, container: &str, key: &str) -> Result<()>;
}

pub struct S3ObjectStorage {
    client: Client,
}

impl S3ObjectStorage {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectStorage for S3ObjectStorage {
    async fn download(&self, container: &str, key: &str, local_path: &Path) -> Result<()> {
        let res = self
            .client
            .get_object()
            .bucket(container)
            .key(key)
            .send()
            .await
            .map_err(AugmentError::storage)?;

        if let Some(parent) = local_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let mut body_reader = res.body.into_async_read();
        let mut file = fs::File::create(local_path).await?;
        let written = tokio::io::copy(&mut body_reader, &mut file).await?;
        file.flush().await?;

        tracing::debug!(
            "Downloaded s3://{}/{} to {} ({} bytes)",
            container,
            key,
            local_path.display(),
            written
        );
        Ok(())
    }

    async fn upload(&self, local_path: &Path, container: &str, key: &str) -> Result<()> {
        let body = ByteStream::from_path(local_path)
            .await
            .map_err(AugmentError::storage)?;

        let res = self
            .client
            .put_object()
            .bucket(container)
            .key(key)
            .body(body)
            .send()
            .await;

        if let Err(e) = res {
            tracing::debug!(
                "S3 put_object failed: source={}, dest={}/{}",
                local_path.display(),
                container,
                key
            );
            return Err(AugmentError::storage(e));
        }
        Ok(())
    }
}
