//! S3-compatible blob store implementation.

use async_trait::async_trait;
use aws_sdk_s3::{
    config::{BehaviorVersion, Credentials, Region},
    error::DisplayErrorContext,
    primitives::ByteStream,
    Client,
};
use tracing::info;

use crate::connection::StorageConnection;
use crate::error::{BlobStoreError, Result};
use crate::traits::BlobStore;

/// Error markers that mean the container already exists.
///
/// `ContainerAlreadyExists` is the spelling Azure-dialect gateways
/// return; the other two are the S3 service codes.
const CONFLICT_MARKERS: [&str; 3] = [
    "BucketAlreadyExists",
    "BucketAlreadyOwnedByYou",
    "ContainerAlreadyExists",
];

fn is_container_conflict(message: &str) -> bool {
    CONFLICT_MARKERS
        .iter()
        .any(|marker| message.contains(marker))
}

/// Blob store backed by an S3-compatible object storage service.
pub struct S3BlobStore {
    client: Client,
}

impl S3BlobStore {
    /// Build a client from a parsed connection string.
    pub fn new(conn: &StorageConnection) -> Self {
        let credentials = Credentials::new(
            conn.access_key_id.clone(),
            conn.secret_access_key.clone(),
            None,
            None,
            "quotesnap",
        );
        let config = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .force_path_style(conn.force_path_style)
            .endpoint_url(conn.endpoint.clone())
            .region(Region::new(conn.region.clone()))
            .credentials_provider(credentials)
            .build();
        Self {
            client: Client::from_conf(config),
        }
    }
}

#[async_trait]
impl BlobStore for S3BlobStore {
    async fn ensure_container(&self, container: &str) -> Result<()> {
        match self.client.create_bucket().bucket(container).send().await {
            Ok(_) => {
                info!("Container '{}' created", container);
                Ok(())
            }
            Err(err) => {
                let typed_conflict = err
                    .as_service_error()
                    .map(|e| e.is_bucket_already_exists() || e.is_bucket_already_owned_by_you())
                    .unwrap_or(false);
                let message = DisplayErrorContext(&err).to_string();
                if typed_conflict || is_container_conflict(&message) {
                    info!("Container '{}' already exists", container);
                    Ok(())
                } else {
                    Err(BlobStoreError::ContainerCreate {
                        container: container.to_string(),
                        message,
                    })
                }
            }
        }
    }

    async fn put_blob(
        &self,
        container: &str,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<()> {
        self.client
            .put_object()
            .bucket(container)
            .key(key)
            .body(ByteStream::from(body))
            .content_type(content_type)
            .send()
            .await
            .map_err(|err| BlobStoreError::Upload {
                key: key.to_string(),
                message: DisplayErrorContext(&err).to_string(),
            })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_markers_classified() {
        assert!(is_container_conflict(
            "service error: BucketAlreadyOwnedByYou: Your previous request succeeded"
        ));
        assert!(is_container_conflict(
            "BucketAlreadyExists: The requested bucket name is not available"
        ));
        assert!(is_container_conflict(
            "ContainerAlreadyExists: The specified container already exists"
        ));
    }

    #[test]
    fn test_other_errors_are_not_conflicts() {
        assert!(!is_container_conflict("AccessDenied: Access Denied"));
        assert!(!is_container_conflict("dispatch failure: connection refused"));
        assert!(!is_container_conflict(""));
    }
}
