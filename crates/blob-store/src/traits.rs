//! Blob store trait definition.

use async_trait::async_trait;

use crate::error::Result;

/// Trait for object storage backends.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Make sure the container exists, creating it when necessary.
    ///
    /// An already-existing container is success.
    async fn ensure_container(&self, container: &str) -> Result<()>;

    /// Upload a blob, replacing any existing object under the same key.
    async fn put_blob(
        &self,
        container: &str,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<()>;
}
