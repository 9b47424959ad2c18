//! Error types for the blob store crate.

use thiserror::Error;

/// Result type alias for blob store operations.
pub type Result<T> = std::result::Result<T, BlobStoreError>;

/// Errors that can occur during blob store operations.
#[derive(Debug, Error)]
pub enum BlobStoreError {
    /// The storage connection string could not be parsed
    #[error("Invalid storage connection string: {0}")]
    InvalidConnectionString(String),

    /// Creating the container failed for a reason other than it
    /// already existing
    #[error("Failed to create container {container}: {message}")]
    ContainerCreate {
        /// The container that could not be created
        container: String,
        /// The error message from the storage service
        message: String,
    },

    /// Uploading the blob failed
    #[error("Failed to upload blob {key}: {message}")]
    Upload {
        /// The key of the blob that could not be uploaded
        key: String,
        /// The error message from the storage service
        message: String,
    },
}
