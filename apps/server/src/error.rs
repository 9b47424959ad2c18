use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use quotesnap_blob_store::BlobStoreError;
use thiserror::Error;

/// Errors a snapshot request can end with.
///
/// The display strings are the wire contract: callers receive them as
/// plain-text bodies, so they must not change shape casually.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Storage connection string not configured.")]
    StorageNotConfigured,
    #[error("Error creating blob container: {0}")]
    ContainerCreate(String),
    #[error("An error occurred while processing your request: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::StorageNotConfigured => {
                tracing::error!("Storage connection string not found in environment")
            }
            ApiError::ContainerCreate(message) => {
                tracing::error!("Error creating container: {}", message)
            }
            ApiError::Internal(message) => tracing::error!("An error occurred: {}", message),
        }
        // Every variant is a server-side failure with a plain-text body
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<BlobStoreError> for ApiError {
    fn from(err: BlobStoreError) -> Self {
        match err {
            BlobStoreError::ContainerCreate { message, .. } => ApiError::ContainerCreate(message),
            other => ApiError::Internal(other.to_string()),
        }
    }
}
