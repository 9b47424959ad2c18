//! Quotesnap Blob Store - object storage access for the quotesnap service.
//!
//! This crate parses the storage connection string the service is
//! configured with and uploads snapshot documents to an S3-compatible
//! object store. Containers are created lazily; an already-existing
//! container is not an error.
//!
//! # Usage
//!
//! ```rust,ignore
//! use quotesnap_blob_store::{BlobStore, S3BlobStore, StorageConnection};
//!
//! let conn = StorageConnection::parse(
//!     "Endpoint=http://127.0.0.1:9000;AccessKeyId=key;SecretAccessKey=secret",
//! )?;
//! let store = S3BlobStore::new(&conn);
//! store.ensure_container("stock-data").await?;
//! store.put_blob("stock-data", "AAPL/2025-07-23_225424.csv", bytes, "text/csv").await?;
//! ```

mod connection;
mod error;
mod s3;
mod traits;

pub use connection::StorageConnection;
pub use error::{BlobStoreError, Result};
pub use s3::S3BlobStore;
pub use traits::BlobStore;
