//! Storage connection string parsing.
//!
//! The service is configured with a single opaque connection string of
//! `Key=Value` pairs joined by semicolons, the shape hosting
//! environments hand out for a linked storage account:
//!
//! ```text
//! Endpoint=http://127.0.0.1:9000;Region=us-east-1;AccessKeyId=minio;SecretAccessKey=minio123
//! ```

use crate::error::{BlobStoreError, Result};

/// Default region when the connection string does not name one.
const DEFAULT_REGION: &str = "us-east-1";

/// Parsed storage connection string.
#[derive(Clone, Debug)]
pub struct StorageConnection {
    /// Endpoint URL of the storage service
    pub endpoint: String,

    /// Region name
    pub region: String,

    /// Access key id
    pub access_key_id: String,

    /// Secret access key
    pub secret_access_key: String,

    /// Whether to use path-style addressing. MinIO and similar
    /// gateways require it. Defaults to true.
    pub force_path_style: bool,
}

impl StorageConnection {
    /// Parse a `Key=Value;` connection string.
    ///
    /// `Endpoint`, `AccessKeyId` and `SecretAccessKey` are required.
    /// `Region` defaults to `us-east-1` and `ForcePathStyle` to `true`.
    /// Unknown keys and blank segments are ignored; whitespace around
    /// keys and values is trimmed. Values keep any `=` characters
    /// after the first one.
    pub fn parse(raw: &str) -> Result<Self> {
        let mut endpoint = None;
        let mut region = None;
        let mut access_key_id = None;
        let mut secret_access_key = None;
        let mut force_path_style = true;

        for segment in raw.split(';') {
            let segment = segment.trim();
            if segment.is_empty() {
                continue;
            }
            let (key, value) = segment.split_once('=').ok_or_else(|| {
                BlobStoreError::InvalidConnectionString(format!(
                    "segment '{}' is not a Key=Value pair",
                    segment
                ))
            })?;
            let key = key.trim();
            let value = value.trim();
            match key {
                "Endpoint" => endpoint = non_empty(value),
                "Region" => region = non_empty(value),
                "AccessKeyId" => access_key_id = non_empty(value),
                "SecretAccessKey" => secret_access_key = non_empty(value),
                "ForcePathStyle" => {
                    force_path_style = match value.to_ascii_lowercase().as_str() {
                        "true" => true,
                        "false" => false,
                        other => {
                            return Err(BlobStoreError::InvalidConnectionString(format!(
                                "ForcePathStyle must be true or false, got '{}'",
                                other
                            )))
                        }
                    }
                }
                _ => {}
            }
        }

        Ok(Self {
            endpoint: required(endpoint, "Endpoint")?,
            region: region.unwrap_or_else(|| DEFAULT_REGION.to_string()),
            access_key_id: required(access_key_id, "AccessKeyId")?,
            secret_access_key: required(secret_access_key, "SecretAccessKey")?,
            force_path_style,
        })
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn required(value: Option<String>, key: &str) -> Result<String> {
    value.ok_or_else(|| BlobStoreError::InvalidConnectionString(format!("missing {}", key)))
}
