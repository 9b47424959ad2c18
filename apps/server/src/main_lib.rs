use std::sync::Arc;

use crate::config::Config;
use quotesnap_blob_store::{BlobStore, S3BlobStore, StorageConnection};
use quotesnap_market_data::{MarketDataProvider, YahooProvider};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub market_data: Arc<dyn MarketDataProvider + Send + Sync>,
    /// Absent when no storage connection string is configured; snapshot
    /// requests then fail with the configured-storage error.
    pub blob_store: Option<Arc<dyn BlobStore + Send + Sync>>,
    pub container_name: String,
}

pub fn init_tracing() {
    let log_format = std::env::var("QS_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let market_data: Arc<dyn MarketDataProvider + Send + Sync> = Arc::new(YahooProvider::new()?);

    // A present but unparseable connection string fails startup; an
    // absent one defers the failure to each snapshot request.
    let blob_store: Option<Arc<dyn BlobStore + Send + Sync>> = match &config.storage_connection {
        Some(raw) => {
            let conn = StorageConnection::parse(raw)?;
            Some(Arc::new(S3BlobStore::new(&conn)))
        }
        None => {
            tracing::warn!("No storage connection configured; snapshot uploads will fail");
            None
        }
    };

    Ok(Arc::new(AppState {
        market_data,
        blob_store,
        container_name: config.container_name.clone(),
    }))
}
