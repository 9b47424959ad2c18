use std::{net::SocketAddr, time::Duration};

pub struct Config {
    pub listen_addr: SocketAddr,
    pub storage_connection: Option<String>,
    pub container_name: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("QS_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .expect("Invalid QS_LISTEN_ADDR");
        // An empty connection string behaves like an unset one
        let storage_connection = std::env::var("QS_STORAGE_CONNECTION")
            .ok()
            .filter(|s| !s.is_empty());
        let container_name = std::env::var("QS_CONTAINER").unwrap_or_else(|_| "stock-data".into());
        let cors_allow = std::env::var("QS_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("QS_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        Self {
            listen_addr,
            storage_connection,
            container_name,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
        }
    }
}
