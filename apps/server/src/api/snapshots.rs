use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Router,
};
use chrono::{DateTime, Utc};
use quotesnap_market_data::{quotes_to_csv, MarketDataError};
use tracing::{info, warn};

const DEFAULT_TICKER: &str = "AAPL";
const DEFAULT_PERIOD: &str = "1d";
const DEFAULT_INTERVAL: &str = "1m";

/// Content type of uploaded snapshot documents.
const CSV_CONTENT_TYPE: &str = "text/csv";

#[derive(Default)]
struct SnapshotQuery {
    ticker: Option<String>,
    period: Option<String>,
    interval: Option<String>,
}

impl SnapshotQuery {
    /// Collect the recognized params from raw query pairs. Repeated
    /// keys collapse to the last occurrence; unknown keys are ignored.
    fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "ticker" => query.ticker = Some(value),
                "period" => query.period = Some(value),
                "interval" => query.interval = Some(value),
                _ => {}
            }
        }
        query
    }
}

#[derive(serde::Deserialize)]
struct SnapshotBody {
    ticker: Option<String>,
}

/// Resolved request parameters with defaults applied.
struct SnapshotParams {
    ticker: String,
    period: String,
    interval: String,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// Apply the parameter rules: the ticker comes from the query, then from
/// a JSON body, then the default; period and interval come from the
/// query only. Empty strings count as absent, and a malformed body is
/// treated like no body at all.
fn resolve_params(query: SnapshotQuery, body: &[u8]) -> SnapshotParams {
    let body_ticker = serde_json::from_slice::<SnapshotBody>(body)
        .ok()
        .and_then(|b| b.ticker);

    let ticker = non_empty(query.ticker)
        .or_else(|| non_empty(body_ticker))
        .unwrap_or_else(|| DEFAULT_TICKER.to_string());
    let period = non_empty(query.period).unwrap_or_else(|| DEFAULT_PERIOD.to_string());
    let interval = non_empty(query.interval).unwrap_or_else(|| DEFAULT_INTERVAL.to_string());

    SnapshotParams {
        ticker,
        period,
        interval,
    }
}

/// Blob key for a snapshot taken at `now`, e.g. `AAPL/2025-07-23_225424.csv`.
fn blob_key(ticker: &str, now: DateTime<Utc>) -> String {
    format!("{}/{}.csv", ticker, now.format("%Y-%m-%d_%H%M%S"))
}

async fn capture_snapshot(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
    body: Bytes,
) -> ApiResult<(StatusCode, String)> {
    let params = resolve_params(SnapshotQuery::from_pairs(pairs), &body);

    info!(
        "Fetching data for {} with period={}, interval={}",
        params.ticker, params.period, params.interval
    );

    let quotes = match state
        .market_data
        .get_history(&params.ticker, &params.period, &params.interval)
        .await
    {
        Ok(quotes) => quotes,
        Err(MarketDataError::NoData { .. }) => {
            warn!(
                "No data returned from {} for {}",
                state.market_data.id(),
                params.ticker
            );
            return Ok((
                StatusCode::NO_CONTENT,
                "No data returned from the market data provider for the specified ticker/period/interval."
                    .to_string(),
            ));
        }
        Err(err) => return Err(ApiError::Internal(err.to_string())),
    };

    let csv = quotes_to_csv(&quotes).map_err(|err| ApiError::Internal(err.to_string()))?;

    // The storage credential is checked only after the fetch
    let store = state
        .blob_store
        .as_ref()
        .ok_or(ApiError::StorageNotConfigured)?;

    store.ensure_container(&state.container_name).await?;

    let key = blob_key(&params.ticker, Utc::now());
    store
        .put_blob(
            &state.container_name,
            &key,
            csv.into_bytes(),
            CSV_CONTENT_TYPE,
        )
        .await?;
    info!("Data for {} uploaded to blob: {}", params.ticker, key);

    Ok((
        StatusCode::OK,
        format!(
            "Successfully fetched and uploaded data for {} to {} in blob storage.",
            params.ticker, key
        ),
    ))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/snapshots", get(capture_snapshot).post(capture_snapshot))
}
