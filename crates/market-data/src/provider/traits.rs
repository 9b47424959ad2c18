//! Market data provider trait definitions.
//!
//! This module defines the core `MarketDataProvider` trait that all
//! market data providers must implement.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::Quote;

/// Trait for market data providers.
///
/// Implement this trait to add support for a new market data source.
/// The service holds the provider as a trait object behind shared
/// state.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use quotesnap_market_data::{MarketDataError, MarketDataProvider, Quote};
///
/// struct MyProvider;
///
/// #[async_trait]
/// impl MarketDataProvider for MyProvider {
///     fn id(&self) -> &'static str {
///         "MY_PROVIDER"
///     }
///
///     async fn get_history(
///         &self,
///         symbol: &str,
///         period: &str,
///         interval: &str,
///     ) -> Result<Vec<Quote>, MarketDataError> {
///         // ... fetch and convert the series
///     }
/// }
/// ```
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "YAHOO". Used for logging and
    /// error messages.
    fn id(&self) -> &'static str;

    /// Fetch the historical series for a symbol.
    ///
    /// # Arguments
    ///
    /// * `symbol` - The ticker to fetch (e.g. "AAPL")
    /// * `period` - Range string for how far back to fetch (e.g. "1d", "5d")
    /// * `interval` - Range string for row granularity (e.g. "1m", "15m")
    ///
    /// Both range strings are passed to the provider verbatim; no
    /// validation happens here.
    ///
    /// # Returns
    ///
    /// The converted series ordered by timestamp ascending. An empty
    /// series is `Err(MarketDataError::NoData)`, never an empty `Ok`.
    async fn get_history(
        &self,
        symbol: &str,
        period: &str,
        interval: &str,
    ) -> Result<Vec<Quote>, MarketDataError>;
}
