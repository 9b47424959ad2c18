//! Yahoo Finance market data provider.
//!
//! This provider uses the Yahoo Finance chart API to fetch historical
//! series for:
//! - Equities/ETFs (e.g., AAPL, SHOP.TO)
//! - Cryptocurrencies (e.g., BTC-USD)
//! - Foreign exchange rates (e.g., EURUSD=X)

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use num_traits::FromPrimitive;
use rust_decimal::Decimal;
use tracing::{debug, warn};
use yahoo_finance_api as yahoo;

use crate::errors::MarketDataError;
use crate::models::Quote;
use crate::provider::MarketDataProvider;

/// Yahoo Finance market data provider.
///
/// Wraps the Yahoo Finance connector and converts its quotes into the
/// crate's `Quote` model.
pub struct YahooProvider {
    connector: yahoo::YahooConnector,
}

impl YahooProvider {
    /// Create a new Yahoo Finance provider.
    pub fn new() -> Result<Self, MarketDataError> {
        let connector =
            yahoo::YahooConnector::new().map_err(|e| MarketDataError::ProviderError {
                provider: "YAHOO".to_string(),
                message: format!("Failed to initialize Yahoo connector: {}", e),
            })?;
        Ok(Self { connector })
    }

    /// Convert a Yahoo quote to our Quote model.
    fn yahoo_quote_to_quote(yahoo_quote: yahoo::Quote) -> Result<Quote, MarketDataError> {
        // Validate timestamp
        let timestamp: DateTime<Utc> = Utc
            .timestamp_opt(yahoo_quote.timestamp, 0)
            .single()
            .ok_or_else(|| MarketDataError::ValidationFailed {
                message: format!("Invalid timestamp: {}", yahoo_quote.timestamp),
            })?;

        // Close price is required
        let close = Decimal::from_f64_retain(yahoo_quote.close).ok_or_else(|| {
            MarketDataError::ValidationFailed {
                message: format!(
                    "Failed to convert close price {} to Decimal",
                    yahoo_quote.close
                ),
            }
        })?;

        Ok(Quote {
            timestamp,
            open: Decimal::from_f64_retain(yahoo_quote.open),
            high: Decimal::from_f64_retain(yahoo_quote.high),
            low: Decimal::from_f64_retain(yahoo_quote.low),
            close,
            volume: Decimal::from_u64(yahoo_quote.volume),
        })
    }
}

#[async_trait]
impl MarketDataProvider for YahooProvider {
    fn id(&self) -> &'static str {
        "YAHOO"
    }

    async fn get_history(
        &self,
        symbol: &str,
        period: &str,
        interval: &str,
    ) -> Result<Vec<Quote>, MarketDataError> {
        debug!(
            "Fetching history for {} (period={}, interval={}) from Yahoo",
            symbol, period, interval
        );

        let response = self
            .connector
            .get_quote_range(symbol, interval, period)
            .await
            .map_err(|e| {
                if matches!(e, yahoo::YahooError::NoQuotes | yahoo::YahooError::NoResult) {
                    // Unknown symbols surface as an empty series
                    MarketDataError::NoData {
                        symbol: symbol.to_string(),
                    }
                } else {
                    MarketDataError::ProviderError {
                        provider: "YAHOO".to_string(),
                        message: e.to_string(),
                    }
                }
            })?;

        match response.quotes() {
            Ok(yahoo_quotes) => {
                let quotes: Vec<Quote> = yahoo_quotes
                    .into_iter()
                    .filter_map(|q| match Self::yahoo_quote_to_quote(q) {
                        Ok(quote) => Some(quote),
                        Err(e) => {
                            warn!("Skipping quote due to conversion error: {:?}", e);
                            None
                        }
                    })
                    .collect();

                if quotes.is_empty() {
                    return Err(MarketDataError::NoData {
                        symbol: symbol.to_string(),
                    });
                }

                Ok(quotes)
            }
            Err(yahoo::YahooError::NoQuotes) => {
                warn!(
                    "No quotes returned for '{}' (period={}, interval={})",
                    symbol, period, interval
                );
                Err(MarketDataError::NoData {
                    symbol: symbol.to_string(),
                })
            }
            Err(e) => Err(MarketDataError::ProviderError {
                provider: "YAHOO".to_string(),
                message: e.to_string(),
            }),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn make_yahoo_quote(timestamp: i64, close: f64) -> yahoo::Quote {
        yahoo::Quote {
            timestamp,
            open: 148.0,
            high: 152.0,
            low: 147.5,
            volume: 1_000_000,
            close,
            adjclose: close,
        }
    }

    #[test]
    fn test_quote_conversion() {
        let quote = YahooProvider::yahoo_quote_to_quote(make_yahoo_quote(1753311264, 150.25))
            .unwrap();
        assert_eq!(
            quote.timestamp,
            Utc.timestamp_opt(1753311264, 0).single().unwrap()
        );
        assert_eq!(quote.close, dec!(150.25));
        assert_eq!(quote.open, Some(dec!(148.0)));
        assert_eq!(quote.volume, Some(dec!(1000000)));
    }

    #[test]
    fn test_quote_conversion_rejects_nan_close() {
        let result = YahooProvider::yahoo_quote_to_quote(make_yahoo_quote(1753311264, f64::NAN));
        assert!(matches!(
            result,
            Err(MarketDataError::ValidationFailed { .. })
        ));
    }

    #[test]
    fn test_quote_conversion_rejects_out_of_range_timestamp() {
        let result = YahooProvider::yahoo_quote_to_quote(make_yahoo_quote(i64::MAX, 150.25));
        assert!(matches!(
            result,
            Err(MarketDataError::ValidationFailed { .. })
        ));
    }

    #[test]
    fn test_quote_conversion_keeps_nan_open_as_none() {
        let mut raw = make_yahoo_quote(1753311264, 150.25);
        raw.open = f64::NAN;
        let quote = YahooProvider::yahoo_quote_to_quote(raw).unwrap();
        assert!(quote.open.is_none());
        assert_eq!(quote.close, dec!(150.25));
    }
}
