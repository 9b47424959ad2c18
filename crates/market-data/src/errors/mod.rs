//! Error types for the market data crate.

use thiserror::Error;

/// Errors that can occur during market data operations.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The provider returned no rows for the requested symbol and range.
    /// Also covers unknown symbols, which behave like an empty series.
    /// Providers return this instead of an empty `Ok`, so callers cannot
    /// silently skip the empty case.
    #[error("No data returned for {symbol}")]
    NoData {
        /// The symbol the series was requested for
        symbol: String,
    },

    /// A provider-specific error occurred.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// Data validation failed.
    /// The provider returned a value that could not be converted.
    #[error("Validation failed: {message}")]
    ValidationFailed {
        /// Description of the validation failure
        message: String,
    },

    /// Rendering a series to CSV failed.
    #[error("CSV export failed: {message}")]
    ExportFailed {
        /// Description of the export failure
        message: String,
    },
}
