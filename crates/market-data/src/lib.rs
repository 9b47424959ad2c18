//! Quotesnap Market Data Crate
//!
//! This crate provides provider-agnostic historical price fetching for the
//! quotesnap service, together with CSV export of the fetched series.
//!
//! # Overview
//!
//! The market data crate supports:
//! - Fetching historical OHLCV series by ticker, period and interval
//! - Yahoo Finance as the concrete provider
//! - Rendering a series to an in-memory CSV document
//!
//! Period and interval are provider range strings (e.g. `"1d"`, `"5d"`,
//! `"1m"`, `"15m"`) and are passed through to the provider unvalidated.
//!
//! # Core Types
//!
//! - [`Quote`] - One row of a series, with OHLCV data
//! - [`MarketDataProvider`] - Trait implemented by data sources
//! - [`YahooProvider`] - Yahoo Finance implementation
//! - [`MarketDataError`] - Error type for all operations; an empty series
//!   surfaces as [`MarketDataError::NoData`], never as an empty `Ok`

pub mod errors;
pub mod export;
pub mod models;
pub mod provider;

// Re-export the public surface
pub use errors::MarketDataError;
pub use export::quotes_to_csv;
pub use models::Quote;
pub use provider::yahoo::YahooProvider;
pub use provider::MarketDataProvider;
