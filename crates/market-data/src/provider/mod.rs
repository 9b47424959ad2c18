//! Market data provider abstractions and implementations.
//!
//! This module contains:
//! - The `MarketDataProvider` trait that all providers implement
//! - The Yahoo Finance provider implementation
//!
//! Providers take the symbol, period and interval as plain range strings
//! and return the converted series, or a typed error when the series is
//! empty or the upstream call failed.

mod traits;

pub mod yahoo;

// Re-exports
pub use traits::MarketDataProvider;
