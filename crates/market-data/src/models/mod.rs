//! Market data models
//!
//! This module contains the core data types for market data operations:
//! - `quote` - Quote data structure (Quote)

mod quote;

pub use quote::Quote;
