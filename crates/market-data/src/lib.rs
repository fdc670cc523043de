//! Stockfolio Market Data Crate
//!
//! This crate provides provider-agnostic latest-price lookups for the
//! Stockfolio price refresh.
//!
//! # Overview
//!
//! - [`PriceProvider`] - the contract every price source implements
//! - [`QuoteApiProvider`] - JSON quote API reachable over HTTP
//! - [`YahooProvider`] - Yahoo Finance latest daily quote
//! - [`Quote`] - a single price observation
//! - [`MarketDataError`] - failures, with [`MarketDataError::is_not_found`]
//!   separating "no price for this symbol" from transport/provider failures
//!
//! ```text
//! +------------------+     +------------------+     +------------------+
//! |  Price Refresh   | --> |  PriceProvider   | --> |      Quote       |
//! +------------------+     +------------------+     +------------------+
//!                            |            |
//!                   QuoteApiProvider   YahooProvider
//! ```

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;
pub use models::Quote;
pub use provider::quote_api::{QuoteApiConfig, QuoteApiProvider};
pub use provider::yahoo::YahooProvider;
pub use provider::{PriceProvider, RateLimit};
