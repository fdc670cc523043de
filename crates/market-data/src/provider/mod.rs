//! Price provider abstractions and implementations.
//!
//! This module contains:
//! - The `PriceProvider` trait that all providers implement
//! - Rate limiting configuration
//! - Concrete provider implementations (quote API, Yahoo)

mod capabilities;
mod traits;

pub mod quote_api;
pub mod yahoo;

// Re-exports
pub use capabilities::RateLimit;
pub use traits::PriceProvider;
