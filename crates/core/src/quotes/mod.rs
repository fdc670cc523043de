//! Latest-price refresh for holdings.

mod price_refresh_model;
mod price_refresh_service;


pub use price_refresh_model::{PriceFetchOutcome, PriceRefreshReport};
pub use price_refresh_service::{PriceRefreshService, PriceRefreshServiceTrait};
