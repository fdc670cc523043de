//! Portfolio totals, allocations and top performers.

mod analytics_calculator;
mod analytics_model;
mod analytics_service;

#[cfg(test)]
mod analytics_calculator_tests;

pub use analytics_calculator::calculate_portfolio_summary;
pub use analytics_model::{
    AllocationSlice, DistributionPoint, PortfolioSummary, RecentOperation, SymbolAllocation,
};
pub use analytics_service::{PortfolioAnalyticsService, PortfolioAnalyticsServiceTrait};
