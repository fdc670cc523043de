//! Derived portfolio views: holdings and the reports built on them.

pub mod aggregation;
pub mod analytics;
pub mod holdings;
pub mod income;
