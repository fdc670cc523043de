//! Stockfolio Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for Stockfolio: the
//! transaction and income ledgers, the holdings projection, the portfolio
//! and income analytics, and the price refresh. It is database-agnostic and
//! defines repository traits that are implemented by the `storage-sqlite`
//! crate.

pub mod constants;
pub mod errors;
pub mod incomes;
pub mod portfolio;
pub mod quotes;
pub mod transactions;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
