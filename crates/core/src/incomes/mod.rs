//! Incomes module - dividends and other distributions received.

mod incomes_errors;
mod incomes_model;
mod incomes_service;
mod incomes_traits;

#[cfg(test)]
mod incomes_service_tests;

pub use incomes_errors::IncomeError;
pub use incomes_model::{Income, IncomeKind, IncomeUpdate, NewIncome, ValidIncome};
pub use incomes_service::IncomeService;
pub use incomes_traits::{IncomeRepositoryTrait, IncomeServiceTrait};
