//! Transactions module - the buy/sell ledger.

mod transactions_errors;
mod transactions_model;
mod transactions_service;
mod transactions_traits;


pub(crate) use transactions_model::normalize_code;
pub use transactions_errors::TransactionError;
pub use transactions_model::{
    NewTransaction, Transaction, TransactionType, TransactionUpdate, ValidTransaction,
};
pub use transactions_service::TransactionService;
pub use transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
