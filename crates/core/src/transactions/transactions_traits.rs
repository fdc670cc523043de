use async_trait::async_trait;

use super::transactions_model::{NewTransaction, Transaction, TransactionUpdate};
use crate::Result;

/// Trait defining the contract for the transaction ledger store.
#[async_trait]
pub trait TransactionRepositoryTrait: Send + Sync {
    fn get_transaction(&self, transaction_id: &str) -> Result<Transaction>;
    /// Ledger order is the order entries were recorded; edits keep their place.
    fn get_transactions(&self, symbol: Option<&str>) -> Result<Vec<Transaction>>;
    async fn create_transaction(&self, transaction: Transaction) -> Result<Transaction>;
    async fn update_transaction(&self, transaction: Transaction) -> Result<Transaction>;
    async fn delete_transaction(&self, transaction_id: &str) -> Result<Transaction>;
}

/// Trait defining the contract for transaction service operations.
#[async_trait]
pub trait TransactionServiceTrait: Send + Sync {
    fn get_transaction(&self, transaction_id: &str) -> Result<Transaction>;
    fn get_transactions(&self, symbol: Option<&str>) -> Result<Vec<Transaction>>;
    async fn create_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction>;
    async fn update_transaction(&self, update: TransactionUpdate) -> Result<Transaction>;
    async fn delete_transaction(&self, transaction_id: &str) -> Result<Transaction>;
}
