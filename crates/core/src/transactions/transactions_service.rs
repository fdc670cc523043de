use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info};
use uuid::Uuid;

use super::transactions_model::{NewTransaction, Transaction, TransactionUpdate};
use super::transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
use crate::portfolio::holdings::HoldingsServiceTrait;
use crate::utils::Clock;
use crate::Result;

/// Records ledger changes and keeps the derived holding of each touched
/// symbol in step with them.
pub struct TransactionService {
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    holdings_service: Arc<dyn HoldingsServiceTrait>,
    clock: Arc<dyn Clock>,
}

impl TransactionService {
    pub fn new(
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
        holdings_service: Arc<dyn HoldingsServiceTrait>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            transaction_repository,
            holdings_service,
            clock,
        }
    }
}

#[async_trait]
impl TransactionServiceTrait for TransactionService {
    fn get_transaction(&self, transaction_id: &str) -> Result<Transaction> {
        self.transaction_repository.get_transaction(transaction_id)
    }

    fn get_transactions(&self, symbol: Option<&str>) -> Result<Vec<Transaction>> {
        self.transaction_repository.get_transactions(symbol)
    }

    async fn create_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction> {
        let valid = new_transaction.validate()?;

        let now = self.clock.now();
        let transaction = Transaction {
            id: Uuid::now_v7().to_string(),
            transaction_type: valid.transaction_type,
            symbol: valid.symbol,
            quantity: valid.quantity,
            cost: valid.cost,
            currency: valid.currency,
            created_at: now,
            updated_at: now,
        };
        debug!(
            "Recording {} of {} {}",
            transaction.transaction_type, transaction.quantity, transaction.symbol
        );

        let created = self
            .transaction_repository
            .create_transaction(transaction)
            .await?;
        self.holdings_service
            .recompute_holding(&created.symbol)
            .await?;
        Ok(created)
    }

    async fn update_transaction(&self, update: TransactionUpdate) -> Result<Transaction> {
        let existing = self.transaction_repository.get_transaction(&update.id)?;
        let valid = update.merge_into(&existing).validate()?;
        let previous_symbol = existing.symbol.clone();

        let transaction = Transaction {
            transaction_type: valid.transaction_type,
            symbol: valid.symbol,
            quantity: valid.quantity,
            cost: valid.cost,
            currency: valid.currency,
            updated_at: self.clock.now(),
            ..existing
        };

        let updated = self
            .transaction_repository
            .update_transaction(transaction)
            .await?;
        self.holdings_service
            .recompute_holding(&updated.symbol)
            .await?;
        if updated.symbol != previous_symbol {
            info!(
                "Transaction {} moved from {} to {}",
                updated.id, previous_symbol, updated.symbol
            );
            self.holdings_service
                .recompute_holding(&previous_symbol)
                .await?;
        }
        Ok(updated)
    }

    async fn delete_transaction(&self, transaction_id: &str) -> Result<Transaction> {
        let deleted = self
            .transaction_repository
            .delete_transaction(transaction_id)
            .await?;
        self.holdings_service
            .recompute_holding(&deleted.symbol)
            .await?;
        Ok(deleted)
    }
}
