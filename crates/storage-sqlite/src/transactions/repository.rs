use std::sync::Arc;

use async_trait::async_trait;
use diesel::dsl::max;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use stockfolio_core::transactions::{Transaction, TransactionError, TransactionRepositoryTrait};
use stockfolio_core::{Error, Result};

use super::model::TransactionDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::{IntoCore, StorageError};
use crate::schema::transactions;
use crate::utils::format_timestamp;

/// Repository for the buy/sell ledger
pub struct TransactionRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl TransactionRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

fn find_transaction(conn: &mut SqliteConnection, transaction_id: &str) -> Result<Transaction> {
    let row = transactions::table
        .find(transaction_id)
        .select(TransactionDB::as_select())
        .first::<TransactionDB>(conn)
        .optional()
        .into_core()?
        .ok_or_else(|| Error::from(TransactionError::NotFound(transaction_id.to_string())))?;
    Transaction::try_from(row).map_err(Error::from)
}

/// Loads transactions in the order they were recorded.
pub(crate) fn load_ledger(
    conn: &mut SqliteConnection,
    symbol: Option<&str>,
) -> Result<Vec<Transaction>> {
    let mut query = transactions::table
        .select(TransactionDB::as_select())
        .into_boxed();
    if let Some(symbol) = symbol {
        query = query.filter(transactions::symbol.eq(symbol.to_string()));
    }

    query
        .order(transactions::ledger_seq.asc())
        .load::<TransactionDB>(conn)
        .into_core()?
        .into_iter()
        .map(Transaction::try_from)
        .collect::<std::result::Result<Vec<_>, StorageError>>()
        .into_core()
}

#[async_trait]
impl TransactionRepositoryTrait for TransactionRepository {
    fn get_transaction(&self, transaction_id: &str) -> Result<Transaction> {
        let mut conn = get_connection(&self.pool)?;
        find_transaction(&mut conn, transaction_id)
    }

    fn get_transactions(&self, symbol: Option<&str>) -> Result<Vec<Transaction>> {
        let mut conn = get_connection(&self.pool)?;
        load_ledger(&mut conn, symbol)
    }

    async fn create_transaction(&self, transaction: Transaction) -> Result<Transaction> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Transaction> {
                let last_seq = transactions::table
                    .select(max(transactions::ledger_seq))
                    .first::<Option<i64>>(conn)
                    .map_err(StorageError::from)?;
                let row = TransactionDB::new(&transaction, last_seq.unwrap_or(0) + 1);
                diesel::insert_into(transactions::table)
                    .values(&row)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(transaction)
            })
            .await
    }

    async fn update_transaction(&self, transaction: Transaction) -> Result<Transaction> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Transaction> {
                // created_at and ledger_seq stay as recorded.
                let changed = diesel::update(transactions::table.find(&transaction.id))
                    .set((
                        transactions::transaction_type.eq(transaction.transaction_type.as_str()),
                        transactions::symbol.eq(&transaction.symbol),
                        transactions::quantity.eq(transaction.quantity),
                        transactions::cost.eq(transaction.cost.to_string()),
                        transactions::currency.eq(&transaction.currency),
                        transactions::updated_at.eq(format_timestamp(transaction.updated_at)),
                    ))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                if changed == 0 {
                    return Err(TransactionError::NotFound(transaction.id).into());
                }
                Ok(transaction)
            })
            .await
    }

    async fn delete_transaction(&self, transaction_id: &str) -> Result<Transaction> {
        let transaction_id = transaction_id.to_string();

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Transaction> {
                let existing = find_transaction(conn, &transaction_id)?;
                diesel::delete(transactions::table.find(&transaction_id))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(existing)
            })
            .await
    }
}
