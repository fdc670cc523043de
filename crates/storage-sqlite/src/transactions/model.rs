//! Database model for ledger transactions.

use diesel::prelude::*;
use stockfolio_core::transactions::{Transaction, TransactionType};

use crate::errors::StorageError;
use crate::utils::{format_timestamp, parse_decimal, parse_timestamp};

#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::transactions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TransactionDB {
    pub id: String,
    pub transaction_type: String,
    pub symbol: String,
    pub quantity: i64,
    pub cost: String,
    pub currency: String,
    pub created_at: String,
    pub updated_at: String,
    /// Recording order; assigned on insert and never changed.
    pub ledger_seq: i64,
}

impl TransactionDB {
    pub fn new(t: &Transaction, ledger_seq: i64) -> Self {
        Self {
            id: t.id.clone(),
            transaction_type: t.transaction_type.as_str().to_string(),
            symbol: t.symbol.clone(),
            quantity: t.quantity,
            cost: t.cost.to_string(),
            currency: t.currency.clone(),
            created_at: format_timestamp(t.created_at),
            updated_at: format_timestamp(t.updated_at),
            ledger_seq,
        }
    }
}

impl TryFrom<TransactionDB> for Transaction {
    type Error = StorageError;

    fn try_from(row: TransactionDB) -> Result<Self, Self::Error> {
        let transaction_type = row
            .transaction_type
            .parse::<TransactionType>()
            .map_err(StorageError::SerializationError)?;
        Ok(Transaction {
            transaction_type,
            quantity: row.quantity,
            cost: parse_decimal(&row.cost, "cost")?,
            created_at: parse_timestamp(&row.created_at, "created_at")?,
            updated_at: parse_timestamp(&row.updated_at, "updated_at")?,
            id: row.id,
            symbol: row.symbol,
            currency: row.currency,
        })
    }
}
