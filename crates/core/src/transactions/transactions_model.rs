//! Transaction domain models.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{FieldError, ValidationError};

/// Side of a ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Buy,
    Sell,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Buy => "buy",
            TransactionType::Sell => "sell",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "buy" => Ok(TransactionType::Buy),
            "sell" => Ok(TransactionType::Sell),
            other => Err(format!("Unknown transaction type: {}", other)),
        }
    }
}

/// A recorded buy or sell.
///
/// `cost` is the total amount paid or received, not a unit price.
/// Ledger position is the order entries were recorded, not `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub transaction_type: TransactionType,
    pub symbol: String,
    pub quantity: i64,
    pub cost: Decimal,
    pub currency: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for recording a new transaction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub transaction_type: String,
    pub symbol: String,
    pub quantity: Option<i64>,
    pub cost: Option<Decimal>,
    pub currency: String,
}

/// Normalized fields of a transaction that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidTransaction {
    pub transaction_type: TransactionType,
    pub symbol: String,
    pub quantity: i64,
    pub cost: Decimal,
    pub currency: String,
}

impl NewTransaction {
    /// Checks every field and reports all failures at once.
    pub fn validate(&self) -> Result<ValidTransaction, ValidationError> {
        let mut errors = Vec::new();

        let transaction_type = match self.transaction_type.parse::<TransactionType>() {
            Ok(t) => Some(t),
            Err(_) => {
                errors.push(FieldError::new("transactionType", "must be buy or sell"));
                None
            }
        };

        let symbol = normalize_code(&self.symbol);
        if symbol.is_empty() {
            errors.push(FieldError::new("symbol", "can't be blank"));
        }

        match self.quantity {
            None => errors.push(FieldError::new("quantity", "can't be blank")),
            Some(q) if q <= 0 => errors.push(FieldError::new("quantity", "must be greater than 0")),
            Some(_) => {}
        }

        if self.cost.is_none() {
            errors.push(FieldError::new("cost", "can't be blank"));
        }

        let currency = normalize_code(&self.currency);
        if currency.is_empty() {
            errors.push(FieldError::new("currency", "can't be blank"));
        }

        ValidationError::check(errors)?;

        match (transaction_type, self.quantity, self.cost) {
            (Some(transaction_type), Some(quantity), Some(cost)) => Ok(ValidTransaction {
                transaction_type,
                symbol,
                quantity,
                cost,
                currency,
            }),
            _ => Err(ValidationError::single("transaction", "is incomplete")),
        }
    }
}

/// Partial edit of an existing transaction; `None` keeps the stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionUpdate {
    pub id: String,
    pub transaction_type: Option<String>,
    pub symbol: Option<String>,
    pub quantity: Option<i64>,
    pub cost: Option<Decimal>,
    pub currency: Option<String>,
}

impl TransactionUpdate {
    /// Overlays this edit on the stored transaction, producing input to revalidate.
    pub fn merge_into(&self, existing: &Transaction) -> NewTransaction {
        NewTransaction {
            transaction_type: self
                .transaction_type
                .clone()
                .unwrap_or_else(|| existing.transaction_type.as_str().to_string()),
            symbol: self
                .symbol
                .clone()
                .unwrap_or_else(|| existing.symbol.clone()),
            quantity: Some(self.quantity.unwrap_or(existing.quantity)),
            cost: Some(self.cost.unwrap_or(existing.cost)),
            currency: self
                .currency
                .clone()
                .unwrap_or_else(|| existing.currency.clone()),
        }
    }
}

/// Tickers and currency codes are stored trimmed and upper-cased.
pub(crate) fn normalize_code(value: &str) -> String {
    value.trim().to_uppercase()
}
