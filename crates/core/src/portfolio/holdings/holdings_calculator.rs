use chrono::{DateTime, Utc};
use log::warn;
use rust_decimal::Decimal;

use super::holdings_model::{Holding, HoldingProjection};
use crate::constants::{DEFAULT_CATEGORY, DEFAULT_SECTOR};
use crate::transactions::{Transaction, TransactionType};
use crate::utils::round_display;

/// Replays a symbol's transactions in the order given.
///
/// Buys add quantity and cost. A sell that leaves shares behind removes the
/// average cost of the shares sold; a sell that empties the position (or
/// oversells it) zeroes the cost basis. A negative balance mid-ledger is
/// carried forward, later buys start from it.
pub fn project_holding(transactions: &[Transaction]) -> HoldingProjection {
    let mut quantity: i64 = 0;
    let mut cost_basis = Decimal::ZERO;

    for transaction in transactions {
        match transaction.transaction_type {
            TransactionType::Buy => {
                quantity += transaction.quantity;
                cost_basis += transaction.cost;
            }
            TransactionType::Sell => {
                let sold = transaction.quantity;
                let remaining = quantity - sold;
                if remaining > 0 {
                    let cost_per_share = cost_basis / Decimal::from(remaining + sold);
                    cost_basis -= cost_per_share * Decimal::from(sold);
                } else {
                    if remaining < 0 {
                        warn!(
                            "Sell {} of {} oversells the position to {}",
                            transaction.id, transaction.symbol, remaining
                        );
                    }
                    cost_basis = Decimal::ZERO;
                }
                quantity = remaining;
            }
        }
    }

    if quantity > 0 {
        HoldingProjection::Position {
            quantity,
            cost_basis: round_display(cost_basis),
        }
    } else {
        HoldingProjection::Closed { quantity }
    }
}

/// Builds the stored holding for an open position.
///
/// Market value is rebased on cost until the next price refresh. Sector and
/// category survive from the previous holding; price fields are left as
/// they were.
pub fn holding_from_position(
    symbol: &str,
    quantity: i64,
    cost_basis: Decimal,
    existing: Option<Holding>,
    now: DateTime<Utc>,
) -> Holding {
    match existing {
        Some(previous) => Holding {
            quantity,
            cost_basis,
            market_value: cost_basis,
            sector: previous.sector.or_else(|| Some(DEFAULT_SECTOR.to_string())),
            category: previous
                .category
                .or_else(|| Some(DEFAULT_CATEGORY.to_string())),
            updated_at: now,
            ..previous
        },
        None => Holding {
            symbol: symbol.to_string(),
            quantity,
            cost_basis,
            market_value: cost_basis,
            sector: Some(DEFAULT_SECTOR.to_string()),
            category: Some(DEFAULT_CATEGORY.to_string()),
            current_price: None,
            last_price_update: None,
            created_at: now,
            updated_at: now,
        },
    }
}

/// Replays a symbol's ledger on top of its stored holding.
///
/// Returns the holding to store, or `None` when no position remains.
pub fn rebuild_holding(
    symbol: &str,
    transactions: &[Transaction],
    existing: Option<Holding>,
    now: DateTime<Utc>,
) -> Option<Holding> {
    match project_holding(transactions) {
        HoldingProjection::Position {
            quantity,
            cost_basis,
        } => Some(holding_from_position(
            symbol, quantity, cost_basis, existing, now,
        )),
        HoldingProjection::Closed { .. } => None,
    }
}
