use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::UNKNOWN_GROUP;
use crate::utils::round_display;

/// Current position in one symbol, derived from its transactions.
///
/// Only symbols with a positive quantity have a holding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub symbol: String,
    pub quantity: i64,
    pub cost_basis: Decimal,
    pub market_value: Decimal,
    pub sector: Option<String>,
    pub category: Option<String>,
    pub current_price: Option<Decimal>,
    pub last_price_update: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Holding {
    pub fn profit_loss(&self) -> Decimal {
        self.market_value - self.cost_basis
    }

    pub fn sector_name(&self) -> String {
        group_name(self.sector.as_deref())
    }

    pub fn category_name(&self) -> String {
        group_name(self.category.as_deref())
    }

    /// Revalues the position at a freshly fetched unit price.
    pub fn with_price(self, price: Decimal, at: DateTime<Utc>) -> Holding {
        Holding {
            market_value: round_display(price * Decimal::from(self.quantity)),
            current_price: Some(price),
            last_price_update: Some(at),
            updated_at: at,
            ..self
        }
    }
}

fn group_name(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => UNKNOWN_GROUP.to_string(),
    }
}

/// Result of replaying one symbol's ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldingProjection {
    /// A position remains open.
    Position { quantity: i64, cost_basis: Decimal },
    /// Everything was sold; `quantity` is the final (zero or negative) balance.
    Closed { quantity: i64 },
}

/// Classification edit for a holding; `None` keeps the stored value and a
/// blank value clears it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingProfileUpdate {
    pub sector: Option<String>,
    pub category: Option<String>,
}

impl HoldingProfileUpdate {
    pub fn into_change(self) -> HoldingProfileChange {
        HoldingProfileChange {
            sector: self.sector.map(clean_label),
            category: self.category.map(clean_label),
        }
    }
}

fn clean_label(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Column writes for a classification edit: `None` leaves the column alone,
/// `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HoldingProfileChange {
    pub sector: Option<Option<String>>,
    pub category: Option<Option<String>>,
}
