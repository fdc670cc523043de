//! Database model for derived holdings.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use stockfolio_core::portfolio::holdings::{Holding, HoldingProfileChange};

use crate::errors::StorageError;
use crate::utils::{format_timestamp, parse_decimal, parse_optional_decimal, parse_timestamp};

#[derive(Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::holdings)]
#[diesel(primary_key(symbol))]
#[diesel(treat_none_as_null = true)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct HoldingDB {
    pub symbol: String,
    pub quantity: i64,
    pub cost_basis: String,
    pub market_value: String,
    pub sector: Option<String>,
    pub category: Option<String>,
    pub current_price: Option<String>,
    pub last_price_update: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Holding> for HoldingDB {
    fn from(h: &Holding) -> Self {
        Self {
            symbol: h.symbol.clone(),
            quantity: h.quantity,
            cost_basis: h.cost_basis.to_string(),
            market_value: h.market_value.to_string(),
            sector: h.sector.clone(),
            category: h.category.clone(),
            current_price: h.current_price.map(|p| p.to_string()),
            last_price_update: h.last_price_update.map(format_timestamp),
            created_at: format_timestamp(h.created_at),
            updated_at: format_timestamp(h.updated_at),
        }
    }
}

impl TryFrom<HoldingDB> for Holding {
    type Error = StorageError;

    fn try_from(row: HoldingDB) -> Result<Self, Self::Error> {
        let last_price_update = row
            .last_price_update
            .as_deref()
            .map(|v| parse_timestamp(v, "last_price_update"))
            .transpose()?;

        Ok(Holding {
            quantity: row.quantity,
            cost_basis: parse_decimal(&row.cost_basis, "cost_basis")?,
            market_value: parse_decimal(&row.market_value, "market_value")?,
            current_price: parse_optional_decimal(row.current_price.as_deref(), "current_price")?,
            last_price_update,
            created_at: parse_timestamp(&row.created_at, "created_at")?,
            updated_at: parse_timestamp(&row.updated_at, "updated_at")?,
            symbol: row.symbol,
            sector: row.sector,
            category: row.category,
        })
    }
}

/// Classification columns only; `None` skips a column, `Some(None)` clears it.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::holdings)]
pub struct HoldingProfileDB {
    pub sector: Option<Option<String>>,
    pub category: Option<Option<String>>,
    pub updated_at: String,
}

impl HoldingProfileDB {
    pub fn new(change: HoldingProfileChange, at: DateTime<Utc>) -> Self {
        Self {
            sector: change.sector,
            category: change.category,
            updated_at: format_timestamp(at),
        }
    }
}
