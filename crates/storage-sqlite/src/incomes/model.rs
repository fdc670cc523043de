//! Database model for income payments.

use diesel::prelude::*;
use stockfolio_core::incomes::{Income, IncomeKind};

use crate::errors::StorageError;
use crate::utils::{
    format_date, format_timestamp, parse_date, parse_decimal, parse_optional_decimal,
    parse_timestamp,
};

#[derive(Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::incomes)]
#[diesel(treat_none_as_null = true)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct IncomeDB {
    pub id: String,
    pub symbol: String,
    pub income_type: String,
    pub amount: String,
    pub payment_date: String,
    pub quantity: Option<i64>,
    pub tax_withheld: Option<String>,
    pub notes: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Income> for IncomeDB {
    fn from(i: &Income) -> Self {
        Self {
            id: i.id.clone(),
            symbol: i.symbol.clone(),
            income_type: i.income_type.code().to_string(),
            amount: i.amount.to_string(),
            payment_date: format_date(i.payment_date),
            quantity: i.quantity,
            tax_withheld: i.tax_withheld.map(|t| t.to_string()),
            notes: i.notes.clone(),
            created_at: format_timestamp(i.created_at),
            updated_at: format_timestamp(i.updated_at),
        }
    }
}

impl TryFrom<IncomeDB> for Income {
    type Error = StorageError;

    fn try_from(row: IncomeDB) -> Result<Self, Self::Error> {
        Ok(Income {
            amount: parse_decimal(&row.amount, "amount")?,
            payment_date: parse_date(&row.payment_date, "payment_date")?,
            tax_withheld: parse_optional_decimal(row.tax_withheld.as_deref(), "tax_withheld")?,
            created_at: parse_timestamp(&row.created_at, "created_at")?,
            updated_at: parse_timestamp(&row.updated_at, "updated_at")?,
            income_type: IncomeKind::from(row.income_type),
            quantity: row.quantity,
            id: row.id,
            symbol: row.symbol,
            notes: row.notes,
        })
    }
}
