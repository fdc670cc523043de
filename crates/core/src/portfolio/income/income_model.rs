use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::incomes::IncomeKind;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeSummary {
    pub total_income: Decimal,
    pub income_this_year: Decimal,
    pub income_this_month: Decimal,
    pub average_monthly_income: Decimal,
    pub income_count: usize,
    pub income_by_symbol: Vec<IncomeBySymbol>,
    pub income_by_type: Vec<IncomeByType>,
    pub income_over_time: Vec<IncomeOverTime>,
    pub recent_incomes: Vec<RecentIncome>,
    pub total_tax_withheld: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeBySymbol {
    pub symbol: String,
    pub total: Decimal,
    pub count: usize,
    pub percentage: Decimal,
}

/// Note the sum is named `value` here, unlike [`IncomeBySymbol::total`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeByType {
    pub name: String,
    pub value: Decimal,
    pub count: usize,
    pub percentage: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeOverTime {
    /// "Mon YYYY"
    pub month: String,
    pub amount: Decimal,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentIncome {
    pub id: String,
    pub symbol: String,
    pub income_type: IncomeKind,
    pub amount: Decimal,
    pub payment_date: NaiveDate,
    pub quantity: Option<i64>,
    pub tax_withheld: Decimal,
    pub notes: Option<String>,
}

/// Trailing twelve months of income against a holding's cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DividendYield {
    pub symbol: String,
    pub annual_income: Decimal,
    pub cost: Decimal,
    pub dividend_yield: Decimal,
}
