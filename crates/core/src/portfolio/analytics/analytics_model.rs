use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::transactions::TransactionType;

/// Portfolio-wide totals and breakdowns, recomputed on every request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub total_invested: Decimal,
    pub total_market_value: Decimal,
    pub total_profit_loss: Decimal,
    pub total_profit_loss_percentage: Decimal,
    pub number_of_assets: usize,
    pub number_of_operations: usize,
    pub allocation_by_symbol: Vec<SymbolAllocation>,
    pub allocation_by_sector: Vec<AllocationSlice>,
    pub allocation_by_category: Vec<AllocationSlice>,
    pub recent_operations: Vec<RecentOperation>,
    pub top_performers: Vec<SymbolAllocation>,
    pub portfolio_distribution: Vec<DistributionPoint>,
}

/// One holding's share of the portfolio and its result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolAllocation {
    pub symbol: String,
    pub value: Decimal,
    pub percentage: Decimal,
    pub quantity: i64,
    pub cost: Decimal,
    pub profit_loss: Decimal,
    pub profit_loss_percentage: Decimal,
}

/// A sector or category bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationSlice {
    pub name: String,
    pub value: Decimal,
    pub percentage: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentOperation {
    pub id: String,
    pub op_type: TransactionType,
    pub symbol: String,
    pub quantity: i64,
    pub cost: Decimal,
    pub currency: String,
    pub date: NaiveDate,
}

/// Pie-chart point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionPoint {
    pub name: String,
    pub value: Decimal,
}
