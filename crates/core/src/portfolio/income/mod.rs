//! Income totals, breakdowns and dividend yield.

mod income_calculator;
mod income_model;
mod income_service;

#[cfg(test)]
mod income_calculator_tests;

pub use income_calculator::{calculate_dividend_yields, calculate_income_summary};
pub use income_model::{
    DividendYield, IncomeBySymbol, IncomeByType, IncomeOverTime, IncomeSummary, RecentIncome,
};
pub use income_service::{IncomeAnalyticsService, IncomeAnalyticsServiceTrait};
