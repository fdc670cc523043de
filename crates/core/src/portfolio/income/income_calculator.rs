use chrono::{Months, NaiveDate};
use num_traits::Zero;
use rust_decimal::Decimal;

use super::income_model::{
    DividendYield, IncomeBySymbol, IncomeByType, IncomeOverTime, IncomeSummary, RecentIncome,
};
use crate::constants::{DAYS_PER_AVERAGE_MONTH, RECENT_INCOMES_LIMIT};
use crate::incomes::Income;
use crate::portfolio::aggregation::{summarize_groups, GroupOrder};
use crate::portfolio::holdings::Holding;
use crate::utils::time_utils::{start_of_month, start_of_year};
use crate::utils::{percentage_of, round_display};

/// Folds the income records into an [`IncomeSummary`] as seen on `today`.
pub fn calculate_income_summary(incomes: &[Income], today: NaiveDate) -> IncomeSummary {
    let total_income = round_display(incomes.iter().map(|i| i.amount).sum());
    let income_this_year = sum_paid_since(incomes, start_of_year(today));
    let income_this_month = sum_paid_since(incomes, start_of_month(today));
    let total_tax_withheld = round_display(
        incomes
            .iter()
            .map(|i| i.tax_withheld.unwrap_or_default())
            .sum(),
    );

    let income_by_symbol = summarize_groups(
        incomes,
        |i| i.symbol.clone(),
        |i| i.amount,
        total_income,
        GroupOrder::TotalDescending,
    )
    .into_iter()
    .map(|g| IncomeBySymbol {
        symbol: g.key,
        total: g.total,
        count: g.count,
        percentage: g.percentage,
    })
    .collect();

    let income_by_type = summarize_groups(
        incomes,
        |i| i.income_type.clone(),
        |i| i.amount,
        total_income,
        GroupOrder::TotalDescending,
    )
    .into_iter()
    .map(|g| IncomeByType {
        name: g.key.label(),
        value: g.total,
        count: g.count,
        percentage: g.percentage,
    })
    .collect();

    // Month-start dates sort chronologically across years.
    let income_over_time = summarize_groups(
        incomes,
        |i| start_of_month(i.payment_date),
        |i| i.amount,
        total_income,
        GroupOrder::KeyAscending,
    )
    .into_iter()
    .map(|g| IncomeOverTime {
        month: g.key.format("%b %Y").to_string(),
        amount: g.total,
        count: g.count,
    })
    .collect();

    IncomeSummary {
        total_income,
        income_this_year,
        income_this_month,
        average_monthly_income: average_monthly_income(incomes, total_income, today),
        income_count: incomes.len(),
        income_by_symbol,
        income_by_type,
        income_over_time,
        recent_incomes: recent_incomes(incomes),
        total_tax_withheld,
    }
}

fn sum_paid_since(incomes: &[Income], since: NaiveDate) -> Decimal {
    round_display(
        incomes
            .iter()
            .filter(|i| i.payment_date >= since)
            .map(|i| i.amount)
            .sum(),
    )
}

/// Total spread over the 30-day months elapsed since the first payment,
/// counting at least one month.
fn average_monthly_income(incomes: &[Income], total_income: Decimal, today: NaiveDate) -> Decimal {
    let Some(first_payment) = incomes.iter().map(|i| i.payment_date).min() else {
        return Decimal::zero();
    };

    let elapsed_days = (today - first_payment).num_days();
    let months = elapsed_days
        .div_euclid(DAYS_PER_AVERAGE_MONTH)
        + i64::from(elapsed_days.rem_euclid(DAYS_PER_AVERAGE_MONTH) != 0);
    let months = months.max(1);

    round_display(total_income / Decimal::from(months))
}

fn recent_incomes(incomes: &[Income]) -> Vec<RecentIncome> {
    let mut newest: Vec<&Income> = incomes.iter().collect();
    newest.sort_by(|a, b| {
        b.payment_date
            .cmp(&a.payment_date)
            .then_with(|| b.created_at.cmp(&a.created_at))
    });

    newest
        .into_iter()
        .take(RECENT_INCOMES_LIMIT)
        .map(|i| RecentIncome {
            id: i.id.clone(),
            symbol: i.symbol.clone(),
            income_type: i.income_type.clone(),
            amount: i.amount,
            payment_date: i.payment_date,
            quantity: i.quantity,
            tax_withheld: i.tax_withheld.unwrap_or_default(),
            notes: i.notes.clone(),
        })
        .collect()
}

/// Income of the last year per holding as a percentage of its cost.
///
/// Holdings without income in the window are left out; highest yield first.
pub fn calculate_dividend_yields(
    holdings: &[Holding],
    incomes: &[Income],
    today: NaiveDate,
) -> Vec<DividendYield> {
    let window_start = today.checked_sub_months(Months::new(12)).unwrap_or(today);

    let mut yields: Vec<DividendYield> = holdings
        .iter()
        .map(|holding| {
            let annual_income: Decimal = incomes
                .iter()
                .filter(|i| i.symbol == holding.symbol && i.payment_date >= window_start)
                .map(|i| i.amount)
                .sum();
            DividendYield {
                symbol: holding.symbol.clone(),
                annual_income: round_display(annual_income),
                cost: round_display(holding.cost_basis),
                dividend_yield: percentage_of(annual_income, holding.cost_basis),
            }
        })
        .filter(|y| y.annual_income > Decimal::ZERO)
        .collect();

    yields.sort_by(|a, b| b.dividend_yield.cmp(&a.dividend_yield));
    yields
}
