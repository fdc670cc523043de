use std::collections::HashMap;

use rust_decimal::Decimal;

use super::analytics_model::{
    AllocationSlice, DistributionPoint, PortfolioSummary, RecentOperation, SymbolAllocation,
};
use crate::constants::{RECENT_OPERATIONS_LIMIT, TOP_PERFORMERS_LIMIT};
use crate::portfolio::aggregation::{summarize_groups, GroupOrder, GroupSummary};
use crate::portfolio::holdings::Holding;
use crate::transactions::Transaction;
use crate::utils::{percentage_of, round_display};

/// Folds the current holdings and the ledger into a [`PortfolioSummary`].
///
/// Never fails: a zero market value yields empty allocations, a zero cost
/// yields zero percentages.
pub fn calculate_portfolio_summary(
    holdings: &[Holding],
    transactions: &[Transaction],
) -> PortfolioSummary {
    let total_invested = round_display(holdings.iter().map(|h| h.cost_basis).sum());
    let total_market_value = round_display(holdings.iter().map(|h| h.market_value).sum());
    let total_profit_loss = round_display(total_market_value - total_invested);
    let total_profit_loss_percentage = percentage_of(total_profit_loss, total_invested);

    let allocation_by_symbol = allocation_by_symbol(holdings, total_market_value);
    let allocation_by_sector = allocation_slices(holdings, total_market_value, Holding::sector_name);
    let allocation_by_category =
        allocation_slices(holdings, total_market_value, Holding::category_name);

    let mut top_performers: Vec<SymbolAllocation> = allocation_by_symbol
        .iter()
        .filter(|a| a.profit_loss_percentage > Decimal::ZERO)
        .cloned()
        .collect();
    top_performers.sort_by(|a, b| b.profit_loss_percentage.cmp(&a.profit_loss_percentage));
    top_performers.truncate(TOP_PERFORMERS_LIMIT);

    let portfolio_distribution = allocation_by_symbol
        .iter()
        .map(|a| DistributionPoint {
            name: a.symbol.clone(),
            value: a.value,
        })
        .collect();

    PortfolioSummary {
        total_invested,
        total_market_value,
        total_profit_loss,
        total_profit_loss_percentage,
        number_of_assets: holdings.len(),
        number_of_operations: transactions.len(),
        allocation_by_symbol,
        allocation_by_sector,
        allocation_by_category,
        recent_operations: recent_operations(transactions),
        top_performers,
        portfolio_distribution,
    }
}

fn allocation_by_symbol(holdings: &[Holding], total_market_value: Decimal) -> Vec<SymbolAllocation> {
    if total_market_value.is_zero() {
        return Vec::new();
    }

    let by_symbol: HashMap<&str, &Holding> =
        holdings.iter().map(|h| (h.symbol.as_str(), h)).collect();

    summarize_groups(
        holdings,
        |h| h.symbol.clone(),
        |h| h.market_value,
        total_market_value,
        GroupOrder::TotalDescending,
    )
    .into_iter()
    .filter_map(|group| {
        let holding = by_symbol.get(group.key.as_str())?;
        let profit_loss = holding.profit_loss();
        Some(SymbolAllocation {
            symbol: group.key,
            value: group.total,
            percentage: group.percentage,
            quantity: holding.quantity,
            cost: round_display(holding.cost_basis),
            profit_loss: round_display(profit_loss),
            profit_loss_percentage: percentage_of(profit_loss, holding.cost_basis),
        })
    })
    .collect()
}

fn allocation_slices(
    holdings: &[Holding],
    total_market_value: Decimal,
    group_of: fn(&Holding) -> String,
) -> Vec<AllocationSlice> {
    if total_market_value.is_zero() {
        return Vec::new();
    }

    summarize_groups(
        holdings,
        group_of,
        |h| h.market_value,
        total_market_value,
        GroupOrder::TotalDescending,
    )
    .into_iter()
    .map(|GroupSummary { key, total, percentage, .. }| AllocationSlice {
        name: key,
        value: total,
        percentage,
    })
    .collect()
}

fn recent_operations(transactions: &[Transaction]) -> Vec<RecentOperation> {
    let mut newest: Vec<&Transaction> = transactions.iter().collect();
    newest.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });

    newest
        .into_iter()
        .take(RECENT_OPERATIONS_LIMIT)
        .map(|t| RecentOperation {
            id: t.id.clone(),
            op_type: t.transaction_type,
            symbol: t.symbol.clone(),
            quantity: t.quantity,
            cost: t.cost,
            currency: t.currency.clone(),
            date: t.created_at.date_naive(),
        })
        .collect()
}
