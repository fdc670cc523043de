//! Command line surface and dispatch.

use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use serde_json::{json, Value};
use stockfolio_core::constants::DEFAULT_CURRENCY;
use stockfolio_core::incomes::{IncomeUpdate, NewIncome};
use stockfolio_core::portfolio::holdings::HoldingProfileUpdate;
use stockfolio_core::transactions::{NewTransaction, TransactionUpdate};

use crate::main_lib::AppState;

#[derive(Debug, Parser)]
#[command(name = "stockfolio", version, about = "Track a stock portfolio and its dividends")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Buy and sell ledger
    #[command(subcommand)]
    Transactions(TransactionsCommand),
    /// Dividends and other distributions
    #[command(subcommand)]
    Incomes(IncomesCommand),
    /// Current positions
    #[command(subcommand)]
    Holdings(HoldingsCommand),
    /// Portfolio totals, allocations and top performers
    Summary,
    /// Income totals and breakdowns
    IncomeSummary,
    /// Trailing twelve month dividend yield per holding
    DividendYield,
    /// Fetch the latest price of every holding
    RefreshPrices,
}

#[derive(Debug, Subcommand)]
pub enum TransactionsCommand {
    List {
        #[arg(long)]
        symbol: Option<String>,
    },
    Add(TransactionArgs),
    Edit {
        id: String,
        #[command(flatten)]
        fields: TransactionEditArgs,
    },
    Delete {
        id: String,
    },
}

#[derive(Debug, Args)]
pub struct TransactionArgs {
    /// buy or sell
    #[arg(long = "type", default_value = "")]
    pub transaction_type: String,
    #[arg(long, default_value = "")]
    pub symbol: String,
    #[arg(long)]
    pub quantity: Option<i64>,
    /// Total paid or received
    #[arg(long)]
    pub cost: Option<Decimal>,
    #[arg(long, default_value = DEFAULT_CURRENCY)]
    pub currency: String,
}

#[derive(Debug, Args)]
pub struct TransactionEditArgs {
    #[arg(long = "type")]
    pub transaction_type: Option<String>,
    #[arg(long)]
    pub symbol: Option<String>,
    #[arg(long)]
    pub quantity: Option<i64>,
    #[arg(long)]
    pub cost: Option<Decimal>,
    #[arg(long)]
    pub currency: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum IncomesCommand {
    List {
        #[arg(long)]
        symbol: Option<String>,
    },
    Add(IncomeArgs),
    Edit {
        id: String,
        #[command(flatten)]
        fields: IncomeEditArgs,
    },
    Delete {
        id: String,
    },
}

#[derive(Debug, Args)]
pub struct IncomeArgs {
    #[arg(long, default_value = "")]
    pub symbol: String,
    /// dividend, jcp, bonus or subscription_rights
    #[arg(long = "type", default_value = "")]
    pub income_type: String,
    #[arg(long)]
    pub amount: Option<Decimal>,
    /// Payment date (YYYY-MM-DD)
    #[arg(long, default_value = "")]
    pub date: String,
    #[arg(long)]
    pub quantity: Option<i64>,
    #[arg(long)]
    pub tax_withheld: Option<Decimal>,
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Debug, Args)]
pub struct IncomeEditArgs {
    #[arg(long)]
    pub symbol: Option<String>,
    #[arg(long = "type")]
    pub income_type: Option<String>,
    #[arg(long)]
    pub amount: Option<Decimal>,
    #[arg(long)]
    pub date: Option<String>,
    #[arg(long)]
    pub quantity: Option<i64>,
    #[arg(long)]
    pub tax_withheld: Option<Decimal>,
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum HoldingsCommand {
    List,
    /// Set the sector and/or category of a holding; an empty value clears it
    Classify {
        symbol: String,
        #[arg(long)]
        sector: Option<String>,
        #[arg(long)]
        category: Option<String>,
    },
}

/// Runs one command and returns what it produced as JSON.
pub async fn execute(command: Command, state: &AppState) -> anyhow::Result<Value> {
    let output = match command {
        Command::Transactions(cmd) => transactions(cmd, state).await?,
        Command::Incomes(cmd) => incomes(cmd, state).await?,
        Command::Holdings(HoldingsCommand::List) => {
            serde_json::to_value(state.holdings_service.get_holdings()?)?
        }
        Command::Holdings(HoldingsCommand::Classify {
            symbol,
            sector,
            category,
        }) => serde_json::to_value(
            state
                .holdings_service
                .update_holding_profile(&symbol, HoldingProfileUpdate { sector, category })
                .await?,
        )?,
        Command::Summary => {
            serde_json::to_value(state.portfolio_analytics_service.get_portfolio_summary()?)?
        }
        Command::IncomeSummary => {
            serde_json::to_value(state.income_analytics_service.get_income_summary()?)?
        }
        Command::DividendYield => serde_json::to_value(
            state
                .income_analytics_service
                .get_dividend_yield_by_asset()?,
        )?,
        Command::RefreshPrices => {
            let report = state.price_refresh_service.refresh_all_prices().await;
            tracing::info!(
                "Refreshed {} of {} prices",
                report.succeeded,
                report.total
            );
            serde_json::to_value(report)?
        }
    };
    Ok(output)
}

async fn transactions(cmd: TransactionsCommand, state: &AppState) -> anyhow::Result<Value> {
    let service = &state.transaction_service;
    let output = match cmd {
        TransactionsCommand::List { symbol } => {
            serde_json::to_value(service.get_transactions(symbol.as_deref())?)?
        }
        TransactionsCommand::Add(args) => serde_json::to_value(
            service
                .create_transaction(NewTransaction {
                    transaction_type: args.transaction_type,
                    symbol: args.symbol,
                    quantity: args.quantity,
                    cost: args.cost,
                    currency: args.currency,
                })
                .await?,
        )?,
        TransactionsCommand::Edit { id, fields } => serde_json::to_value(
            service
                .update_transaction(TransactionUpdate {
                    id,
                    transaction_type: fields.transaction_type,
                    symbol: fields.symbol,
                    quantity: fields.quantity,
                    cost: fields.cost,
                    currency: fields.currency,
                })
                .await?,
        )?,
        TransactionsCommand::Delete { id } => {
            let deleted = service.delete_transaction(&id).await?;
            json!({ "deleted": deleted.id })
        }
    };
    Ok(output)
}

async fn incomes(cmd: IncomesCommand, state: &AppState) -> anyhow::Result<Value> {
    let service = &state.income_service;
    let output = match cmd {
        IncomesCommand::List { symbol } => {
            serde_json::to_value(service.get_incomes(symbol.as_deref())?)?
        }
        IncomesCommand::Add(args) => serde_json::to_value(
            service
                .create_income(NewIncome {
                    symbol: args.symbol,
                    income_type: args.income_type,
                    amount: args.amount,
                    payment_date: args.date,
                    quantity: args.quantity,
                    tax_withheld: args.tax_withheld,
                    notes: args.notes,
                })
                .await?,
        )?,
        IncomesCommand::Edit { id, fields } => serde_json::to_value(
            service
                .update_income(IncomeUpdate {
                    id,
                    symbol: fields.symbol,
                    income_type: fields.income_type,
                    amount: fields.amount,
                    payment_date: fields.date,
                    quantity: fields.quantity,
                    tax_withheld: fields.tax_withheld,
                    notes: fields.notes,
                })
                .await?,
        )?,
        IncomesCommand::Delete { id } => {
            let deleted = service.delete_income(&id).await?;
            json!({ "deleted": deleted.id })
        }
    };
    Ok(output)
}
