use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// What happened to one holding during a price refresh.
#[derive(Debug, Clone, PartialEq)]
pub enum PriceFetchOutcome {
    Updated { symbol: String, price: Decimal },
    /// The source answered without a usable price.
    NotFound { symbol: String },
    /// The call or the save failed.
    Failed { symbol: String, reason: String },
}

impl PriceFetchOutcome {
    pub fn symbol(&self) -> &str {
        match self {
            PriceFetchOutcome::Updated { symbol, .. }
            | PriceFetchOutcome::NotFound { symbol }
            | PriceFetchOutcome::Failed { symbol, .. } => symbol,
        }
    }

    /// Report line for an unsuccessful refresh.
    pub fn error_message(&self) -> Option<String> {
        match self {
            PriceFetchOutcome::Updated { .. } => None,
            PriceFetchOutcome::NotFound { symbol } => {
                Some(format!("Failed to fetch price for {}", symbol))
            }
            PriceFetchOutcome::Failed { symbol, reason } => {
                Some(format!("Error fetching {}: {}", symbol, reason))
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRefreshReport {
    pub succeeded: usize,
    pub total: usize,
    pub errors: Vec<String>,
}

impl PriceRefreshReport {
    pub fn from_outcomes(outcomes: &[PriceFetchOutcome]) -> Self {
        PriceRefreshReport {
            succeeded: outcomes
                .iter()
                .filter(|o| matches!(o, PriceFetchOutcome::Updated { .. }))
                .count(),
            total: outcomes.len(),
            errors: outcomes.iter().filter_map(|o| o.error_message()).collect(),
        }
    }
}
