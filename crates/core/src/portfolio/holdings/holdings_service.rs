use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info};

use super::holdings_errors::HoldingError;
use super::holdings_model::{Holding, HoldingProfileUpdate};
use super::holdings_traits::{HoldingRepositoryTrait, HoldingsServiceTrait};
use crate::transactions::normalize_code;
use crate::utils::Clock;
use crate::Result;

pub struct HoldingsService {
    holding_repository: Arc<dyn HoldingRepositoryTrait>,
    clock: Arc<dyn Clock>,
}

impl HoldingsService {
    pub fn new(holding_repository: Arc<dyn HoldingRepositoryTrait>, clock: Arc<dyn Clock>) -> Self {
        Self {
            holding_repository,
            clock,
        }
    }
}

#[async_trait]
impl HoldingsServiceTrait for HoldingsService {
    fn get_holdings(&self) -> Result<Vec<Holding>> {
        self.holding_repository.get_holdings()
    }

    fn get_holding(&self, symbol: &str) -> Result<Holding> {
        let symbol = normalize_code(symbol);
        self.holding_repository
            .get_holding(&symbol)?
            .ok_or_else(|| HoldingError::NotFound(symbol).into())
    }

    async fn recompute_holding(&self, symbol: &str) -> Result<Option<Holding>> {
        debug!("Recomputing holding {}", symbol);
        let holding = self
            .holding_repository
            .sync_holding(symbol, self.clock.now())
            .await?;

        match &holding {
            Some(saved) => info!(
                "Holding {} now {} shares at cost {}",
                saved.symbol, saved.quantity, saved.cost_basis
            ),
            None => info!("No open position in {}", symbol),
        }
        Ok(holding)
    }

    async fn update_holding_profile(
        &self,
        symbol: &str,
        profile: HoldingProfileUpdate,
    ) -> Result<Holding> {
        let symbol = normalize_code(symbol);
        self.holding_repository
            .update_holding_profile(&symbol, profile.into_change(), self.clock.now())
            .await?
            .ok_or_else(|| HoldingError::NotFound(symbol).into())
    }
}
