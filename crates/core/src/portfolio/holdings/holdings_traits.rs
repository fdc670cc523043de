use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::holdings_model::{Holding, HoldingProfileChange, HoldingProfileUpdate};
use crate::Result;

/// Storage for derived holdings, keyed by symbol.
///
/// Every write reads and changes the stored row in one step, so a refresh,
/// a recompute and a classification edit never overwrite each other's columns.
#[async_trait]
pub trait HoldingRepositoryTrait: Send + Sync {
    /// All holdings ordered by symbol.
    fn get_holdings(&self) -> Result<Vec<Holding>>;
    fn get_holding(&self, symbol: &str) -> Result<Option<Holding>>;
    /// Replays the symbol's ledger with [`rebuild_holding`](super::rebuild_holding)
    /// and stores or removes its holding. Returns what is stored afterwards.
    async fn sync_holding(&self, symbol: &str, at: DateTime<Utc>) -> Result<Option<Holding>>;
    /// Writes only the classification columns.
    /// Returns `None` when the holding does not exist.
    async fn update_holding_profile(
        &self,
        symbol: &str,
        change: HoldingProfileChange,
        at: DateTime<Utc>,
    ) -> Result<Option<Holding>>;
    /// Applies [`Holding::with_price`] to the stored row in one step.
    /// Returns `None` when the holding no longer exists.
    async fn update_holding_price(
        &self,
        symbol: &str,
        price: Decimal,
        at: DateTime<Utc>,
    ) -> Result<Option<Holding>>;
}

#[async_trait]
pub trait HoldingsServiceTrait: Send + Sync {
    fn get_holdings(&self) -> Result<Vec<Holding>>;
    fn get_holding(&self, symbol: &str) -> Result<Holding>;
    /// Rebuilds the symbol's holding from its full ledger.
    async fn recompute_holding(&self, symbol: &str) -> Result<Option<Holding>>;
    async fn update_holding_profile(
        &self,
        symbol: &str,
        profile: HoldingProfileUpdate,
    ) -> Result<Holding>;
}
