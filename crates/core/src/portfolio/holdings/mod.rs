//! Holdings derived from the transaction ledger.

mod holdings_calculator;
mod holdings_errors;
mod holdings_model;
mod holdings_service;
mod holdings_traits;



pub use holdings_calculator::{holding_from_position, project_holding, rebuild_holding};
pub use holdings_errors::HoldingError;
pub use holdings_model::{
    Holding, HoldingProfileChange, HoldingProfileUpdate, HoldingProjection,
};
pub use holdings_service::HoldingsService;
pub use holdings_traits::{HoldingRepositoryTrait, HoldingsServiceTrait};
