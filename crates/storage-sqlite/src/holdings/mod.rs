mod model;
mod repository;

pub use model::{HoldingDB, HoldingProfileDB};
pub use repository::HoldingRepository;
