mod model;
mod repository;

pub use model::IncomeDB;
pub use repository::IncomeRepository;
