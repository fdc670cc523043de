mod model;
mod repository;

pub use model::TransactionDB;
pub use repository::TransactionRepository;

pub(crate) use repository::load_ledger;
