use thiserror::Error;

#[derive(Error, Debug)]
pub enum IncomeError {
    #[error("Income not found: {0}")]
    NotFound(String),
}
