use thiserror::Error;

#[derive(Error, Debug)]
pub enum HoldingError {
    #[error("Holding not found: {0}")]
    NotFound(String),
}
