use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Location cannot be empty")]
    EmptyLocation,

    #[error("No market data available")]
    NoMarketData,

    #[error("Could not find location")]
    LocationNotFound,

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Internal server error")]
    InternalServerError,
}
