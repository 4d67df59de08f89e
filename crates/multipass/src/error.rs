use thiserror::Error;

#[derive(Debug, Error)]
pub enum MultipassError {
    #[error("customer data must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("email is required")]
    EmailRequired,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Signing failed: {0}")]
    SigningFailed(String),

    #[error("Random number generation failed: {0}")]
    RngFailed(String),
}
