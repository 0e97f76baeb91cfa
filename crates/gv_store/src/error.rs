use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Backend failure — propagated to the caller, never retried here.
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Serialisation error: {0}")]
    Serialisation(#[from] serde_json::Error),
}
