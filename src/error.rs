use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("failed to parse viewer config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("invalid viewer config field `{field}`: {reason}")]
    InvalidThreshold { field: &'static str, reason: String },
}
