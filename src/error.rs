#[derive(Debug, thiserror::Error)]
pub enum HubError {
    #[error("Unknown post onboarding action id: {0}")]
    UnknownActionId(String),

    #[error("Unknown device model: {0}")]
    UnknownDeviceModel(String),

    #[error("Invalid amount '{0}': {1}")]
    InvalidAmount(String, rust_decimal::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type HubResult<T> = Result<T, HubError>;
