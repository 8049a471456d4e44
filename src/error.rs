use thiserror::Error;

/// ecobrand 統一エラー型
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Record store error: {message} (status: {status})")]
    StoreApi { status: u16, message: String },

    #[error("Brand not found: {0}")]
    BrandNotFound(String),

    #[error("Invalid brand: {0}")]
    Validation(String),

    #[error("Brand '{id}' belongs to another user")]
    NotOwner { id: String },

    #[error("{0}")]
    Auth(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

impl CatalogError {
    /// リトライ可能なエラーかどうか
    pub fn is_retryable(&self) -> bool {
        match self {
            CatalogError::Network(e) => !e.is_builder() && !e.is_decode(),
            CatalogError::StoreApi { status, .. } => {
                // 5xx と 429 はリトライ可能
                *status == 429 || (*status >= 500 && *status < 600)
            }
            _ => false,
        }
    }
}
