use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard response wrapper used by every platform endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: Option<bool>,
    pub data: Option<T>,
    pub message: Option<String>,
}

/// Error body shape the backend uses for 4xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: Option<String>,
    pub message: Option<String>,
    pub status: Option<i32>,
}

/// Request body for wallet-to-wallet transfers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferRequest {
    #[serde(rename = "fromWallet")]
    pub from_wallet: String,
    #[serde(rename = "toWallet")]
    pub to_wallet: String,
    pub amount: f64,
}

/// Request body for plan purchases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRequest {
    #[serde(rename = "productId")]
    pub product_id: String,
    #[serde(rename = "investmentAmount")]
    pub investment_amount: f64,
}

/// Request body for the daily-profit bulk upload. The `file` field carries
/// the base64 of the original workbook bytes, not of the parsed rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadRequest {
    pub file: String,
}

/// Error type for platform API operations.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    #[error("Forbidden: {0}")]
    Forbidden(String),
    #[error("Not Found: {0}")]
    NotFound(String),
    #[error("Server Error ({0}): {1}")]
    ServerError(u16, String),
    #[error("HTTP Error ({0}): {1}")]
    HttpError(u16, String),
    #[error("Request Error: {0}")]
    RequestError(String),
    #[error("Deserialization Error: {0}")]
    DeserializationError(String),
    #[error("{0}")]
    Backend(String),
}

impl ApiError {
    /// The human-facing message for notification dialogs: the backend's own
    /// message where one was extracted, a generic fallback otherwise.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::BadRequest(msg) | ApiError::Backend(msg) if !msg.is_empty() => msg.clone(),
            ApiError::Unauthorized(_) => "Session expired. Please log in again.".to_string(),
            ApiError::RequestError(_) => "Network error. Please try again.".to_string(),
            _ => "Request failed. Please try again.".to_string(),
        }
    }
}
