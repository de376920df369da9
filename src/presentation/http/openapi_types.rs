//! Response bodies that are not plain DTOs.
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

/// Returned by health checks.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct StatusResponse {
    /// "ok" when healthy.
    pub status: String,
}

/// Acknowledgement returned by write endpoints.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TransactionResponse {
    /// Mirrors the HTTP status of the response.
    pub status_code: u16,
    /// Short outcome message.
    pub transaction: String,
}

impl TransactionResponse {
    pub fn new(status: StatusCode, transaction: impl Into<String>) -> Self {
        Self {
            status_code: status.as_u16(),
            transaction: transaction.into(),
        }
    }
}
