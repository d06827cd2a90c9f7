//! Shared HTTP response types and error mapping

pub mod api_path;
pub mod validated_json;

pub use api_path::ApiPath;
pub use validated_json::ValidatedJson;

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::DomainError;

/// Error envelope: `{"success": false, "data": null, "error": "..."}`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Rejection returned by every resource handler
pub type ApiError = (StatusCode, Json<ApiResponse<()>>);

/// Id of a freshly inserted row
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    pub id: i32,
}

/// Outcome of an update or delete
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AffectedRowsResponse {
    pub message: String,
    #[serde(rename = "affectedRows")]
    pub affected_rows: u64,
}

impl AffectedRowsResponse {
    pub fn new(message: impl Into<String>, affected_rows: u64) -> Self {
        Self {
            message: message.into(),
            affected_rows,
        }
    }
}

/// Map a domain error onto its HTTP status and the error envelope.
pub fn domain_error(err: DomainError) -> ApiError {
    let status = match &err {
        DomainError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Conflict(_) | DomainError::InvalidTransition { .. } => StatusCode::CONFLICT,
        DomainError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status.is_server_error() {
        tracing::error!(error = %err, "Request failed");
    } else {
        tracing::debug!(error = %err, status = status.as_u16(), "Request rejected");
    }
    (status, Json(ApiResponse::error(err.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_envelope_has_null_data() {
        let json = serde_json::to_value(ApiResponse::<()>::error("boom")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"success": false, "data": null, "error": "boom"})
        );
    }

    #[test]
    fn domain_errors_map_to_statuses() {
        let cases = [
            (DomainError::Validation("x".into()), StatusCode::UNPROCESSABLE_ENTITY),
            (
                DomainError::NotFound { entity: "Order", field: "id", value: "9".into() },
                StatusCode::NOT_FOUND,
            ),
            (DomainError::Conflict("PROD001".into()), StatusCode::CONFLICT),
            (
                DomainError::InvalidTransition { id: 1, from: "Entregado", to: "Entregado" },
                StatusCode::CONFLICT,
            ),
            (DomainError::Storage("locked".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, expected) in cases {
            assert_eq!(domain_error(err).0, expected);
        }
    }

    #[test]
    fn affected_rows_uses_camel_case_key() {
        let json = serde_json::to_value(AffectedRowsResponse::new("Pedido eliminado", 1)).unwrap();
        assert_eq!(json["affectedRows"], 1);
        assert_eq!(json["message"], "Pedido eliminado");
    }
}
