//! Wire contract between the storefront client and the REST backend

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::error::{ClientError, ClientResult};
use crate::interfaces::http::common::{AffectedRowsResponse, ApiResponse, CreatedResponse};
use crate::interfaces::http::modules::orders::{CreateOrderRequest, OrderDto};
use crate::interfaces::http::modules::products::{CreateProductRequest, ProductDto};
use crate::interfaces::http::modules::users::{CreateUserRequest, UserDto};

/// One method per backend endpoint.
#[async_trait]
pub trait StorefrontApi: Send + Sync {
    async fn list_products(&self) -> ClientResult<Vec<ProductDto>>;
    async fn create_product(&self, product: &CreateProductRequest) -> ClientResult<CreatedResponse>;
    async fn delete_product(&self, code: &str) -> ClientResult<AffectedRowsResponse>;

    async fn list_users(&self) -> ClientResult<Vec<UserDto>>;
    async fn create_user(&self, user: &CreateUserRequest) -> ClientResult<CreatedResponse>;

    async fn list_orders(&self) -> ClientResult<Vec<OrderDto>>;
    async fn create_order(&self, order: &CreateOrderRequest) -> ClientResult<CreatedResponse>;
    async fn deliver_order(&self, id: i32) -> ClientResult<AffectedRowsResponse>;
    async fn cancel_order(&self, id: i32) -> ClientResult<AffectedRowsResponse>;
}

/// Decode a response body: 2xx as `T`, anything else as `ClientError::Api`
/// with the message from the error envelope when there is one.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &[u8]) -> ClientResult<T> {
    if (200..300).contains(&status) {
        return Ok(serde_json::from_slice(body)?);
    }
    let message = match serde_json::from_slice::<ApiResponse<serde_json::Value>>(body) {
        Ok(ApiResponse { error: Some(msg), .. }) => msg,
        _ => String::from_utf8_lossy(body).trim().to_string(),
    };
    Err(ClientError::Api { status, message })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_body_is_decoded() {
        let created: CreatedResponse = decode_response(201, br#"{"id":7}"#).unwrap();
        assert_eq!(created.id, 7);
    }

    #[test]
    fn envelope_message_is_surfaced() {
        let err = decode_response::<CreatedResponse>(
            409,
            br#"{"success":false,"data":null,"error":"Already exists: PROD001"}"#,
        )
        .unwrap_err();
        assert!(err.is_conflict());
        assert!(err.to_string().contains("Already exists: PROD001"));
    }

    #[test]
    fn plain_text_errors_are_kept() {
        let err = decode_response::<CreatedResponse>(502, b"Bad Gateway").unwrap_err();
        assert!(matches!(err, ClientError::Api { status: 502, ref message } if message == "Bad Gateway"));
    }
}
