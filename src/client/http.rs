//! `StorefrontApi` over HTTP with `reqwest`

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::api::{decode_response, StorefrontApi};
use super::error::{ClientError, ClientResult};
use crate::interfaces::http::common::{AffectedRowsResponse, CreatedResponse};
use crate::interfaces::http::modules::orders::{CreateOrderRequest, OrderDto};
use crate::interfaces::http::modules::products::{CreateProductRequest, ProductDto};
use crate::interfaces::http::modules::users::{CreateUserRequest, UserDto};

pub const DEFAULT_API_URL: &str = "http://localhost:3000";

pub struct HttpApi {
    client: Client,
    base: Url,
}

impl HttpApi {
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let base = Url::parse(base_url).map_err(|_| ClientError::InvalidBaseUrl(base_url.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl(base_url.to_string()));
        }
        Ok(Self {
            client: Client::new(),
            base,
        })
    }

    /// `base` + path segments, each segment percent-encoded.
    fn url(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidBaseUrl(self.base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> ClientResult<T> {
        let response = request.send().await?;
        let status = response.status().as_u16();
        debug!(url = %response.url(), status, "API response");
        let body = response.bytes().await?;
        decode_response(status, &body)
    }
}

#[async_trait]
impl StorefrontApi for HttpApi {
    async fn list_products(&self) -> ClientResult<Vec<ProductDto>> {
        self.execute(self.client.get(self.url(&["productos"])?)).await
    }

    async fn create_product(&self, product: &CreateProductRequest) -> ClientResult<CreatedResponse> {
        self.execute(self.client.post(self.url(&["productos"])?).json(product))
            .await
    }

    async fn delete_product(&self, code: &str) -> ClientResult<AffectedRowsResponse> {
        self.execute(self.client.delete(self.url(&["productos", code])?))
            .await
    }

    async fn list_users(&self) -> ClientResult<Vec<UserDto>> {
        self.execute(self.client.get(self.url(&["usuarios"])?)).await
    }

    async fn create_user(&self, user: &CreateUserRequest) -> ClientResult<CreatedResponse> {
        self.execute(self.client.post(self.url(&["usuarios"])?).json(user))
            .await
    }

    async fn list_orders(&self) -> ClientResult<Vec<OrderDto>> {
        self.execute(self.client.get(self.url(&["pedidos"])?)).await
    }

    async fn create_order(&self, order: &CreateOrderRequest) -> ClientResult<CreatedResponse> {
        self.execute(self.client.post(self.url(&["pedidos"])?).json(order))
            .await
    }

    async fn deliver_order(&self, id: i32) -> ClientResult<AffectedRowsResponse> {
        let id = id.to_string();
        self.execute(self.client.put(self.url(&["pedidos", &id])?)).await
    }

    async fn cancel_order(&self, id: i32) -> ClientResult<AffectedRowsResponse> {
        let id = id.to_string();
        self.execute(self.client.delete(self.url(&["pedidos", &id])?))
            .await
    }
}
