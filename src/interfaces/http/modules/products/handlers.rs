//! Product API handlers

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use super::dto::{CreateProductRequest, ProductDto};
use crate::application::CatalogService;
use crate::interfaces::http::common::{
    domain_error, AffectedRowsResponse, ApiError, ApiPath, ApiResponse, CreatedResponse,
    ValidatedJson,
};

#[derive(Clone)]
pub struct ProductHandlerState {
    pub catalog: Arc<CatalogService>,
}

#[utoipa::path(
    get,
    path = "/productos",
    tag = "Products",
    responses(
        (status = 200, description = "Whole catalog", body = Vec<ProductDto>),
        (status = 500, description = "Database error", body = ApiResponse<String>)
    )
)]
pub async fn list_products(
    State(state): State<ProductHandlerState>,
) -> Result<Json<Vec<ProductDto>>, ApiError> {
    let products = state.catalog.list_products().await.map_err(domain_error)?;
    Ok(Json(products.into_iter().map(ProductDto::from).collect()))
}

#[utoipa::path(
    post,
    path = "/productos",
    tag = "Products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = CreatedResponse),
        (status = 400, description = "Malformed body", body = ApiResponse<String>),
        (status = 409, description = "Code already exists", body = ApiResponse<String>),
        (status = 422, description = "Validation error", body = ApiResponse<String>)
    )
)]
pub async fn create_product(
    State(state): State<ProductHandlerState>,
    ValidatedJson(request): ValidatedJson<CreateProductRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let id = state
        .catalog
        .create_product(request.into())
        .await
        .map_err(domain_error)?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

#[utoipa::path(
    delete,
    path = "/productos/{code}",
    tag = "Products",
    params(("code" = String, Path, description = "Product code")),
    responses(
        (status = 200, description = "Deleted rows (0 for an unknown code)", body = AffectedRowsResponse)
    )
)]
pub async fn delete_product(
    State(state): State<ProductHandlerState>,
    ApiPath(code): ApiPath<String>,
) -> Result<Json<AffectedRowsResponse>, ApiError> {
    let deleted = state
        .catalog
        .delete_product(&code)
        .await
        .map_err(domain_error)?;
    Ok(Json(AffectedRowsResponse::new("Producto eliminado", deleted)))
}
