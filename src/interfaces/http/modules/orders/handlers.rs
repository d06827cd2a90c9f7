//! Order API handlers

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use super::dto::{CreateOrderRequest, OrderDto};
use crate::application::OrderService;
use crate::interfaces::http::common::{
    domain_error, AffectedRowsResponse, ApiError, ApiPath, ApiResponse, CreatedResponse,
    ValidatedJson,
};

#[derive(Clone)]
pub struct OrderHandlerState {
    pub orders: Arc<OrderService>,
}

#[utoipa::path(
    get,
    path = "/pedidos",
    tag = "Orders",
    responses(
        (status = 200, description = "All orders, any status", body = Vec<OrderDto>)
    )
)]
pub async fn list_orders(
    State(state): State<OrderHandlerState>,
) -> Result<Json<Vec<OrderDto>>, ApiError> {
    let orders = state.orders.list_orders().await.map_err(domain_error)?;
    Ok(Json(orders.into_iter().map(OrderDto::from).collect()))
}

#[utoipa::path(
    post,
    path = "/pedidos",
    tag = "Orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order placed", body = CreatedResponse),
        (status = 422, description = "Validation error", body = ApiResponse<String>)
    )
)]
pub async fn create_order(
    State(state): State<OrderHandlerState>,
    ValidatedJson(request): ValidatedJson<CreateOrderRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let order = request.into_new_order().map_err(domain_error)?;
    let id = state.orders.create_order(order).await.map_err(domain_error)?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// Mark a pending order as delivered. Any request body is ignored.
#[utoipa::path(
    put,
    path = "/pedidos/{id}",
    tag = "Orders",
    params(("id" = i32, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order delivered", body = AffectedRowsResponse),
        (status = 400, description = "Id is not a number", body = ApiResponse<String>),
        (status = 404, description = "Unknown order", body = ApiResponse<String>),
        (status = 409, description = "Order is not pending", body = ApiResponse<String>)
    )
)]
pub async fn deliver_order(
    State(state): State<OrderHandlerState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<AffectedRowsResponse>, ApiError> {
    state.orders.deliver_order(id).await.map_err(domain_error)?;
    Ok(Json(AffectedRowsResponse::new("Pedido Entregado", 1)))
}

/// Cancel (delete) a pending order
#[utoipa::path(
    delete,
    path = "/pedidos/{id}",
    tag = "Orders",
    params(("id" = i32, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order removed", body = AffectedRowsResponse),
        (status = 400, description = "Id is not a number", body = ApiResponse<String>),
        (status = 404, description = "Unknown order", body = ApiResponse<String>),
        (status = 409, description = "Order already delivered", body = ApiResponse<String>)
    )
)]
pub async fn cancel_order(
    State(state): State<OrderHandlerState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<AffectedRowsResponse>, ApiError> {
    state.orders.cancel_order(id).await.map_err(domain_error)?;
    Ok(Json(AffectedRowsResponse::new("Pedido eliminado", 1)))
}

#[cfg(test)]
mod tests {
    use crate::interfaces::http::test_support::{send, test_router};
    use axum::http::StatusCode;
    use axum::Router;
    use serde_json::{json, Value};

    async fn place_order(app: &Router) -> i64 {
        let (status, body) = send(
            app,
            "POST",
            "/pedidos",
            Some(json!({
                "user_id": 1,
                "items": "Mancuernas x 2",
                "status": "Pendiente",
                "total": 59.98,
                "address": "Calle Falsa 123",
                "date": "2024-05-01T12:00:00Z"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        body["id"].as_i64().unwrap()
    }

    #[tokio::test]
    async fn placed_order_is_listed_as_pending() {
        let app = test_router().await;
        place_order(&app).await;

        let (_, body) = send(&app, "GET", "/pedidos", None).await;
        let order = &body[0];
        assert_eq!(order["status"], "Pendiente");
        assert_eq!(order["total"], 59.98);
        assert_eq!(order["items"], "Mancuernas x 2");
        assert_eq!(order["date"], "2024-05-01T12:00:00Z");
    }

    #[tokio::test]
    async fn deliver_then_deliver_again_is_409() {
        let app = test_router().await;
        let id = place_order(&app).await;
        let uri = format!("/pedidos/{}", id);

        let (status, body) = send(&app, "PUT", &uri, Some(json!({"ignored": true}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "Pedido Entregado", "affectedRows": 1}));

        let (status, _) = send(&app, "PUT", &uri, None).await;
        assert_eq!(status, StatusCode::CONFLICT);

        let (status, _) = send(&app, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn cancel_removes_pending_order() {
        let app = test_router().await;
        let id = place_order(&app).await;

        let (status, body) = send(&app, "DELETE", &format!("/pedidos/{}", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Pedido eliminado");

        let (_, body) = send(&app, "GET", "/pedidos", None).await;
        assert_eq!(body, Value::Array(vec![]));
    }

    #[tokio::test]
    async fn unknown_order_is_404() {
        let app = test_router().await;
        let (status, _) = send(&app, "PUT", "/pedidos/42", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = send(&app, "DELETE", "/pedidos/42", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn non_numeric_id_is_400_with_error_envelope() {
        let app = test_router().await;
        for method in ["PUT", "DELETE"] {
            let (status, body) = send(&app, method, "/pedidos/abc", None).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["success"], false);
            assert!(body["data"].is_null());
            assert!(body["error"].as_str().unwrap().contains("abc"));
        }
    }

    #[tokio::test]
    async fn delivered_initial_status_is_422() {
        let app = test_router().await;
        let (status, _) = send(
            &app,
            "POST",
            "/pedidos",
            Some(json!({
                "user_id": 1,
                "items": "Soga x 1",
                "status": "Entregado",
                "total": 4.99,
                "address": "Calle 1"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }
}
