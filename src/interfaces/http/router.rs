//! API router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    middleware,
    routing::{delete, get},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{AccountService, CatalogService, OrderService};
use crate::domain::RepositoryProvider;

use super::common::{AffectedRowsResponse, ApiResponse, CreatedResponse};
use super::modules::health::{self, HealthState};
use super::modules::metrics::{http_metrics_middleware, prometheus_metrics, MetricsState};
use super::modules::orders::{self, OrderHandlerState};
use super::modules::products::{self, ProductHandlerState};
use super::modules::request_id::request_id_middleware;
use super::modules::users::{self, UserHandlerState};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        products::list_products,
        products::create_product,
        products::delete_product,
        users::list_users,
        users::create_user,
        orders::list_orders,
        orders::create_order,
        orders::deliver_order,
        orders::cancel_order,
    ),
    components(schemas(
        ApiResponse<String>,
        CreatedResponse,
        AffectedRowsResponse,
        health::HealthResponse,
        products::ProductDto,
        products::CreateProductRequest,
        users::UserDto,
        users::CreateUserRequest,
        orders::OrderDto,
        orders::CreateOrderRequest,
    )),
    tags(
        (name = "Health", description = "Liveness and database reachability"),
        (name = "Products", description = "Catalog listing and product management"),
        (name = "Users", description = "Accounts used by signup and client-side login"),
        (name = "Orders", description = "Checkout orders and their delivery lifecycle"),
    ),
    info(
        title = "Tienda Online API",
        version = "1.0.0",
        description = "REST API of the storefront: products, users and orders",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Build the full HTTP surface.
///
/// `/metrics` is only mounted when a Prometheus handle is supplied.
pub fn create_api_router(
    repos: Arc<dyn RepositoryProvider>,
    prometheus: Option<PrometheusHandle>,
) -> Router {
    let product_routes = Router::new()
        .route(
            "/",
            get(products::list_products).post(products::create_product),
        )
        .route("/{code}", delete(products::delete_product))
        .with_state(ProductHandlerState {
            catalog: Arc::new(CatalogService::new(repos.clone())),
        });

    let user_routes = Router::new()
        .route("/", get(users::list_users).post(users::create_user))
        .with_state(UserHandlerState {
            accounts: Arc::new(AccountService::new(repos.clone())),
        });

    let order_routes = Router::new()
        .route("/", get(orders::list_orders).post(orders::create_order))
        .route(
            "/{id}",
            axum::routing::put(orders::deliver_order).delete(orders::cancel_order),
        )
        .with_state(OrderHandlerState {
            orders: Arc::new(OrderService::new(repos.clone())),
        });

    let health_routes = Router::new()
        .route("/", get(health::health_check))
        .with_state(HealthState {
            repos,
            started_at: Arc::new(Instant::now()),
        });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .nest("/health", health_routes)
        .nest("/productos", product_routes)
        .nest("/usuarios", user_routes)
        .nest("/pedidos", order_routes);

    if let Some(handle) = prometheus {
        router = router.route(
            "/metrics",
            get(prometheus_metrics).with_state(MetricsState { handle }),
        );
    }

    router
        .layer(middleware::from_fn(http_metrics_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
