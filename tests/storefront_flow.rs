//! Storefront flows end to end: the client `Storefront` talking to the real
//! axum router and an in-memory SQLite database, without opening a socket.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::Request;
use axum::Router;
use rust_decimal::Decimal;
use sea_orm_migration::MigratorTrait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tower::ServiceExt;

use tienda::client::{
    decode_response, ClientError, ClientResult, MemoryStore, Storefront, StorefrontApi,
};
use tienda::infrastructure::database::migrator::Migrator;
use tienda::interfaces::http::common::{AffectedRowsResponse, CreatedResponse};
use tienda::interfaces::http::modules::orders::{CreateOrderRequest, OrderDto};
use tienda::interfaces::http::modules::products::{CreateProductRequest, ProductDto};
use tienda::interfaces::http::modules::users::{CreateUserRequest, UserDto};
use tienda::{create_api_router, init_database, DatabaseConfig, SeaOrmRepositoryProvider};

/// `StorefrontApi` that hands requests straight to the router
#[derive(Clone)]
struct RouterApi {
    router: Router,
}

impl RouterApi {
    async fn new() -> Self {
        let db = init_database(&DatabaseConfig::in_memory()).await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        let repos = Arc::new(SeaOrmRepositoryProvider::new(db));
        Self {
            router: create_api_router(repos, None),
        }
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        uri: &str,
        body: Option<&(impl Serialize + Sync)>,
    ) -> ClientResult<T> {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(body)?))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status().as_u16();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        decode_response(status, &bytes)
    }
}

const NO_BODY: Option<&()> = None;

#[async_trait]
impl StorefrontApi for RouterApi {
    async fn list_products(&self) -> ClientResult<Vec<ProductDto>> {
        self.call("GET", "/productos", NO_BODY).await
    }

    async fn create_product(&self, product: &CreateProductRequest) -> ClientResult<CreatedResponse> {
        self.call("POST", "/productos", Some(product)).await
    }

    async fn delete_product(&self, code: &str) -> ClientResult<AffectedRowsResponse> {
        self.call("DELETE", &format!("/productos/{}", code), NO_BODY).await
    }

    async fn list_users(&self) -> ClientResult<Vec<UserDto>> {
        self.call("GET", "/usuarios", NO_BODY).await
    }

    async fn create_user(&self, user: &CreateUserRequest) -> ClientResult<CreatedResponse> {
        self.call("POST", "/usuarios", Some(user)).await
    }

    async fn list_orders(&self) -> ClientResult<Vec<OrderDto>> {
        self.call("GET", "/pedidos", NO_BODY).await
    }

    async fn create_order(&self, order: &CreateOrderRequest) -> ClientResult<CreatedResponse> {
        self.call("POST", "/pedidos", Some(order)).await
    }

    async fn deliver_order(&self, id: i32) -> ClientResult<AffectedRowsResponse> {
        self.call("PUT", &format!("/pedidos/{}", id), NO_BODY).await
    }

    async fn cancel_order(&self, id: i32) -> ClientResult<AffectedRowsResponse> {
        self.call("DELETE", &format!("/pedidos/{}", id), NO_BODY).await
    }
}

async fn shop() -> Storefront<RouterApi, MemoryStore> {
    let shop = Storefront::new(RouterApi::new().await, MemoryStore::new());
    shop.bootstrap().await.unwrap();
    shop
}

fn api_status(err: &ClientError) -> Option<u16> {
    match err {
        ClientError::Api { status, .. } => Some(*status),
        _ => None,
    }
}

#[tokio::test]
async fn bootstrap_seeds_catalog_and_admin_once() {
    let shop = Storefront::new(RouterApi::new().await, MemoryStore::new());
    let report = shop.bootstrap().await.unwrap();
    assert_eq!(report.products_created, 10);
    assert!(report.admin_created);

    let again = shop.bootstrap().await.unwrap();
    assert_eq!(again.products_created, 0);
    assert!(!again.admin_created);

    let products = shop.products().await.unwrap();
    assert_eq!(products.len(), 10);
    assert_eq!(products[0].code, "PROD001");
    assert_eq!(products[0].price, Decimal::new(2999, 2));

    let admin = shop.login("admin", "admin123").await.unwrap();
    assert!(admin.is_admin);
}

#[tokio::test]
async fn admin_adds_and_removes_products() {
    let shop = shop().await;
    shop.login("admin", "admin123").await.unwrap();

    shop.add_product("PROD011", "Guantes", Decimal::new(799, 2))
        .await
        .unwrap();
    assert!(shop
        .products()
        .await
        .unwrap()
        .iter()
        .any(|p| p.code == "PROD011" && p.price == Decimal::new(799, 2)));

    let err = shop
        .add_product("PROD011", "Guantes", Decimal::ONE)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::DuplicateCode(_)));

    // The server enforces uniqueness even when the client check is skipped
    let err = shop
        .api()
        .create_product(&CreateProductRequest {
            code: "PROD011".into(),
            description: "Otra".into(),
            price: Decimal::ONE,
        })
        .await
        .unwrap_err();
    assert_eq!(api_status(&err), Some(409));

    assert_eq!(shop.remove_product("PROD011").await.unwrap(), 1);
    let codes: Vec<_> = shop
        .products()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.code)
        .collect();
    assert_eq!(codes.len(), 10);
    assert!(!codes.iter().any(|c| c == "PROD011"));
}

#[tokio::test]
async fn signup_login_and_duplicate_username() {
    let shop = shop().await;
    shop.signup("ana", "secreto").await.unwrap();

    let err = shop.signup("ana", "otro").await.unwrap_err();
    assert!(matches!(err, ClientError::UsernameTaken(_)));

    let user = shop.login("ana", "secreto").await.unwrap();
    assert!(!user.is_admin);
    assert!(matches!(
        shop.login("ana", "mal").await.unwrap_err(),
        ClientError::InvalidCredentials
    ));
}

#[tokio::test]
async fn cart_checkout_and_order_lifecycle() {
    let shop = shop().await;
    shop.signup("ana", "secreto").await.unwrap();
    let ana = shop.login("ana", "secreto").await.unwrap();

    shop.add_to_cart("PROD001", 1).await.unwrap();
    let cart = shop.add_to_cart("PROD001", 2).await.unwrap();
    assert_eq!(cart.lines()[0].quantity, 3);
    shop.add_to_cart("PROD004", 1).await.unwrap();
    let cart = shop.update_quantity("PROD004", 0).unwrap();
    assert_eq!(cart.lines().len(), 1);
    shop.add_to_cart("PROD007", 2).await.unwrap();

    assert!(matches!(
        shop.checkout("   ").await.unwrap_err(),
        ClientError::EmptyAddress
    ));
    let first = shop.checkout("Calle Falsa 123").await.unwrap();
    assert!(shop.cart().unwrap().is_empty());

    shop.add_to_cart("PROD010", 1).await.unwrap();
    let second = shop.checkout("Av. Siempre Viva 742").await.unwrap();

    shop.login("admin", "admin123").await.unwrap();
    let lists = shop.orders().await.unwrap();
    assert_eq!(lists.pending.len(), 2);
    let placed = lists.pending.iter().find(|o| o.id == first).unwrap();
    assert_eq!(placed.user_id, ana.id);
    assert_eq!(placed.items, "Mancuernas x 3, Banda elastica x 2");
    // 3 x 29.99 + 2 x 2.99
    assert_eq!(placed.total, Decimal::new(9595, 2));
    assert_eq!(placed.status, "Pendiente");

    let lists = shop.deliver_order(first).await.unwrap();
    assert_eq!(lists.pending.iter().map(|o| o.id).collect::<Vec<_>>(), vec![second]);
    assert_eq!(lists.delivered.iter().map(|o| o.id).collect::<Vec<_>>(), vec![first]);

    let err = shop.deliver_order(first).await.unwrap_err();
    assert_eq!(api_status(&err), Some(409));
    let err = shop.cancel_order(first).await.unwrap_err();
    assert_eq!(api_status(&err), Some(409));

    let lists = shop.cancel_order(second).await.unwrap();
    assert!(lists.pending.is_empty());
    assert_eq!(lists.delivered.len(), 1);

    let err = shop.deliver_order(9999).await.unwrap_err();
    assert_eq!(api_status(&err), Some(404));
    let err = shop.cancel_order(9999).await.unwrap_err();
    assert_eq!(api_status(&err), Some(404));
}

#[tokio::test]
async fn checkout_without_session_sends_nothing() {
    let shop = shop().await;
    let err = shop.checkout("Calle 1").await.unwrap_err();
    assert!(matches!(err, ClientError::NotLoggedIn));

    shop.login("admin", "admin123").await.unwrap();
    assert!(shop.orders().await.unwrap().pending.is_empty());
}
