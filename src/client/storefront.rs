//! Storefront session: catalog browsing, signup/login, cart, checkout and
//! the admin views, on top of a [`StorefrontApi`] and a [`StateStore`].
//!
//! Local checks (duplicate code or username, credentials, address, session,
//! cart) run before any request is sent.

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};

use super::api::StorefrontApi;
use super::cart::Cart;
use super::error::{ClientError, ClientResult};
use super::state::{ClientState, StateStore};
use crate::domain::seed::{default_admin, seed_products};
use crate::domain::OrderStatus;
use crate::interfaces::http::modules::orders::{CreateOrderRequest, OrderDto};
use crate::interfaces::http::modules::products::{CreateProductRequest, ProductDto};
use crate::interfaces::http::modules::users::{CreateUserRequest, UserDto};

/// Records created by [`Storefront::bootstrap`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BootstrapReport {
    pub products_created: usize,
    pub admin_created: bool,
}

/// Orders split the way the admin page shows them
#[derive(Debug, Clone, Default)]
pub struct OrderLists {
    pub pending: Vec<OrderDto>,
    pub delivered: Vec<OrderDto>,
}

#[derive(Debug, Clone, Default)]
pub struct AdminDashboard {
    pub products: Vec<ProductDto>,
    pub orders: OrderLists,
}

pub struct Storefront<A, S> {
    api: A,
    state: ClientState<S>,
}

impl<A: StorefrontApi, S: StateStore> Storefront<A, S> {
    pub fn new(api: A, store: S) -> Self {
        Self {
            api,
            state: ClientState::new(store),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    // ── Bootstrap ──────────────────────────────────────────────

    /// Seed the catalog and the admin account when the backend is empty.
    pub async fn bootstrap(&self) -> ClientResult<BootstrapReport> {
        let mut report = BootstrapReport::default();

        let products = self.api.list_products().await.or_else(empty_on_transport)?;
        if products.is_empty() {
            for product in seed_products() {
                let request = CreateProductRequest {
                    code: product.code,
                    description: product.description,
                    price: product.price,
                };
                match self.api.create_product(&request).await {
                    Ok(_) => report.products_created += 1,
                    Err(e) if e.is_conflict() => {}
                    Err(e) => return Err(e),
                }
            }
        }

        let users = self.api.list_users().await.or_else(empty_on_transport)?;
        if users.is_empty() {
            let admin = default_admin();
            let request = CreateUserRequest {
                username: admin.username,
                password: admin.password,
                is_admin: true,
            };
            match self.api.create_user(&request).await {
                Ok(_) => report.admin_created = true,
                Err(e) if e.is_conflict() => {}
                Err(e) => return Err(e),
            }
        }

        if report != BootstrapReport::default() {
            info!(
                products = report.products_created,
                admin = report.admin_created,
                "Backend seeded"
            );
        }
        Ok(report)
    }

    // ── Catalog ────────────────────────────────────────────────

    pub async fn products(&self) -> ClientResult<Vec<ProductDto>> {
        self.api.list_products().await
    }

    // ── Session ────────────────────────────────────────────────

    /// Register a customer account. Does not log in.
    pub async fn signup(&self, username: &str, password: &str) -> ClientResult<i32> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(ClientError::Validation(
                "Username and password are required".into(),
            ));
        }
        let users = self.api.list_users().await?;
        if users.iter().any(|u| u.username == username) {
            return Err(ClientError::UsernameTaken(username.to_string()));
        }
        let created = self
            .api
            .create_user(&CreateUserRequest {
                username: username.to_string(),
                password: password.to_string(),
                is_admin: false,
            })
            .await?;
        info!(username, id = created.id, "Account created");
        Ok(created.id)
    }

    pub async fn login(&self, username: &str, password: &str) -> ClientResult<UserDto> {
        let users = self.api.list_users().await?;
        let user = users
            .into_iter()
            .find(|u| u.username == username && u.password == password)
            .ok_or(ClientError::InvalidCredentials)?;
        self.state.set_current_user(&user)?;
        info!(username, is_admin = user.is_admin, "Logged in");
        Ok(user)
    }

    pub fn logout(&self) -> ClientResult<()> {
        self.state.clear_current_user()
    }

    pub fn current_user(&self) -> ClientResult<Option<UserDto>> {
        self.state.current_user()
    }

    // ── Cart ───────────────────────────────────────────────────

    pub fn cart(&self) -> ClientResult<Cart> {
        self.state.cart()
    }

    pub async fn add_to_cart(&self, code: &str, quantity: i64) -> ClientResult<Cart> {
        if self.state.current_user()?.is_none() {
            return Err(ClientError::NotLoggedIn);
        }
        let quantity = u32::try_from(quantity)
            .ok()
            .filter(|q| *q >= 1)
            .ok_or(ClientError::InvalidQuantity(quantity))?;

        let products = self.api.list_products().await?;
        let product = products
            .iter()
            .find(|p| p.code == code)
            .ok_or_else(|| ClientError::ProductNotFound(code.to_string()))?;

        let mut cart = self.state.cart()?;
        cart.add(&product.code, &product.description, product.price, quantity);
        self.state.save_cart(&cart)?;
        Ok(cart)
    }

    /// Overwrite a line's quantity; zero or less removes it.
    pub fn update_quantity(&self, code: &str, quantity: i64) -> ClientResult<Cart> {
        let mut cart = self.state.cart()?;
        if cart.set_quantity(code, quantity) {
            self.state.save_cart(&cart)?;
        }
        Ok(cart)
    }

    pub fn remove_from_cart(&self, code: &str) -> ClientResult<Cart> {
        let mut cart = self.state.cart()?;
        if cart.remove(code) {
            self.state.save_cart(&cart)?;
        }
        Ok(cart)
    }

    /// Submit the cart as one `Pendiente` order and empty it.
    /// The cart survives a failed submission. Once the order exists the
    /// id is returned even if the cart cannot be cleared.
    pub async fn checkout(&self, address: &str) -> ClientResult<i32> {
        let address = address.trim();
        if address.is_empty() {
            return Err(ClientError::EmptyAddress);
        }
        let user = self.state.current_user()?.ok_or(ClientError::NotLoggedIn)?;
        let cart = self.state.cart()?;
        if cart.is_empty() {
            return Err(ClientError::EmptyCart);
        }

        let order = CreateOrderRequest {
            user_id: user.id,
            items: cart.formatted_items(),
            status: Some(OrderStatus::Pending.as_str().to_string()),
            total: cart.total().ok_or(ClientError::TotalOverflow)?,
            address: address.to_string(),
            date: Some(Utc::now()),
        };
        let created = self.api.create_order(&order).await?;
        if let Err(e) = self.state.clear_cart() {
            warn!(order_id = created.id, error = %e, "Order placed but the cart could not be cleared");
        }
        info!(order_id = created.id, total = %order.total, "Order submitted");
        Ok(created.id)
    }

    // ── Admin ──────────────────────────────────────────────────

    fn require_admin(&self) -> ClientResult<UserDto> {
        match self.state.current_user()? {
            Some(user) if user.is_admin => Ok(user),
            Some(_) => Err(ClientError::AdminRequired),
            None => Err(ClientError::NotLoggedIn),
        }
    }

    pub async fn add_product(&self, code: &str, description: &str, price: Decimal) -> ClientResult<i32> {
        self.require_admin()?;
        let code = code.trim();
        let products = self.api.list_products().await?;
        if products.iter().any(|p| p.code == code) {
            return Err(ClientError::DuplicateCode(code.to_string()));
        }
        let created = self
            .api
            .create_product(&CreateProductRequest {
                code: code.to_string(),
                description: description.to_string(),
                price,
            })
            .await?;
        Ok(created.id)
    }

    /// Rows deleted; 0 when the code is unknown.
    pub async fn remove_product(&self, code: &str) -> ClientResult<u64> {
        self.require_admin()?;
        Ok(self.api.delete_product(code).await?.affected_rows)
    }

    pub async fn orders(&self) -> ClientResult<OrderLists> {
        self.require_admin()?;
        let (pending, delivered) = self
            .api
            .list_orders()
            .await?
            .into_iter()
            .partition(|o| o.status == OrderStatus::Pending.as_str());
        Ok(OrderLists {
            pending,
            delivered: delivered
                .into_iter()
                .filter(|o: &OrderDto| o.status == OrderStatus::Delivered.as_str())
                .collect(),
        })
    }

    pub async fn admin_dashboard(&self) -> ClientResult<AdminDashboard> {
        self.require_admin()?;
        Ok(AdminDashboard {
            products: self.api.list_products().await?,
            orders: self.orders().await?,
        })
    }

    /// Deliver an order and return the refreshed pending/delivered lists.
    pub async fn deliver_order(&self, id: i32) -> ClientResult<OrderLists> {
        self.require_admin()?;
        self.api.deliver_order(id).await?;
        self.orders().await
    }

    /// Cancel a pending order and return the refreshed lists.
    pub async fn cancel_order(&self, id: i32) -> ClientResult<OrderLists> {
        self.require_admin()?;
        self.api.cancel_order(id).await?;
        self.orders().await
    }
}

fn empty_on_transport<T>(err: ClientError) -> ClientResult<Vec<T>> {
    if err.is_transport() {
        warn!(error = %err, "Listing failed during bootstrap, treating as empty");
        Ok(Vec::new())
    } else {
        Err(err)
    }
}
