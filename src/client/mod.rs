//! Storefront client
//!
//! Everything the shop front end does: talks to the REST backend through
//! [`StorefrontApi`], keeps the session and cart in a [`StateStore`], and
//! runs the customer and admin flows in [`Storefront`].

pub mod api;
pub mod cart;
pub mod error;
pub mod http;
pub mod state;
pub mod storefront;

pub use api::{decode_response, StorefrontApi};
pub use cart::{Cart, CartLine};
pub use error::{ClientError, ClientResult};
pub use http::{HttpApi, DEFAULT_API_URL};
pub use state::{default_state_path, ClientState, FileStore, MemoryStore, StateStore};
pub use storefront::{AdminDashboard, BootstrapReport, OrderLists, Storefront};
