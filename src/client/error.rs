use thiserror::Error;

/// Everything a storefront action can fail with.
///
/// The first group are local rejections: no request has been sent.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("A product with code '{0}' already exists")]
    DuplicateCode(String),

    #[error("Username '{0}' is already taken")]
    UsernameTaken(String),

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("A delivery address is required")]
    EmptyAddress,

    #[error("You must be logged in")]
    NotLoggedIn,

    #[error("The cart is empty")]
    EmptyCart,

    #[error("Administrator access required")]
    AdminRequired,

    #[error("Product '{0}' not found")]
    ProductNotFound(String),

    #[error("Quantity must be at least 1, got {0}")]
    InvalidQuantity(i64),

    #[error("The cart total is too large")]
    TotalOverflow,

    #[error("{0}")]
    Validation(String),

    #[error("Server rejected the request ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid API base URL '{0}'")]
    InvalidBaseUrl(String),

    #[error("State storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// The server reported a uniqueness conflict (HTTP 409).
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Api { status: 409, .. })
    }

    /// The request never got a response.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_))
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
