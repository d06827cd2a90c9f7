//! User DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{NewUser, User};

/// User record. The password is returned as stored; login is checked by the client.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub password: String,
    #[serde(rename = "isAdmin")]
    pub is_admin: bool,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            username: u.username,
            password: u.password,
            is_admin: u.is_admin,
        }
    }
}

/// Create user request
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 50, message = "must be 1-50 characters"))]
    pub username: String,
    #[validate(length(min = 1, message = "cannot be empty"))]
    pub password: String,
    #[serde(rename = "isAdmin", default)]
    pub is_admin: bool,
}

impl From<CreateUserRequest> for NewUser {
    fn from(r: CreateUserRequest) -> Self {
        NewUser {
            username: r.username,
            password: r.password,
            is_admin: r.is_admin,
        }
    }
}
