use async_trait::async_trait;

use super::model::{NewUser, User};
use crate::shared::DomainResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_all(&self) -> DomainResult<Vec<User>>;
    async fn count(&self) -> DomainResult<u64>;
    /// Atomic insert; `DomainError::Conflict` when the username is taken.
    async fn create(&self, user: NewUser) -> DomainResult<i32>;
}
