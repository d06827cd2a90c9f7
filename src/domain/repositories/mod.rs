//! Repository traits for the domain layer
//!
//! `RepositoryProvider` gives unified access to all per-aggregate repositories.

use super::order::OrderRepository;
use super::product::ProductRepository;
use super::user::UserRepository;

/// Provides access to all domain repositories.
///
/// Consumers request only the repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let products = repos.products().find_all().await?;
///     let pending = repos.orders().find_by_id(7).await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn products(&self) -> &dyn ProductRepository;
    fn users(&self) -> &dyn UserRepository;
    fn orders(&self) -> &dyn OrderRepository;
}
