//! Account service: user listing and registration

use std::sync::Arc;

use tracing::info;

use crate::domain::{DomainResult, NewUser, RepositoryProvider, User};

pub struct AccountService {
    repos: Arc<dyn RepositoryProvider>,
}

impl AccountService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn list_users(&self) -> DomainResult<Vec<User>> {
        self.repos.users().find_all().await
    }

    /// Register a user. The role flag is taken as supplied by the caller.
    pub async fn create_user(&self, user: NewUser) -> DomainResult<i32> {
        user.validate()?;
        let username = user.username.clone();
        let is_admin = user.is_admin;
        let id = self.repos.users().create(user).await?;
        info!(user_id = id, username = %username, is_admin, "New user registered");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use crate::infrastructure::database::test_database;
    use crate::infrastructure::SeaOrmRepositoryProvider;

    #[tokio::test]
    async fn usernames_are_unique() {
        let accounts =
            AccountService::new(Arc::new(SeaOrmRepositoryProvider::new(test_database().await)));
        accounts
            .create_user(NewUser::customer("ana", "secreto"))
            .await
            .unwrap();
        let err = accounts
            .create_user(NewUser::customer("ana", "otro"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(accounts.list_users().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn empty_password_is_rejected() {
        let accounts =
            AccountService::new(Arc::new(SeaOrmRepositoryProvider::new(test_database().await)));
        let err = accounts
            .create_user(NewUser::customer("ana", ""))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
