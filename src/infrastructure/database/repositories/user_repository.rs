use async_trait::async_trait;
use log::info;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryOrder, Set};

use super::{db_err, is_unique_violation};
use crate::domain::{DomainError, DomainResult, NewUser, User, UserRepository};
use crate::infrastructure::database::entities::user;

pub struct SeaOrmUserRepository {
    db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn user_model_to_domain(model: user::Model) -> User {
    User {
        id: model.id,
        username: model.username,
        password: model.password,
        is_admin: model.is_admin,
    }
}

fn duplicate_username(username: &str) -> DomainError {
    DomainError::Conflict(format!("Username '{}' already exists", username))
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn find_all(&self) -> DomainResult<Vec<User>> {
        let models = user::Entity::find()
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(user_model_to_domain).collect())
    }

    async fn count(&self) -> DomainResult<u64> {
        user::Entity::find().count(&self.db).await.map_err(db_err)
    }

    async fn create(&self, dto: NewUser) -> DomainResult<i32> {
        let username = dto.username.clone();
        let model = user::ActiveModel {
            username: Set(dto.username),
            password: Set(dto.password),
            is_admin: Set(dto.is_admin),
            ..Default::default()
        };

        let result = user::Entity::insert(model)
            .on_conflict(
                OnConflict::column(user::Column::Username)
                    .do_nothing()
                    .to_owned(),
            )
            .exec(&self.db)
            .await;

        match result {
            Ok(inserted) => {
                info!("User created: {} ({})", username, inserted.last_insert_id);
                Ok(inserted.last_insert_id)
            }
            Err(DbErr::RecordNotInserted) => Err(duplicate_username(&username)),
            Err(e) if is_unique_violation(&e) => Err(duplicate_username(&username)),
            Err(e) => Err(db_err(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::test_database;

    #[tokio::test]
    async fn create_and_list_users() {
        let repo = SeaOrmUserRepository::new(test_database().await);
        let admin_id = repo.create(NewUser::admin("admin", "admin123")).await.unwrap();
        let ana_id = repo.create(NewUser::customer("ana", "secreto")).await.unwrap();
        assert_ne!(admin_id, ana_id);

        let users = repo.find_all().await.unwrap();
        assert_eq!(users.len(), 2);
        assert!(users[0].is_admin);
        assert_eq!(users[1].username, "ana");
        assert_eq!(users[1].password, "secreto");
        assert!(!users[1].is_admin);
    }

    #[tokio::test]
    async fn duplicate_username_is_a_conflict() {
        let repo = SeaOrmUserRepository::new(test_database().await);
        repo.create(NewUser::customer("ana", "uno")).await.unwrap();

        let err = repo.create(NewUser::customer("ana", "dos")).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
