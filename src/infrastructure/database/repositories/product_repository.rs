//! SeaORM implementation of ProductRepository

use async_trait::async_trait;
use log::info;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

use super::{db_err, is_unique_violation};
use crate::domain::{DomainError, DomainResult, NewProduct, Product, ProductRepository};
use crate::infrastructure::database::entities::product;

fn entity_to_domain(p: product::Model) -> Product {
    Product {
        id: p.id,
        code: p.code,
        description: p.description,
        // SQLite hands decimals back through f64
        price: p.price.round_dp(2),
    }
}

pub struct SeaOrmProductRepository {
    db: DatabaseConnection,
}

impl SeaOrmProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn find_all(&self) -> DomainResult<Vec<Product>> {
        let models = product::Entity::find()
            .order_by_asc(product::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn count(&self) -> DomainResult<u64> {
        product::Entity::find().count(&self.db).await.map_err(db_err)
    }

    async fn create(&self, p: NewProduct) -> DomainResult<i32> {
        let code = p.code.clone();
        let model = product::ActiveModel {
            code: Set(p.code),
            description: Set(p.description),
            price: Set(p.price),
            ..Default::default()
        };

        let result = product::Entity::insert(model)
            .on_conflict(
                OnConflict::column(product::Column::Code)
                    .do_nothing()
                    .to_owned(),
            )
            .exec(&self.db)
            .await;

        match result {
            Ok(inserted) => {
                info!("Product saved: {} ({})", code, inserted.last_insert_id);
                Ok(inserted.last_insert_id)
            }
            Err(DbErr::RecordNotInserted) => Err(duplicate_code(&code)),
            Err(e) if is_unique_violation(&e) => Err(duplicate_code(&code)),
            Err(e) => Err(db_err(e)),
        }
    }

    async fn delete_by_code(&self, code: &str) -> DomainResult<u64> {
        let result = product::Entity::delete_many()
            .filter(product::Column::Code.eq(code))
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        info!("Product {} deleted ({} rows)", code, result.rows_affected);
        Ok(result.rows_affected)
    }
}

fn duplicate_code(code: &str) -> DomainError {
    DomainError::Conflict(format!("Product code '{}' already exists", code))
}
