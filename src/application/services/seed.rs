//! First-run seeding of the catalog and the default admin account

use tracing::{debug, info};

use crate::domain::seed::seed_products;
use crate::domain::{DomainError, DomainResult, NewUser, RepositoryProvider};

/// What a seeding pass actually inserted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub products_created: usize,
    pub admin_created: bool,
}

/// Insert the fixed catalog when `productos` is empty and `admin` when
/// `usuarios` is empty. Records that already exist are skipped.
pub async fn run_seed(repos: &dyn RepositoryProvider, admin: NewUser) -> DomainResult<SeedReport> {
    let mut report = SeedReport::default();

    if repos.products().count().await? == 0 {
        for product in seed_products() {
            match repos.products().create(product.normalized()?).await {
                Ok(_) => report.products_created += 1,
                Err(DomainError::Conflict(msg)) => debug!("Seed product skipped: {}", msg),
                Err(e) => return Err(e),
            }
        }
    }

    if repos.users().count().await? == 0 {
        let admin = NewUser { is_admin: true, ..admin };
        admin.validate()?;
        let username = admin.username.clone();
        match repos.users().create(admin).await {
            Ok(_) => {
                info!(username = %username, "Default admin created");
                report.admin_created = true;
            }
            Err(DomainError::Conflict(msg)) => debug!("Seed admin skipped: {}", msg),
            Err(e) => return Err(e),
        }
    }

    if report.products_created > 0 {
        info!(count = report.products_created, "Catalog seeded");
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::seed::default_admin;
    use crate::infrastructure::database::test_database;
    use crate::infrastructure::SeaOrmRepositoryProvider;

    #[tokio::test]
    async fn seeds_empty_database_once() {
        let repos = SeaOrmRepositoryProvider::new(test_database().await);

        let first = run_seed(&repos, default_admin()).await.unwrap();
        assert_eq!(first, SeedReport { products_created: 10, admin_created: true });

        let second = run_seed(&repos, default_admin()).await.unwrap();
        assert_eq!(second, SeedReport::default());
        assert_eq!(repos.products().count().await.unwrap(), 10);
        assert_eq!(repos.users().count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn existing_users_suppress_admin_seed() {
        let repos = SeaOrmRepositoryProvider::new(test_database().await);
        repos.users().create(NewUser::customer("ana", "pw")).await.unwrap();

        let report = run_seed(&repos, default_admin()).await.unwrap();
        assert!(!report.admin_created);
        assert_eq!(report.products_created, 10);
    }

    #[tokio::test]
    async fn configured_admin_is_always_flagged_admin() {
        let repos = SeaOrmRepositoryProvider::new(test_database().await);
        run_seed(&repos, NewUser::customer("root", "toor")).await.unwrap();

        let users = repos.users().find_all().await.unwrap();
        assert_eq!(users[0].username, "root");
        assert!(users[0].is_admin);
    }
}
