use crate::shared::{DomainError, DomainResult};

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password: String,
    pub is_admin: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub is_admin: bool,
}

impl NewUser {
    pub fn customer(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            is_admin: false,
        }
    }

    pub fn admin(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            is_admin: true,
            ..Self::customer(username, password)
        }
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.username.trim().is_empty() {
            return Err(DomainError::Validation("Username cannot be empty".into()));
        }
        if self.username.len() > 50 {
            return Err(DomainError::Validation(
                "Username must be at most 50 characters".into(),
            ));
        }
        if self.password.is_empty() {
            return Err(DomainError::Validation("Password cannot be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_constructor_sets_flag() {
        assert!(NewUser::admin("admin", "admin123").is_admin);
        assert!(!NewUser::customer("ana", "secret").is_admin);
    }

    #[test]
    fn blank_username_is_invalid() {
        assert!(NewUser::customer("  ", "secret").validate().is_err());
        assert!(NewUser::customer("ana", "").validate().is_err());
        assert!(NewUser::customer("ana", "secret").validate().is_ok());
    }
}
