use crate::error::{AppError, AppResult};
use crate::models::{CreateUser, UpdateUser, User, UserPublic};
use crate::storage::{DynStorage, Storage};

/// Account creation and profile maintenance. Credential verification is
/// handled by the fronting auth layer; this service only stores the opaque
/// hash it is given.
#[derive(Clone)]
pub struct UserService {
    store: DynStorage,
}

impl UserService {
    pub fn new(store: DynStorage) -> Self {
        Self { store }
    }

    pub async fn create(&self, new: CreateUser) -> AppResult<User> {
        if new.username.trim().is_empty() {
            return Err(AppError::Validation("username must not be empty".to_string()));
        }
        if !new.email.contains('@') {
            return Err(AppError::Validation(format!(
                "'{}' is not a valid email address",
                new.email
            )));
        }
        if self.store.user_by_username(&new.username).await?.is_some() {
            return Err(AppError::Validation(format!(
                "username '{}' is already taken",
                new.username
            )));
        }
        if self.store.user_by_email(&new.email).await?.is_some() {
            return Err(AppError::Validation(format!(
                "email '{}' is already registered",
                new.email
            )));
        }
        self.store.create_user(new).await
    }

    pub async fn by_id(&self, id: i64) -> AppResult<Option<User>> {
        self.store.user_by_id(id).await
    }

    /// Updates the caller's own profile fields. Role and id cannot change;
    /// `UpdateUser` has no way to express them.
    pub async fn update_profile(&self, caller: &User, changes: UpdateUser) -> AppResult<UserPublic> {
        let updated = self.store.update_user(caller.id, changes).await?;
        Ok(UserPublic::from(updated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use crate::storage::MemoryStore;
    use std::sync::Arc;

    fn input(username: &str, email: &str) -> CreateUser {
        CreateUser {
            username: username.to_string(),
            email: email.to_string(),
            password_hash: "hash".to_string(),
            full_name: "Someone".to_string(),
            role: Role::Athlete,
            bio: None,
            profile_image: None,
            specialties: None,
        }
    }

    #[tokio::test]
    async fn duplicate_username_or_email_is_rejected() {
        let service = UserService::new(Arc::new(MemoryStore::new()));
        service.create(input("ana", "ana@example.com")).await.unwrap();

        let err = service
            .create(input("ana", "other@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let err = service
            .create(input("other", "ana@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn malformed_email_is_rejected() {
        let service = UserService::new(Arc::new(MemoryStore::new()));
        let err = service.create(input("ana", "not-an-email")).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn profile_update_returns_the_public_shape() {
        let service = UserService::new(Arc::new(MemoryStore::new()));
        let user = service.create(input("ana", "ana@example.com")).await.unwrap();
        let updated = service
            .update_profile(
                &user,
                UpdateUser {
                    bio: Some("lifter".to_string()),
                    ..UpdateUser::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.bio.as_deref(), Some("lifter"));
        assert_eq!(updated.role, Role::Athlete);
    }
}
