use std::sync::Arc;
use validator::Validate;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, UpdateUser, User, UserPage};
use crate::repository::UserRepository;

/// Service layer for User business logic
///
/// Validates inputs, delegates persistence to the injected repository, and
/// translates storage errors into domain errors. Each call is a stateless
/// transaction against the repository.
#[derive(Clone)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new user
    pub async fn create_user(&self, input: CreateUser) -> UserResult<User> {
        input
            .validate()
            .map_err(|e| UserError::Validation(e.to_string()))?;

        tracing::debug!(email = %input.email, "Creating user");
        Ok(self.repository.create(input).await?)
    }

    /// Get a user by ID
    pub async fn get_user(&self, id: u64) -> UserResult<User> {
        Ok(self.repository.get_by_id(id).await?)
    }

    /// List users, one 1-indexed page at a time
    pub async fn list_users(&self, page: u32, per_page: u32) -> UserResult<UserPage> {
        if page == 0 || per_page == 0 {
            return Err(UserError::InvalidPagination { page, per_page });
        }

        let (users, total) = self.repository.list(page, per_page).await?;
        Ok(UserPage {
            users,
            total,
            page,
            per_page,
        })
    }

    /// Update a user
    pub async fn update_user(&self, id: u64, input: UpdateUser) -> UserResult<User> {
        input
            .validate()
            .map_err(|e| UserError::Validation(e.to_string()))?;

        tracing::debug!(user_id = %id, "Updating user");
        Ok(self.repository.update(id, input).await?)
    }

    /// Delete a user
    pub async fn delete_user(&self, id: u64) -> UserResult<()> {
        tracing::debug!(user_id = %id, "Deleting user");
        Ok(self.repository.delete(id).await?)
    }
}
