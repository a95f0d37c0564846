use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{RepositoryError, RepositoryResult};
use crate::models::{CreateUser, UpdateUser, User};

/// Repository trait for User persistence
///
/// This trait defines the data access interface for users. Implementations
/// can use different storage backends; the service layer only ever sees this
/// contract, so backends are substitutable without touching business logic.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a new user, assigning a fresh id
    async fn create(&self, input: CreateUser) -> RepositoryResult<User>;

    /// Get a user by ID
    async fn get_by_id(&self, id: u64) -> RepositoryResult<User>;

    /// List one 1-indexed page of users in insertion order, with the total
    /// count of live records. Pages past the end are empty, not an error.
    async fn list(&self, page: u32, per_page: u32) -> RepositoryResult<(Vec<User>, usize)>;

    /// Update an existing user in place (id and insertion position unchanged)
    async fn update(&self, id: u64, input: UpdateUser) -> RepositoryResult<User>;

    /// Delete a user by ID, retiring the id permanently
    async fn delete(&self, id: u64) -> RepositoryResult<()>;
}

/// Ordered store plus the id counter, kept under one lock so id assignment
/// and the email-uniqueness check cannot race.
#[derive(Debug)]
struct UserStore {
    users: Vec<User>,
    next_id: u64,
}

impl Default for UserStore {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            next_id: 1,
        }
    }
}

/// In-memory implementation of UserRepository (for development/testing)
///
/// State is scoped to the instance: independent instances are fully isolated,
/// so concurrent tests never observe each other's records. Lookups are linear
/// scans, which is fine for a reference backend; a production backend would
/// index by id and by email.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    store: Arc<RwLock<UserStore>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn email_taken_by_other(users: &[User], email: &str, exclude_id: Option<u64>) -> bool {
    users.iter().any(|u| {
        Some(u.id) != exclude_id && u.email.eq_ignore_ascii_case(email)
    })
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, input: CreateUser) -> RepositoryResult<User> {
        let mut store = self.store.write().await;

        if email_taken_by_other(&store.users, &input.email, None) {
            return Err(RepositoryError::DuplicateEmail(input.email));
        }

        let id = store.next_id;
        store.next_id += 1;

        let user = User::new(id, input);
        store.users.push(user.clone());

        tracing::info!(user_id = %user.id, email = %user.email, "Created user");
        Ok(user)
    }

    async fn get_by_id(&self, id: u64) -> RepositoryResult<User> {
        let store = self.store.read().await;
        store
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound(id))
    }

    async fn list(&self, page: u32, per_page: u32) -> RepositoryResult<(Vec<User>, usize)> {
        let store = self.store.read().await;
        let total = store.users.len();

        // Service validates page >= 1; saturate anyway so a raw caller
        // passing 0 reads page 1 instead of underflowing.
        let start = (page as usize).saturating_sub(1) * per_page as usize;
        let users: Vec<User> = store
            .users
            .iter()
            .skip(start)
            .take(per_page as usize)
            .cloned()
            .collect();

        Ok((users, total))
    }

    async fn update(&self, id: u64, input: UpdateUser) -> RepositoryResult<User> {
        let mut store = self.store.write().await;

        let position = store
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or(RepositoryError::NotFound(id))?;

        if let Some(ref email) = input.email {
            if email_taken_by_other(&store.users, email, Some(id)) {
                return Err(RepositoryError::DuplicateEmail(email.clone()));
            }
        }

        store.users[position].apply_update(input);
        let updated = store.users[position].clone();

        tracing::info!(user_id = %id, "Updated user");
        Ok(updated)
    }

    async fn delete(&self, id: u64) -> RepositoryResult<()> {
        let mut store = self.store.write().await;

        let position = store
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or(RepositoryError::NotFound(id))?;

        store.users.remove(position);

        tracing::info!(user_id = %id, "Deleted user");
        Ok(())
    }
}
