use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// User entity.
///
/// Ids are assigned by the repository at creation time and are immutable
/// afterwards; a repository instance never reuses an id, even after the
/// record is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique positive identifier, repository-assigned
    pub id: u64,
    /// User display name
    pub name: String,
    /// User email (unique among live records, case-insensitive)
    pub email: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Materialize a record from validated input. Called by the repository
    /// once it has reserved an id.
    pub fn new(id: u64, input: CreateUser) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: input.name,
            email: input.email,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update. Fields left `None` are preserved; id and
    /// `created_at` never change.
    pub fn apply_update(&mut self, update: UpdateUser) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        self.updated_at = Utc::now();
    }
}

/// DTO for creating a new user
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUser {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(email, length(max = 255))]
    pub email: String,
}

/// DTO for updating an existing user (partial; unset fields are kept)
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUser {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(email, length(max = 255))]
    pub email: Option<String>,
}

/// One page of users plus enough context to render pagination controls
#[derive(Debug, Clone, Serialize)]
pub struct UserPage {
    pub users: Vec<User>,
    pub total: usize,
    pub page: u32,
    pub per_page: u32,
}

impl UserPage {
    /// Number of pages needed to cover `total` records
    pub fn total_pages(&self) -> u32 {
        (self.total as u32).div_ceil(self.per_page)
    }
}
