use thiserror::Error;

/// Storage-level failures raised by `UserRepository` implementations.
///
/// These never cross the service boundary: the service layer translates each
/// variant into the matching [`UserError`] so callers only ever see domain
/// errors, regardless of which backend is plugged in.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("no record with id {0}")]
    NotFound(u64),

    #[error("email '{0}' is already taken by a live record")]
    DuplicateEmail(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Domain-level failures surfaced by `UserService`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserError {
    #[error("User not found: {0}")]
    NotFound(u64),

    #[error("User with email '{0}' already exists")]
    AlreadyExists(String),

    #[error("Invalid pagination: page={page}, per_page={per_page} (both must be >= 1)")]
    InvalidPagination { page: u32, per_page: u32 },

    #[error("Invalid input: {0}")]
    Validation(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl From<RepositoryError> for UserError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(id) => UserError::NotFound(id),
            RepositoryError::DuplicateEmail(email) => UserError::AlreadyExists(email),
        }
    }
}
