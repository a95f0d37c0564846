//! Users Domain
//!
//! This crate provides a layered CRUD core for user management: a
//! persistence-agnostic repository contract, a reference in-memory backend,
//! and a business-logic service on top.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Service   │  ← Validation, business rules, domain errors
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entity, DTOs, pagination
//! └─────────────┘
//! ```
//!
//! The service is constructed with an injected repository and depends only on
//! the [`UserRepository`] trait, so any backend implementing the five-method
//! contract can be substituted. Repository errors never cross the service
//! boundary; callers only see [`UserError`] variants.
//!
//! # Usage
//!
//! ```rust
//! use domain_users::{CreateUser, InMemoryUserRepository, UserService};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let service = UserService::new(InMemoryUserRepository::new());
//!
//! let user = service
//!     .create_user(CreateUser {
//!         name: "Ada Lovelace".to_string(),
//!         email: "ada@example.com".to_string(),
//!     })
//!     .await
//!     .unwrap();
//!
//! assert_eq!(service.get_user(user.id).await.unwrap(), user);
//! # }
//! ```

pub mod error;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{RepositoryError, RepositoryResult, UserError, UserResult};
pub use models::{CreateUser, UpdateUser, User, UserPage};
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
