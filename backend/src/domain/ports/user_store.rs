//! Driven port for user persistence.
//!
//! Any storage technology can back [`UserStore`]: an in-memory map, a
//! relational table, a key-value store. The lifecycle service treats the
//! store as an opaque thread-safe capability and performs no locking of its
//! own, so adapters must enforce email uniqueness themselves to close the
//! gap between `exists_by_email` and `save`/`update`.

use async_trait::async_trait;

use crate::domain::{EmailAddress, User, UserDraft, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by user store adapters.
    pub enum UserStoreError {
        /// Store connection could not be established.
        Connection { message: String } => "user store connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user store query failed: {message}",
        /// The store's own uniqueness constraint rejected the email.
        DuplicateEmail { email: String } => "email already stored: {email}",
        /// The targeted record does not exist.
        Missing { id: u64 } => "user {id} is not stored",
    }
}

/// Persistence capability for user records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserStoreError>;

    /// Report whether any stored user holds `email`.
    async fn exists_by_email(&self, email: &EmailAddress) -> Result<bool, UserStoreError>;

    /// Insert a new user, assigning its identifier.
    async fn save(&self, draft: &UserDraft) -> Result<User, UserStoreError>;

    /// Replace name and email of an existing user; the identifier is kept.
    async fn update(&self, id: UserId, draft: &UserDraft) -> Result<User, UserStoreError>;

    /// Remove a stored user.
    async fn delete(&self, user: &User) -> Result<(), UserStoreError>;
}
