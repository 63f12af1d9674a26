//! Driving port for the user lifecycle use-cases.
//!
//! Inbound adapters depend on [`UserLifecycle`] rather than on the concrete
//! service so handlers can be exercised against a mock.

use async_trait::async_trait;

use crate::domain::{User, UserDraft, UserId};

use super::{UserStoreError, define_port_error};

define_port_error! {
    /// Failures surfaced by the user lifecycle use-cases.
    pub enum UserLifecycleError {
        /// Another user already holds the requested email.
        DuplicateEmail { email: String } => "email already exists: {email}",
        /// No user is stored under the requested identifier.
        NotFound { id: u64 } => "user {id} not found",
        /// The backing store failed.
        Store { source: UserStoreError } => "user store failure: {source}",
    }
}

impl From<UserStoreError> for UserLifecycleError {
    fn from(error: UserStoreError) -> Self {
        match error {
            UserStoreError::DuplicateEmail { email } => Self::DuplicateEmail { email },
            UserStoreError::Missing { id } => Self::NotFound { id },
            other => Self::Store { source: other },
        }
    }
}

/// Create/read/update/delete operations over users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserLifecycle: Send + Sync {
    /// Persist a new user after checking its email is unused.
    async fn create(&self, draft: UserDraft) -> Result<User, UserLifecycleError>;

    /// Fetch a stored user.
    async fn get(&self, id: UserId) -> Result<User, UserLifecycleError>;

    /// Replace the name and email of a stored user.
    async fn update(&self, id: UserId, draft: UserDraft) -> Result<User, UserLifecycleError>;

    /// Remove a stored user, returning its last known state.
    async fn delete(&self, id: UserId) -> Result<User, UserLifecycleError>;
}
