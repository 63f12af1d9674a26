//! User lifecycle domain service.
//!
//! Enforces the two rules that sit in front of the store: an email belongs
//! to at most one user, and only stored users can be read, replaced or
//! removed. The store is never called after a failed precondition.
//!
//! Uniqueness is checked with `exists_by_email` before writing. Concurrent
//! callers can race between the check and the write; closing that gap is the
//! store's job (see [`UserStoreError::DuplicateEmail`]).

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, warn};

use crate::domain::ports::{UserLifecycle, UserLifecycleError, UserStore, UserStoreError};
use crate::domain::{EmailAddress, Error, User, UserDraft, UserId};

/// User lifecycle service implementing the [`UserLifecycle`] driving port.
#[derive(Clone)]
pub struct UserLifecycleService<S> {
    store: Arc<S>,
}

impl<S> UserLifecycleService<S> {
    /// Create a new service over the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

impl<S> UserLifecycleService<S>
where
    S: UserStore,
{
    async fn find_existing(&self, id: UserId) -> Result<User, UserLifecycleError> {
        self.store
            .find_by_id(id)
            .await
            .map_err(Self::store_failure)?
            .ok_or_else(|| {
                warn!(user_id = %id, "user not found");
                UserLifecycleError::not_found(id.get())
            })
    }

    async fn ensure_email_unused(&self, email: &EmailAddress) -> Result<(), UserLifecycleError> {
        let taken = self
            .store
            .exists_by_email(email)
            .await
            .map_err(Self::store_failure)?;
        if taken {
            warn!(email = %email, "rejected duplicate email");
            return Err(UserLifecycleError::duplicate_email(email.as_ref()));
        }
        Ok(())
    }

    fn store_failure(error: UserStoreError) -> UserLifecycleError {
        let lifted = UserLifecycleError::from(error);
        if matches!(lifted, UserLifecycleError::Store { .. }) {
            error!(error = %lifted, "user store operation failed");
        }
        lifted
    }
}

#[async_trait]
impl<S> UserLifecycle for UserLifecycleService<S>
where
    S: UserStore,
{
    async fn create(&self, draft: UserDraft) -> Result<User, UserLifecycleError> {
        self.ensure_email_unused(&draft.email).await?;
        let user = self.store.save(&draft).await.map_err(Self::store_failure)?;
        debug!(user_id = %user.id(), "user created");
        Ok(user)
    }

    async fn get(&self, id: UserId) -> Result<User, UserLifecycleError> {
        self.find_existing(id).await
    }

    async fn update(&self, id: UserId, draft: UserDraft) -> Result<User, UserLifecycleError> {
        let current = self.find_existing(id).await?;
        // Keeping one's own email is not a collision.
        if current.email() != &draft.email {
            self.ensure_email_unused(&draft.email).await?;
        }
        let user = self
            .store
            .update(id, &draft)
            .await
            .map_err(Self::store_failure)?;
        debug!(user_id = %id, "user updated");
        Ok(user)
    }

    async fn delete(&self, id: UserId) -> Result<User, UserLifecycleError> {
        let user = self.find_existing(id).await?;
        self.store
            .delete(&user)
            .await
            .map_err(Self::store_failure)?;
        debug!(user_id = %id, "user deleted");
        Ok(user)
    }
}

impl From<UserLifecycleError> for Error {
    fn from(error: UserLifecycleError) -> Self {
        match error {
            UserLifecycleError::DuplicateEmail { .. } => Error::conflict("Email already exists"),
            UserLifecycleError::NotFound { .. } => Error::not_found("User not found"),
            UserLifecycleError::Store {
                source: UserStoreError::Connection { message },
            } => Error::service_unavailable(format!("user store unavailable: {message}")),
            UserLifecycleError::Store { source } => {
                Error::internal(format!("user store error: {source}"))
            }
        }
    }
}

#[cfg(test)]
#[path = "user_service_tests.rs"]
mod tests;
