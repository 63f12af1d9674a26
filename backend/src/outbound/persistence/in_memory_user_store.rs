//! Process-local [`UserStore`] adapter.
//!
//! Records live in a mutex-guarded map. Identifiers come from a counter that
//! starts at 1 and never reuses a value, even after deletion. Email
//! uniqueness is enforced under the same lock as the write so concurrent
//! creates cannot both succeed.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{UserStore, UserStoreError};
use crate::domain::{EmailAddress, User, UserDraft, UserId};

#[derive(Debug)]
struct Records {
    users: BTreeMap<UserId, User>,
    last_id: u64,
}

impl Records {
    fn email_holder(&self, email: &EmailAddress) -> Option<UserId> {
        self.users
            .values()
            .find(|user| user.email() == email)
            .map(User::id)
    }
}

/// In-memory user store.
#[derive(Debug)]
pub struct InMemoryUserStore {
    records: Mutex<Records>,
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self {
            records: Mutex::new(Records {
                users: BTreeMap::new(),
                last_id: 0,
            }),
        }
    }
}

impl InMemoryUserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Records>, UserStoreError> {
        self.records
            .lock()
            .map_err(|_| UserStoreError::query("user store lock poisoned"))
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserStoreError> {
        Ok(self.lock()?.users.get(&id).cloned())
    }

    async fn exists_by_email(&self, email: &EmailAddress) -> Result<bool, UserStoreError> {
        Ok(self.lock()?.email_holder(email).is_some())
    }

    async fn save(&self, draft: &UserDraft) -> Result<User, UserStoreError> {
        let mut records = self.lock()?;
        if records.email_holder(&draft.email).is_some() {
            return Err(UserStoreError::duplicate_email(draft.email.as_ref()));
        }
        let next = records
            .last_id
            .checked_add(1)
            .ok_or_else(|| UserStoreError::query("user id space exhausted"))?;
        let id = UserId::new(next).map_err(|err| UserStoreError::query(err.to_string()))?;
        let user = User::from_draft(id, draft.clone());
        records.last_id = next;
        records.users.insert(id, user.clone());
        Ok(user)
    }

    async fn update(&self, id: UserId, draft: &UserDraft) -> Result<User, UserStoreError> {
        let mut records = self.lock()?;
        if !records.users.contains_key(&id) {
            return Err(UserStoreError::missing(id.get()));
        }
        if records
            .email_holder(&draft.email)
            .is_some_and(|holder| holder != id)
        {
            return Err(UserStoreError::duplicate_email(draft.email.as_ref()));
        }
        let user = User::from_draft(id, draft.clone());
        records.users.insert(id, user.clone());
        Ok(user)
    }

    async fn delete(&self, user: &User) -> Result<(), UserStoreError> {
        self.lock()?
            .users
            .remove(&user.id())
            .map(|_| ())
            .ok_or_else(|| UserStoreError::missing(user.id().get()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn draft(name: &str, email: &str) -> UserDraft {
        UserDraft::try_from_strings(name, email).expect("fixture draft is valid")
    }

    #[fixture]
    fn store() -> InMemoryUserStore {
        InMemoryUserStore::new()
    }

    #[rstest]
    #[tokio::test]
    async fn save_assigns_sequential_ids(store: InMemoryUserStore) {
        let john = store
            .save(&draft("John", "john@example.com"))
            .await
            .expect("save john");
        let jane = store
            .save(&draft("Jane", "jane@example.com"))
            .await
            .expect("save jane");

        assert_eq!(john.id().get(), 1);
        assert_eq!(jane.id().get(), 2);
        assert_eq!(
            store.find_by_id(john.id()).await.expect("lookup"),
            Some(john)
        );
    }

    #[rstest]
    #[tokio::test]
    async fn save_rejects_duplicate_email(store: InMemoryUserStore) {
        store
            .save(&draft("John", "john@example.com"))
            .await
            .expect("first save");

        let error = store
            .save(&draft("Jane", "john@example.com"))
            .await
            .expect_err("duplicate email");
        assert_eq!(error, UserStoreError::duplicate_email("john@example.com"));
    }

    #[rstest]
    #[tokio::test]
    async fn exists_by_email_tracks_stored_users(store: InMemoryUserStore) {
        let email = EmailAddress::new("john@example.com").expect("valid email");
        assert!(!store.exists_by_email(&email).await.expect("lookup"));

        store
            .save(&draft("John", "john@example.com"))
            .await
            .expect("save");
        assert!(store.exists_by_email(&email).await.expect("lookup"));
    }

    #[rstest]
    #[tokio::test]
    async fn update_keeps_id_and_replaces_fields(store: InMemoryUserStore) {
        let john = store
            .save(&draft("John", "john@example.com"))
            .await
            .expect("save");

        let updated = store
            .update(john.id(), &draft("John Updated", "john@example.com"))
            .await
            .expect("update");

        assert_eq!(updated.id(), john.id());
        assert_eq!(updated.name().as_ref(), "John Updated");
        assert_eq!(
            store.find_by_id(john.id()).await.expect("lookup"),
            Some(updated)
        );
    }

    #[rstest]
    #[tokio::test]
    async fn update_rejects_email_held_by_another_user(store: InMemoryUserStore) {
        let john = store
            .save(&draft("John", "john@example.com"))
            .await
            .expect("save john");
        store
            .save(&draft("Jane", "jane@example.com"))
            .await
            .expect("save jane");

        let error = store
            .update(john.id(), &draft("John", "jane@example.com"))
            .await
            .expect_err("email taken");
        assert_eq!(error, UserStoreError::duplicate_email("jane@example.com"));
    }

    #[rstest]
    #[tokio::test]
    async fn update_of_unknown_id_is_missing(store: InMemoryUserStore) {
        let id = UserId::new(5).expect("valid id");
        let error = store
            .update(id, &draft("Ghost", "ghost@example.com"))
            .await
            .expect_err("unknown id");
        assert_eq!(error, UserStoreError::missing(5_u64));
    }

    #[rstest]
    #[tokio::test]
    async fn delete_removes_record_and_ids_are_not_reused(store: InMemoryUserStore) {
        let john = store
            .save(&draft("John", "john@example.com"))
            .await
            .expect("save");
        store.delete(&john).await.expect("delete");

        assert_eq!(store.find_by_id(john.id()).await.expect("lookup"), None);
        assert_eq!(
            store.delete(&john).await,
            Err(UserStoreError::missing(1_u64))
        );

        let next = store
            .save(&draft("John", "john@example.com"))
            .await
            .expect("email is free again");
        assert_eq!(next.id().get(), 2);
    }
}
