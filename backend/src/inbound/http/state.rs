//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend only
//! on domain ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::Calculator;
use crate::domain::ports::UserLifecycle;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UserLifecycle>,
    pub calculator: Calculator,
}

impl HttpState {
    /// Construct state around a user lifecycle implementation.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use user_registry::domain::UserLifecycleService;
    /// use user_registry::inbound::http::state::HttpState;
    /// use user_registry::outbound::persistence::InMemoryUserStore;
    ///
    /// let service = UserLifecycleService::new(Arc::new(InMemoryUserStore::new()));
    /// let state = HttpState::new(Arc::new(service));
    /// let _users = state.users.clone();
    /// ```
    pub fn new(users: Arc<dyn UserLifecycle>) -> Self {
        Self {
            users,
            calculator: Calculator,
        }
    }
}
