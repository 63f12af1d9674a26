//! Persistence adapters implementing the domain storage ports.
//!
//! Adapters translate between their storage representation and domain
//! types. They hold no business rules beyond the constraints the port
//! contract asks storage to enforce (email uniqueness, immutable ids).
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use user_registry::domain::UserLifecycleService;
//! use user_registry::outbound::persistence::InMemoryUserStore;
//!
//! let service = UserLifecycleService::new(Arc::new(InMemoryUserStore::new()));
//! # let _ = service;
//! ```

mod in_memory_user_store;

pub use in_memory_user_store::InMemoryUserStore;
