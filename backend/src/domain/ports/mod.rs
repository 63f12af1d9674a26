//! Domain ports for the hexagonal boundary.
//!
//! - [`UserStore`]: driven port implemented by persistence adapters.
//! - [`UserLifecycle`]: driving port consumed by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod user_lifecycle;
mod user_store;

#[cfg(test)]
pub use user_lifecycle::MockUserLifecycle;
pub use user_lifecycle::{UserLifecycle, UserLifecycleError};
#[cfg(test)]
pub use user_store::MockUserStore;
pub use user_store::{UserStore, UserStoreError};
