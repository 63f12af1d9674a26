//! Outbound adapters implementing domain ports for infrastructure.
//!
//! - **persistence**: storage-backed implementations of `UserStore`
//!
//! Adapters are thin translators between domain types and storage
//! representations.

pub mod persistence;
