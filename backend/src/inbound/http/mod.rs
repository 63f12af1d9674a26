//! HTTP inbound adapter exposing REST endpoints.

pub mod calculator;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
pub mod users;
pub mod validation;

pub use error::ApiResult;
