//! Domain primitives, ports and services.
//!
//! Purpose: hold the user model and the rules guarding it, independent of
//! HTTP and storage concerns.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic error payload.
//! - User, UserDraft, UserId, UserName, EmailAddress: the user model.
//! - UserLifecycleService: create/read/update/delete over a `UserStore`.
//! - Calculator: integer arithmetic.
//! - TraceId: request-scoped correlation identifier.

pub mod calculator;
pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_service;

pub use self::calculator::{Calculator, CalculatorError};
pub use self::error::{Error, ErrorCode};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{EmailAddress, User, UserDraft, UserId, UserName, UserValidationError};
pub use self::user_service::UserLifecycleService;
