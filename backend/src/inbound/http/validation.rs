//! Shared validation helpers for inbound HTTP adapters.

use actix_web::{HttpRequest, web};
use serde_json::json;

use crate::domain::{Error, UserId, UserValidationError};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidId,
    EmptyName,
    NameTooLong,
    EmptyEmail,
    EmailTooLong,
    InvalidEmail,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidId => "invalid_id",
            ErrorCode::EmptyName => "empty_name",
            ErrorCode::NameTooLong => "name_too_long",
            ErrorCode::EmptyEmail => "empty_email",
            ErrorCode::EmailTooLong => "email_too_long",
            ErrorCode::InvalidEmail => "invalid_email",
        }
    }
}

/// Newtype wrapper for HTTP field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

fn field_error(field: FieldName, message: impl Into<String>, code: ErrorCode) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
    }))
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    field_error(
        field,
        format!("missing required field: {name}"),
        ErrorCode::MissingField,
    )
}

pub(crate) fn require<T>(value: Option<T>, field: FieldName) -> Result<T, Error> {
    value.ok_or_else(|| missing_field_error(field))
}

/// Map a user value validation failure onto the offending field.
pub(crate) fn user_validation_error(err: UserValidationError) -> Error {
    let message = err.to_string();
    let (field, code) = match err {
        UserValidationError::InvalidId => (FieldName::new("id"), ErrorCode::InvalidId),
        UserValidationError::EmptyName => (FieldName::new("name"), ErrorCode::EmptyName),
        UserValidationError::NameTooLong { .. } => {
            (FieldName::new("name"), ErrorCode::NameTooLong)
        }
        UserValidationError::EmptyEmail => (FieldName::new("email"), ErrorCode::EmptyEmail),
        UserValidationError::EmailTooLong { .. } => {
            (FieldName::new("email"), ErrorCode::EmailTooLong)
        }
        UserValidationError::InvalidEmail => (FieldName::new("email"), ErrorCode::InvalidEmail),
    };
    field_error(field, message, code)
}

pub(crate) fn parse_user_id(raw: &str) -> Result<UserId, Error> {
    raw.parse::<UserId>().map_err(|_| {
        Error::invalid_request("id must be a positive integer").with_details(json!({
            "field": "id",
            "value": raw,
            "code": ErrorCode::InvalidId.as_str(),
        }))
    })
}

/// JSON extractor configuration reporting malformed bodies as
/// `invalid_request` payloads instead of plain-text errors.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req: &HttpRequest| {
        Error::invalid_request(format!("invalid JSON body: {err}")).into()
    })
}

/// Query extractor configuration mirroring [`json_config`].
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req: &HttpRequest| {
        Error::invalid_request(format!("invalid query string: {err}")).into()
    })
}
