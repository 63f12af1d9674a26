//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay free of `ToSchema` derives. The wrappers below mirror
//! their serialised shape so the generated document matches the wire format.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The request conflicts with existing state, e.g. a taken email.
    #[schema(rename = "conflict")]
    Conflict,
    /// A backing dependency is temporarily unavailable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "not_found")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "User not found")]
    message: String,
    /// Correlation identifier matching the `trace-id` response header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Field-level details, e.g. `{"field": "email", "code": "invalid_email"}`.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = User)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    /// Store-assigned identifier, starting at 1.
    #[schema(minimum = 1, example = 1)]
    id: u64,
    /// Display name, 1 to 100 characters.
    #[schema(example = "John")]
    name: String,
    /// Unique contact address.
    #[schema(example = "john@example.com")]
    email: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::PartialSchema;

    fn schema_to_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[rstest]
    fn schema_names_match_domain_types() {
        assert_eq!(ErrorCodeSchema::name(), "ErrorCode");
        assert_eq!(ErrorSchema::name(), "Error");
        assert_eq!(UserSchema::name(), "User");
    }

    #[rstest]
    #[case("invalid_request")]
    #[case("not_found")]
    #[case("conflict")]
    #[case("service_unavailable")]
    #[case("internal_error")]
    fn error_code_schema_lists_every_code(#[case] code: &str) {
        assert!(schema_to_json::<ErrorCodeSchema>().contains(code), "missing {code}");
    }

    #[rstest]
    fn error_schema_uses_camel_case_trace_id() {
        let schema_json = schema_to_json::<ErrorSchema>();
        assert!(schema_json.contains("traceId"));
        assert!(!schema_json.contains("trace_id"));
    }

    #[rstest]
    fn user_schema_lists_wire_fields() {
        let schema_json = schema_to_json::<UserSchema>();
        for field in ["\"id\"", "\"name\"", "\"email\""] {
            assert!(schema_json.contains(field), "missing {field}");
        }
    }
}
