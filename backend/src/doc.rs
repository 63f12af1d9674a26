//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer together
//! with the schema wrappers from [`crate::inbound::http::schemas`], keeping
//! domain types free of utoipa derives.
//!
//! The document backs Swagger UI in debug builds and is exported via
//! `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::calculator::CalculationResponse;
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, UserSchema};
use crate::inbound::http::users::UserRequest;
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User registry API",
        description = "Create, read, update and delete users; add integers; probe health."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::calculator::add,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserSchema,
        UserRequest,
        ErrorSchema,
        ErrorCodeSchema,
        CalculationResponse
    )),
    tags(
        (name = "users", description = "User lifecycle operations"),
        (name = "calculator", description = "Integer arithmetic"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
