//! Calculator API handlers.
//!
//! ```text
//! GET /api/calculator/add?a=5&b=3  ->  {"result":8}
//! ```

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Operands for [`add`].
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AddQuery {
    /// Left operand.
    pub a: i64,
    /// Right operand.
    pub b: i64,
}

/// Result of an arithmetic operation.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct CalculationResponse {
    #[schema(example = 8)]
    pub result: i64,
}

/// Add two integers.
#[utoipa::path(
    get,
    path = "/api/calculator/add",
    params(AddQuery),
    responses(
        (status = 200, description = "Sum of both operands", body = CalculationResponse),
        (status = 400, description = "Missing operand or overflow", body = ErrorSchema)
    ),
    tags = ["calculator"],
    operation_id = "add"
)]
#[get("/calculator/add")]
pub async fn add(
    state: web::Data<HttpState>,
    query: web::Query<AddQuery>,
) -> ApiResult<web::Json<CalculationResponse>> {
    let AddQuery { a, b } = query.into_inner();
    let result = state.calculator.add(a, b)?;
    Ok(web::Json(CalculationResponse { result }))
}
