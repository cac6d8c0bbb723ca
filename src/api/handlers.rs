//! HTTP request handlers for the Payroll Computation Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::rejection::JsonRejection,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_payslip;
use crate::models::{Employee, PayHead};

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse};

/// Creates the API router with all endpoints.
pub fn create_router() -> Router {
    Router::new().route("/calculate", post(calculate_handler))
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a calculation request and returns the calculated payslip.
async fn calculate_handler(
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Convert request types to domain types
    let employee: Employee = request.employee.into();
    let pay_heads: Vec<PayHead> = request.pay_heads.into_iter().map(Into::into).collect();

    // Validate the inputs before calculating
    if let Err(err) = employee.validate() {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Invalid employee"
        );
        let api_error: ApiErrorResponse = err.into();
        return (
            api_error.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(api_error.error),
        )
            .into_response();
    }
    for pay_head in &pay_heads {
        if let Err(err) = pay_head.validate() {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Invalid pay head"
            );
            let api_error: ApiErrorResponse = err.into();
            return (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response();
        }
    }

    // Perform the calculation
    let start_time = Instant::now();
    let result = calculate_payslip(&employee, &pay_heads, request.pay_month);
    let duration = start_time.elapsed();

    if !result.audit_trace.warnings.is_empty() {
        warn!(
            correlation_id = %correlation_id,
            employee_id = %employee.id,
            warnings = result.audit_trace.warnings.len(),
            "Calculation produced warnings"
        );
    }

    info!(
        correlation_id = %correlation_id,
        employee_id = %employee.id,
        pay_heads_count = pay_heads.len(),
        net_salary = %result.totals.net_salary,
        duration_us = duration.as_micros(),
        "Calculation completed successfully"
    );
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(result),
    )
        .into_response()
}
