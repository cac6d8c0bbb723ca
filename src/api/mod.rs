//! HTTP API module for the Payroll Computation Engine.
//!
//! This module provides the REST API endpoints for calculating monthly
//! payslips under the Philippine statutory contribution and withholding
//! tax rules.

mod handlers;
mod request;
mod response;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::ApiError;
