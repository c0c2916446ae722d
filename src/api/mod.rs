//! HTTP API module for the working-time engine.
//!
//! This module provides the REST endpoints for maintaining the roster,
//! editing and saving weeks, changing pause rules and exporting reports.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, EmployeeRequest, SaveWeekRequest, SaveWeekRow};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
