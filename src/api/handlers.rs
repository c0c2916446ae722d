//! HTTP request handlers for the working-time API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::reconcile;
use crate::config::PauseRules;
use crate::error::EngineError;
use crate::models::{EmployeeDraft, WeekKey, WeekRecord};

use super::request::{
    CalculationRequest, EmployeeRequest, SaveWeekRequest, validate_entered_times,
};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

type HandlerResult = Result<Response, ApiErrorResponse>;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/settings", get(get_settings).put(put_settings))
        .route("/employees", get(list_employees).post(create_employee))
        .route(
            "/employees/:id",
            put(update_employee).delete(delete_employee),
        )
        .route(
            "/weeks/:year/:week/employees/:id",
            get(get_week_record).put(put_week_record),
        )
        .route("/weeks/:year/:week/save", post(save_week))
        .route("/weeks/:year/:week/report", get(week_report))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Reconciles the given week without reading or writing stored data.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> HandlerResult {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = parse_body(payload, correlation_id)?;
    validate_entered_times(&request.week).map_err(|err| engine_error(err, correlation_id))?;

    let rules = match request.pause_rules {
        Some(rules) => rules,
        None => state.ledger().await.settings().clone(),
    };

    let start_time = Instant::now();
    let result = reconcile(&request.week, &request.employee, &rules);
    info!(
        correlation_id = %correlation_id,
        employee_id = %result.employee_id,
        weekly_total = result.weekly_total_minutes,
        difference = result.difference_minutes,
        duration_us = start_time.elapsed().as_micros(),
        "Calculation completed successfully"
    );

    Ok(json_response(StatusCode::OK, &result))
}

async fn get_settings(State(state): State<AppState>) -> HandlerResult {
    let ledger = state.ledger().await;
    Ok(json_response(StatusCode::OK, ledger.settings()))
}

async fn put_settings(
    State(state): State<AppState>,
    payload: Result<Json<PauseRules>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Updating pause rules");

    let rules = parse_body(payload, correlation_id)?;
    let stored = rules.clone();
    state
        .transact(|ledger| {
            ledger.update_settings(rules);
            Ok(())
        })
        .await
        .map_err(|err| engine_error(err, correlation_id))?;

    Ok(json_response(StatusCode::OK, &stored))
}

async fn list_employees(State(state): State<AppState>) -> HandlerResult {
    let ledger = state.ledger().await;
    Ok(json_response(StatusCode::OK, ledger.employees()))
}

async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Creating employee");

    let draft = parse_employee(payload, correlation_id)?;
    let employee = state
        .transact(|ledger| ledger.add_employee(draft))
        .await
        .map_err(|err| engine_error(err, correlation_id))?;

    Ok(json_response(StatusCode::CREATED, &employee))
}

async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, employee_id = %id, "Updating employee");

    let draft = parse_employee(payload, correlation_id)?;
    let employee = state
        .transact(|ledger| ledger.update_employee(&id, draft))
        .await
        .map_err(|err| engine_error(err, correlation_id))?;

    Ok(json_response(StatusCode::OK, &employee))
}

async fn delete_employee(State(state): State<AppState>, Path(id): Path<String>) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, employee_id = %id, "Removing employee");

    state
        .transact(|ledger| ledger.remove_employee(&id))
        .await
        .map_err(|err| engine_error(err, correlation_id))?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

async fn get_week_record(
    State(state): State<AppState>,
    Path((year, week, id)): Path<(i32, u32, String)>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let key = WeekKey::new(year, week).map_err(|err| engine_error(err, correlation_id))?;

    let ledger = state.ledger().await;
    let record = ledger
        .prefilled_week_record(&id, key)
        .map_err(|err| engine_error(err, correlation_id))?;

    Ok(json_response(StatusCode::OK, &record))
}

async fn put_week_record(
    State(state): State<AppState>,
    Path((year, week, id)): Path<(i32, u32, String)>,
    payload: Result<Json<WeekRecord>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, employee_id = %id, year, week, "Storing week record");

    let key = WeekKey::new(year, week).map_err(|err| engine_error(err, correlation_id))?;
    let record = parse_body(payload, correlation_id)?;
    validate_entered_times(&record).map_err(|err| engine_error(err, correlation_id))?;

    let stored = state
        .transact(|ledger| {
            ledger.put_week_record(&id, key, record)?;
            Ok(ledger.week_record_or_default(&id, key))
        })
        .await
        .map_err(|err| engine_error(err, correlation_id))?;

    Ok(json_response(StatusCode::OK, &stored))
}

async fn save_week(
    State(state): State<AppState>,
    Path((year, week)): Path<(i32, u32)>,
    payload: Result<Json<SaveWeekRequest>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, year, week, "Saving week");

    let key = WeekKey::new(year, week).map_err(|err| engine_error(err, correlation_id))?;
    let rows = parse_body(payload, correlation_id)?
        .into_rows()
        .map_err(|err| engine_error(err, correlation_id))?;
    let rows_count = rows.len();

    let results = state
        .transact(|ledger| ledger.save_week(key, rows))
        .await
        .map_err(|err| engine_error(err, correlation_id))?;

    info!(
        correlation_id = %correlation_id,
        week = %key,
        rows_count,
        "Week saved and balances committed"
    );
    Ok(json_response(StatusCode::OK, &results))
}

async fn week_report(
    State(state): State<AppState>,
    Path((year, week)): Path<(i32, u32)>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let key = WeekKey::new(year, week).map_err(|err| engine_error(err, correlation_id))?;

    let rows = state.ledger().await.weekly_report(key);
    info!(correlation_id = %correlation_id, week = %key, rows_count = rows.len(), "Report built");

    Ok(json_response(StatusCode::OK, &rows))
}

fn json_response<T: Serialize + ?Sized>(status: StatusCode, body: &T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn parse_employee(
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<EmployeeDraft, ApiErrorResponse> {
    let request = parse_body(payload, correlation_id)?;
    EmployeeDraft::try_from(request).map_err(|err| engine_error(err, correlation_id))
}

fn engine_error(err: EngineError, correlation_id: Uuid) -> ApiErrorResponse {
    warn!(correlation_id = %correlation_id, error = %err, "Request failed");
    err.into()
}

/// Unwraps a JSON body, turning extractor rejections into API errors.
fn parse_body<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, ApiErrorResponse> {
    let rejection = match payload {
        Ok(Json(body)) => return Ok(body),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
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
    Err(ApiErrorResponse::bad_request(error))
}
