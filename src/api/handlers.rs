//! HTTP request handlers for the converter API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::conversion::{Currency, GradingCountry, Length, Temperature, TemperatureScale, Weight};
use crate::error::ExerciseResult;

use super::request::{CurrencyRequest, GradeRequest, MeasureRequest, TemperatureRequest};
use super::response::{
    ApiError, ApiErrorResponse, CurrencyResponse, GradeResponse, GradesResponse, MeasureResponse,
    TemperatureResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/convert/length", post(convert_length_handler))
        .route("/convert/weight", post(convert_weight_handler))
        .route("/convert/temperature", post(convert_temperature_handler))
        .route("/convert/currency", post(convert_currency_handler))
        .route("/convert/grade", post(convert_grade_handler))
        .route("/grades", get(list_grades_handler))
        .with_state(state)
}

/// Unwraps a JSON body or builds the 400 response for the rejection.
fn parse_json<T>(
    correlation_id: Uuid,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, Response> {
    let rejection = match payload {
        Ok(Json(request)) => return Ok(request),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's description of the problem
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
    Err((StatusCode::BAD_REQUEST, Json(error)).into_response())
}

/// Builds the response for a conversion outcome.
fn respond<T: Serialize>(correlation_id: Uuid, outcome: ExerciseResult<T>) -> Response {
    match outcome {
        Ok(body) => {
            info!(correlation_id = %correlation_id, "Conversion completed");
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Conversion failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Runs a conversion that touches the network or the grade store on the
/// blocking thread pool and builds the response for its outcome.
async fn respond_blocking<T, F>(correlation_id: Uuid, task: F) -> Response
where
    T: Serialize + Send + 'static,
    F: FnOnce() -> ExerciseResult<T> + Send + 'static,
{
    match tokio::task::spawn_blocking(task).await {
        Ok(outcome) => respond(correlation_id, outcome),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Blocking conversion task failed"
            );
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::internal("Conversion did not complete")),
            )
                .into_response()
        }
    }
}

/// Handler for POST /convert/length.
async fn convert_length_handler(payload: Result<Json<MeasureRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing length conversion");

    let request = match parse_json(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let outcome = Length::new(request.measure, &request.system).and_then(|length| {
        Ok(MeasureResponse {
            measure: length.measure(),
            from: length.system(),
            to: length.system().other(),
            converted: length.convert()?,
        })
    });
    respond(correlation_id, outcome)
}

/// Handler for POST /convert/weight.
async fn convert_weight_handler(payload: Result<Json<MeasureRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing weight conversion");

    let request = match parse_json(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let outcome = Weight::new(request.measure, &request.system).and_then(|weight| {
        Ok(MeasureResponse {
            measure: weight.measure(),
            from: weight.system(),
            to: weight.system().other(),
            converted: weight.convert()?,
        })
    });
    respond(correlation_id, outcome)
}

/// Handler for POST /convert/temperature.
async fn convert_temperature_handler(
    payload: Result<Json<TemperatureRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing temperature conversion");

    let request = match parse_json(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let outcome = Temperature::new(request.measure, &request.scale).and_then(|temperature| {
        let to: TemperatureScale = request.to.parse()?;
        Ok(TemperatureResponse {
            measure: temperature.measure(),
            from: temperature.scale(),
            to,
            converted: temperature.convert_to(to)?,
        })
    });
    respond(correlation_id, outcome)
}

/// Handler for POST /convert/currency.
async fn convert_currency_handler(
    State(state): State<AppState>,
    payload: Result<Json<CurrencyRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing currency conversion");

    let request = match parse_json(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let rates = state.rates();
    respond_blocking(correlation_id, move || {
        let currency = Currency::new(&request.base, rates)?;
        let converted = currency.convert(request.amount, &request.target)?;
        Ok(CurrencyResponse {
            base: currency.base().to_string(),
            target: request.target.to_uppercase(),
            amount: request.amount,
            converted,
        })
    })
    .await
}

/// Handler for POST /convert/grade.
async fn convert_grade_handler(
    State(state): State<AppState>,
    payload: Result<Json<GradeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing grade conversion");

    let request = match parse_json(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let grades = state.grades();
    respond_blocking(correlation_id, move || {
        let country: GradingCountry = request.country.parse()?;
        let converted = grades.convert(&request.grade, &request.country)?;
        Ok(GradeResponse {
            grade: request.grade.to_string(),
            country,
            converted,
        })
    })
    .await
}

/// Handler for GET /grades.
async fn list_grades_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Listing grade mappings");

    let store = state.grades();
    respond_blocking(correlation_id, move || {
        store.mappings().map(|grades| GradesResponse { grades })
    })
    .await
}
