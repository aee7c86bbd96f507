//! Response types for the converter API.
//!
//! This module defines the success bodies, the error response structure and
//! the mapping from [`ExerciseError`] to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::conversion::{GradeMapping, GradingCountry, MeasurementSystem, TemperatureScale};
use crate::error::ExerciseError;

/// Response body for length and weight conversions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeasureResponse {
    /// The stored input measure, rounded to 2 decimals.
    pub measure: Decimal,
    /// The system of the input.
    pub from: MeasurementSystem,
    /// The system of the result.
    pub to: MeasurementSystem,
    /// The converted measure.
    pub converted: Decimal,
}

/// Response body for temperature conversions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemperatureResponse {
    /// The stored input temperature, rounded to 2 decimals.
    pub measure: Decimal,
    /// The scale of the input.
    pub from: TemperatureScale,
    /// The scale of the result.
    pub to: TemperatureScale,
    /// The converted temperature.
    pub converted: Decimal,
}

/// Response body for currency conversions.
///
/// `converted` is `null` when no rate was available.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyResponse {
    /// The upper-case base currency code.
    pub base: String,
    /// The upper-case target currency code.
    pub target: String,
    /// The amount that was converted.
    pub amount: Decimal,
    /// The converted amount, if a rate was available.
    pub converted: Option<Decimal>,
}

/// Response body for grade conversions.
///
/// `converted` is `null` when no row matches the grade.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeResponse {
    /// The grade as received.
    pub grade: String,
    /// The grading system of `grade`.
    pub country: GradingCountry,
    /// The equivalent grade, if one exists.
    pub converted: Option<String>,
}

/// Response body for `GET /grades`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradesResponse {
    /// Every stored mapping in insertion order.
    pub grades: Vec<GradeMapping>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an internal error response.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    fn bad_request(code: &str, error: &ExerciseError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: ApiError::new(code, error.to_string()),
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<ExerciseError> for ApiErrorResponse {
    fn from(error: ExerciseError) -> Self {
        match &error {
            ExerciseError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            ExerciseError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            ExerciseError::GradeStore { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "STORAGE_ERROR",
                    "Grade store error",
                    message.clone(),
                ),
            },
            ExerciseError::RateLookup { message } => ApiErrorResponse {
                status: StatusCode::BAD_GATEWAY,
                error: ApiError::with_details(
                    "RATE_LOOKUP_ERROR",
                    "Rate lookup failed",
                    message.clone(),
                ),
            },
            ExerciseError::ArithmeticOverflow { .. } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::new("ARITHMETIC_OVERFLOW", error.to_string()),
            },
            ExerciseError::UnsupportedMeasurementSystem { .. } => {
                Self::bad_request("UNSUPPORTED_SYSTEM", &error)
            }
            ExerciseError::UnsupportedTemperatureScale { .. } => {
                Self::bad_request("UNSUPPORTED_SCALE", &error)
            }
            ExerciseError::InvalidCurrencyCode { .. } => {
                Self::bad_request("INVALID_CURRENCY_CODE", &error)
            }
            ExerciseError::UnsupportedGradingCountry { .. } => {
                Self::bad_request("UNSUPPORTED_COUNTRY", &error)
            }
            ExerciseError::InvalidGrade { .. } => Self::bad_request("INVALID_GRADE", &error),
            _ => Self::bad_request("VALIDATION_ERROR", &error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_validation_errors_are_bad_requests() {
        let api_error: ApiErrorResponse = ExerciseError::UnsupportedGradingCountry {
            country: "Mars".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "UNSUPPORTED_COUNTRY");
        assert!(api_error.error.message.contains("Mars"));

        let api_error: ApiErrorResponse = ExerciseError::DivisionByZero.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "VALIDATION_ERROR");
    }

    #[test]
    fn test_storage_errors_are_server_errors() {
        let api_error: ApiErrorResponse = ExerciseError::GradeStore {
            message: "disk I/O error".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.details.as_deref(), Some("disk I/O error"));
    }

    #[test]
    fn test_none_result_serializes_as_null() {
        let response = CurrencyResponse {
            base: "USD".to_string(),
            target: "EUR".to_string(),
            amount: Decimal::from(10),
            converted: None,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json["converted"].is_null());
        assert_eq!(json["amount"], "10");
    }
}
