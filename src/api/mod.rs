//! HTTP API for the unit converters.
//!
//! Exposes the length, weight, temperature, currency and grade converters as
//! JSON endpoints. Validation errors map to 400 responses, and a conversion
//! with no available answer returns 200 with `"converted": null`.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CurrencyRequest, GradeRequest, GradeValue, MeasureRequest, TemperatureRequest};
pub use response::{
    ApiError, ApiErrorResponse, CurrencyResponse, GradeResponse, GradesResponse, MeasureResponse,
    TemperatureResponse,
};
pub use state::AppState;
