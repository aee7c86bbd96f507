//! Integration tests for the boundary exercises.
//!
//! This suite drives the converter API end to end and exercises the
//! calculators and the employee record together:
//! - Length, weight and temperature endpoints
//! - Currency conversion through a stub and a live HTTP rate provider
//! - Grade conversion and listing against a temporary SQLite store
//! - Error responses for invalid input
//! - Cross-module pricing and validation scenarios

use std::str::FromStr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
    routing::get,
};
use chrono::{NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

use boundary_exercises::api::{AppState, create_router};
use boundary_exercises::calculation::{
    CartridgeDiscount, add, calculate_fare_discount, calculate_final_price,
    calculate_framing_price, cartridges, divide, evaluate_candidate, multiply, roman_to_decimal,
};
use boundary_exercises::config::{ConfigLoader, ConverterConfig, CurrencyConfig, GradeConfig};
use boundary_exercises::conversion::{Currency, GradeStore, RateProvider, RateTable};
use boundary_exercises::error::{ExerciseError, ExerciseResult};
use boundary_exercises::models::{Employee, NewEmployee, PasswordField};

// =============================================================================
// Test Helpers
// =============================================================================

struct CountingRates {
    calls: AtomicUsize,
}

impl RateProvider for CountingRates {
    fn latest_rates(&self, base_currency: &str) -> ExerciseResult<RateTable> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match base_currency {
            "USD" => Ok(RateTable::from([
                ("EUR".to_string(), decimal("0.92")),
                ("DKK".to_string(), decimal("6.87")),
            ])),
            other => Err(ExerciseError::RateLookup {
                message: format!("no rates for {other}"),
            }),
        }
    }
}

struct TestApp {
    _dir: TempDir,
    rates: Arc<CountingRates>,
    router: Router,
}

fn create_test_app() -> TestApp {
    let dir = TempDir::new().unwrap();
    let grades = GradeStore::open(dir.path().join("grades.db")).expect("Failed to open store");
    let rates = Arc::new(CountingRates {
        calls: AtomicUsize::new(0),
    });
    let state = AppState::with_parts(grades, rates.clone());
    TestApp {
        _dir: dir,
        rates,
        router: create_router(state),
    }
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

async fn read_json(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();
    (status, json)
}

async fn post(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    read_json(response).await
}

async fn get_json(router: &Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    read_json(response).await
}

fn as_decimal(value: &Value) -> Decimal {
    decimal(value.as_str().expect("decimal serialised as string"))
}

// =============================================================================
// Length, weight and temperature
// =============================================================================

#[tokio::test]
async fn test_length_conversion_both_directions() {
    let app = create_test_app();

    let (status, body) = post(
        &app.router,
        "/convert/length",
        json!({"measure": 100, "system": "Metric"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_decimal(&body["converted"]), decimal("39.37"));
    assert_eq!(body["from"], "metric");
    assert_eq!(body["to"], "imperial");

    let (status, body) = post(
        &app.router,
        "/convert/length",
        json!({"measure": "10", "system": "imperial"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_decimal(&body["converted"]), decimal("25.4"));
}

#[tokio::test]
async fn test_weight_conversion_rounds_input() {
    let app = create_test_app();

    let (status, body) = post(
        &app.router,
        "/convert/weight",
        json!({"measure": "70.12345", "system": "Metric"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_decimal(&body["measure"]), decimal("70.12"));
    assert_eq!(as_decimal(&body["converted"]), decimal("154.59"));
}

#[tokio::test]
async fn test_temperature_conversion() {
    let app = create_test_app();

    let (status, body) = post(
        &app.router,
        "/convert/temperature",
        json!({"measure": 25, "scale": "C", "to": "K"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_decimal(&body["converted"]), decimal("298.15"));
    assert_eq!(body["from"], "celsius");
    assert_eq!(body["to"], "kelvin");

    let (_, body) = post(
        &app.router,
        "/convert/temperature",
        json!({"measure": 77, "scale": "f", "to": "c"}),
    )
    .await;
    assert_eq!(as_decimal(&body["converted"]), decimal("25"));
}

#[tokio::test]
async fn test_unsupported_units_return_400() {
    let app = create_test_app();

    let (status, body) = post(
        &app.router,
        "/convert/length",
        json!({"measure": 100, "system": "Invalid"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "UNSUPPORTED_SYSTEM");

    let (status, body) = post(
        &app.router,
        "/convert/temperature",
        json!({"measure": 25, "scale": "C", "to": "X"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "UNSUPPORTED_SCALE");
    assert!(body["message"].as_str().unwrap().contains("'X'"));
}

// =============================================================================
// Currency
// =============================================================================

#[tokio::test]
async fn test_currency_conversion_with_rate() {
    let app = create_test_app();

    let (status, body) = post(
        &app.router,
        "/convert/currency",
        json!({"base": "USD", "target": "DKK", "amount": "10"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_decimal(&body["converted"]), decimal("68.7"));
    assert_eq!(app.rates.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_currency_same_code_skips_provider() {
    let app = create_test_app();

    let (status, body) = post(
        &app.router,
        "/convert/currency",
        json!({"base": "usd", "target": "USD", "amount": "12.345"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_decimal(&body["converted"]), decimal("12.34"));
    assert_eq!(app.rates.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_currency_unavailable_rate_returns_null() {
    let app = create_test_app();

    // Target missing from the rate table
    let (status, body) = post(
        &app.router,
        "/convert/currency",
        json!({"base": "USD", "target": "JPY", "amount": 10}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["converted"].is_null());

    // Provider failure for the base currency
    let (status, body) = post(
        &app.router,
        "/convert/currency",
        json!({"base": "GBP", "target": "EUR", "amount": 10}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["converted"].is_null());
}

#[tokio::test]
async fn test_currency_invalid_code_returns_400() {
    let app = create_test_app();

    let (status, body) = post(
        &app.router,
        "/convert/currency",
        json!({"base": "USD", "target": "EURO", "amount": 10}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_CURRENCY_CODE");
    assert_eq!(app.rates.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_currency_through_http_rate_provider() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    let rates_app = Router::new().route(
        "/v1/latest",
        get(|| async { r#"{"data": {"EUR": 0.5, "SEK": 2}}"# }),
    );
    tokio::spawn(async move {
        axum::serve(listener, rates_app).await.unwrap();
    });

    let dir = TempDir::new().unwrap();
    let config = ConverterConfig {
        currency: CurrencyConfig {
            api_url: format!("http://{address}/v1/latest"),
            api_key: "test-key".to_string(),
            timeout_secs: 5,
        },
        grades: GradeConfig {
            database_path: dir.path().join("grades.db"),
        },
    };
    let state = AppState::new(ConfigLoader::new(config)).unwrap();
    let router = create_router(state);

    let (status, body) = post(
        &router,
        "/convert/currency",
        json!({"base": "USD", "target": "SEK", "amount": 21}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_decimal(&body["converted"]), decimal("42"));

    let (status, body) = post(
        &router,
        "/convert/currency",
        json!({"base": "USD", "target": "NOK", "amount": 21}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["converted"].is_null());
}

// =============================================================================
// Grades
// =============================================================================

#[tokio::test]
async fn test_grade_conversion_both_directions() {
    let app = create_test_app();

    let (status, body) = post(
        &app.router,
        "/convert/grade",
        json!({"grade": 12, "country": "Denmark"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["converted"], "A+");

    let (status, body) = post(
        &app.router,
        "/convert/grade",
        json!({"grade": "b", "country": "AMERICA"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["converted"], "7");
    assert_eq!(body["country"], "america");
}

#[tokio::test]
async fn test_grade_errors() {
    let app = create_test_app();

    let (status, body) = post(
        &app.router,
        "/convert/grade",
        json!({"grade": 12, "country": "Mars"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "UNSUPPORTED_COUNTRY");

    let (status, body) = post(
        &app.router,
        "/convert/grade",
        json!({"grade": "twelve", "country": "Denmark"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_GRADE");
}

#[tokio::test]
async fn test_list_grades() {
    let app = create_test_app();

    let (status, body) = get_json(&app.router, "/grades").await;
    assert_eq!(status, StatusCode::OK);

    let grades = body["grades"].as_array().unwrap();
    assert_eq!(grades.len(), 7);
    assert_eq!(grades[0]["danish_grade"], 12);
    assert_eq!(grades[0]["american_grade"], "A+");
    assert_eq!(grades[0]["description"], "Excellent");
    assert_eq!(grades[6]["danish_grade"], -3);
}

#[tokio::test]
async fn test_missing_content_type_returns_400() {
    let app = create_test_app();

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/convert/length")
                .body(Body::from(r#"{"measure": 1, "system": "Metric"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    let (status, body) = read_json(response).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MISSING_CONTENT_TYPE");
}

// =============================================================================
// Library scenarios
// =============================================================================

#[test]
fn test_roman_numerals_feed_the_calculator() {
    let total = add(
        Decimal::from(roman_to_decimal("MCMXCIV").unwrap()),
        Decimal::from(roman_to_decimal("VI").unwrap()),
    )
    .unwrap();
    assert_eq!(total, Decimal::from(2000));

    let half = divide(total, Decimal::from(roman_to_decimal("II").unwrap())).unwrap();
    assert_eq!(half, Decimal::from(1000));

    assert!(matches!(
        divide(total, Decimal::from(roman_to_decimal("").unwrap())),
        Err(ExerciseError::DivisionByZero)
    ));
}

#[test]
fn test_framed_pictures_through_the_shop() {
    // Frames are priced above 800 kr, so every order gets the 10% band
    let large = calculate_framing_price(decimal("50"), decimal("40")).unwrap();
    let order = multiply(large, Decimal::TWO).unwrap();
    let price = calculate_final_price(order).unwrap();
    assert_eq!(price.discount_percent, Decimal::from(10));
    assert_eq!(price.final_price, decimal("6300"));

    let standard = calculate_framing_price(decimal("40"), decimal("40")).unwrap();
    assert_eq!(standard, Decimal::from(3000));
    assert_eq!(
        calculate_final_price(standard).unwrap().final_price,
        decimal("2700")
    );
}

#[test]
fn test_cartridge_order_boundaries() {
    assert!(cartridges(4).is_err());
    assert_eq!(cartridges(5).unwrap(), CartridgeDiscount::NoDiscount);
    assert_eq!(cartridges(100).unwrap(), CartridgeDiscount::TwentyPercent);
    assert_eq!(cartridges(100).unwrap().message(), "you get 20% discound");
}

#[test]
fn test_driving_student_trip() {
    let decision = evaluate_candidate(90, 1);
    assert!(decision.license_granted);

    // A newly licensed adult flying out on a Tuesday for a week
    let discount = calculate_fare_discount(19, "India", Weekday::Tue, 7);
    assert_eq!(discount, decimal("0.3"));
}

#[test]
fn test_employee_record_with_converted_salary() {
    let today = date(2025, 6, 15);
    let employee = Employee::new_on(
        NewEmployee {
            cpr: "0101901234".to_string(),
            first_name: "Anna".to_string(),
            last_name: "Berg-Holm".to_string(),
            department: "Finance".to_string(),
            base_salary: Decimal::from(40_000),
            educational_level: 3,
            date_of_birth: "01/01/1990".to_string(),
            date_of_employment: "15/06/2015".to_string(),
            country: "Iceland".to_string(),
        },
        today,
    )
    .unwrap();

    assert_eq!(employee.salary(), Decimal::from(43_660));
    assert_eq!(employee.discount_on(today), Decimal::from(5));
    assert_eq!(employee.shipping_costs(), Decimal::from(50));

    let rates: Arc<dyn RateProvider> = Arc::new(CountingRates {
        calls: AtomicUsize::new(0),
    });
    let dkk_to_dkk = Currency::new("DKK", rates).unwrap();
    assert_eq!(
        dkk_to_dkk.convert(employee.salary(), "dkk").unwrap(),
        Some(Decimal::from(43_660))
    );

    assert!(PasswordField::new("s3cret!").is_ok());
}
