//! Request types for the converter API.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Request body for `/convert/length` and `/convert/weight`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeasureRequest {
    /// The measure to convert.
    pub measure: Decimal,
    /// The system of the measure ("Metric" or "Imperial").
    pub system: String,
}

/// Request body for `/convert/temperature`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemperatureRequest {
    /// The temperature to convert.
    pub measure: Decimal,
    /// The scale of the temperature ("C", "F" or "K").
    pub scale: String,
    /// The destination scale.
    pub to: String,
}

/// Request body for `/convert/currency`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyRequest {
    /// The base currency code.
    pub base: String,
    /// The target currency code.
    pub target: String,
    /// The amount of base currency to convert.
    pub amount: Decimal,
}

/// A grade as sent by the client: a JSON number or a string.
///
/// Fractional numbers are accepted here so the grade store, not the JSON
/// layer, decides that they are not valid Danish grades.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GradeValue {
    /// An integer grade, e.g. `12`.
    Number(i64),
    /// A fractional grade, e.g. `7.5`.
    Float(f64),
    /// A textual grade, e.g. `"A+"` or `"12"`.
    Text(String),
}

impl fmt::Display for GradeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Request body for `/convert/grade`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeRequest {
    /// The grade to convert.
    pub grade: GradeValue,
    /// The grading system of `grade` ("Denmark" or "America").
    pub country: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_value_accepts_number_or_text() {
        let number: GradeRequest =
            serde_json::from_str(r#"{"grade": 12, "country": "Denmark"}"#).unwrap();
        assert_eq!(number.grade, GradeValue::Number(12));
        assert_eq!(number.grade.to_string(), "12");

        let text: GradeRequest =
            serde_json::from_str(r#"{"grade": "a+", "country": "America"}"#).unwrap();
        assert_eq!(text.grade, GradeValue::Text("a+".to_string()));
    }

    #[test]
    fn test_grade_value_accepts_fractional_number() {
        let request: GradeRequest =
            serde_json::from_str(r#"{"grade": 7.5, "country": "Denmark"}"#).unwrap();
        assert_eq!(request.grade, GradeValue::Float(7.5));
        assert_eq!(request.grade.to_string(), "7.5");
    }

    #[test]
    fn test_measure_accepts_number_or_string() {
        let request: MeasureRequest =
            serde_json::from_str(r#"{"measure": "100.5", "system": "Metric"}"#).unwrap();
        assert_eq!(request.measure, Decimal::new(1005, 1));

        let request: MeasureRequest =
            serde_json::from_str(r#"{"measure": 100, "system": "Metric"}"#).unwrap();
        assert_eq!(request.measure, Decimal::from(100));
    }
}
