//! Employee record and field validation.
//!
//! An [`Employee`] can only be built from input where every field is valid, and
//! each setter validates its value before assigning it. A rejected assignment
//! leaves the record exactly as it was.
//!
//! Date rules ("at least 18 years old", "not employed in the future") are
//! evaluated against a reference date. The plain methods use the local date;
//! the `*_on` variants take the reference date explicitly.

use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{ExerciseError, ExerciseResult};

/// The format accepted for all employee dates (`dd/mm/yyyy`).
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// The lowest accepted base salary.
pub const MIN_BASE_SALARY: Decimal = Decimal::from_parts(20_000, 0, 0, false, 0);

/// The highest accepted base salary.
pub const MAX_BASE_SALARY: Decimal = Decimal::from_parts(100_000, 0, 0, false, 0);

/// Salary supplement per educational level.
pub const EDUCATION_SUPPLEMENT: Decimal = Decimal::from_parts(1220, 0, 0, false, 0);

/// Minimum age, measured in elapsed days (18 years of 365 days).
pub const MIN_AGE_DAYS: i64 = 18 * 365;

const CPR_LENGTH: usize = 10;
const MAX_NAME_LENGTH: usize = 30;

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// The department an employee works in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Department {
    /// Human resources.
    #[serde(rename = "HR")]
    Hr,
    /// Finance.
    Finance,
    /// Information technology.
    #[serde(rename = "IT")]
    It,
    /// Sales.
    Sales,
    /// General services.
    #[serde(rename = "General Services")]
    GeneralServices,
}

impl Department {
    /// Every department, in display order.
    pub const ALL: [Department; 5] = [
        Department::Hr,
        Department::Finance,
        Department::It,
        Department::Sales,
        Department::GeneralServices,
    ];

    /// The department's name as written on employee records.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Hr => "HR",
            Self::Finance => "Finance",
            Self::It => "IT",
            Self::Sales => "Sales",
            Self::GeneralServices => "General Services",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Department {
    type Err = ExerciseError;

    /// Parses a department name. Matching is case-sensitive.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|department| department.label() == value)
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(Department::label).collect();
                ExerciseError::invalid_employee(
                    "department",
                    format!("must be one of {}", names.join(", ")),
                )
            })
    }
}

/// An employee's highest educational level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    /// Level 0.
    None,
    /// Level 1.
    Primary,
    /// Level 2.
    Secondary,
    /// Level 3.
    Tertiary,
}

impl EducationLevel {
    /// The numeric level (0 to 3).
    pub fn level(&self) -> u8 {
        match self {
            Self::None => 0,
            Self::Primary => 1,
            Self::Secondary => 2,
            Self::Tertiary => 3,
        }
    }

    /// The level's label: "none", "primary", "secondary" or "tertiary".
    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Tertiary => "tertiary",
        }
    }
}

impl TryFrom<i64> for EducationLevel {
    type Error = ExerciseError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::None),
            1 => Ok(Self::Primary),
            2 => Ok(Self::Secondary),
            3 => Ok(Self::Tertiary),
            _ => Err(ExerciseError::invalid_employee(
                "educational_level",
                "must be 0, 1, 2, or 3",
            )),
        }
    }
}

/// A calendar date kept exactly as it was written, alongside its parsed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDate {
    text: String,
    date: NaiveDate,
}

impl RecordDate {
    /// Parses a `dd/mm/yyyy` date for the named field.
    pub fn parse(field: &str, value: &str) -> ExerciseResult<Self> {
        let date = NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map_err(|_| ExerciseError::invalid_employee(field, "must be in dd/MM/yyyy format"))?;
        Ok(Self {
            text: value.to_string(),
            date,
        })
    }

    /// The date as originally written.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The parsed calendar date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

impl fmt::Display for RecordDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Unvalidated employee input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEmployee {
    /// Danish personal identification number (10 digits).
    pub cpr: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Department name, e.g. "IT".
    pub department: String,
    /// Base yearly salary.
    pub base_salary: Decimal,
    /// Educational level, 0 to 3.
    pub educational_level: i64,
    /// Date of birth, `dd/mm/yyyy`.
    pub date_of_birth: String,
    /// Date of employment, `dd/mm/yyyy`.
    pub date_of_employment: String,
    /// Country of residence.
    pub country: String,
}

/// A fully validated employee record.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    cpr: String,
    first_name: String,
    last_name: String,
    department: Department,
    base_salary: Decimal,
    educational_level: EducationLevel,
    date_of_birth: RecordDate,
    date_of_employment: RecordDate,
    country: String,
}

fn validate_cpr(value: &str) -> ExerciseResult<String> {
    if value.len() == CPR_LENGTH && value.chars().all(|c| c.is_ascii_digit()) {
        Ok(value.to_string())
    } else {
        Err(ExerciseError::invalid_employee(
            "cpr",
            "must be a string of 10 digits",
        ))
    }
}

fn validate_name(field: &str, value: &str) -> ExerciseResult<String> {
    let length = value.chars().count();
    let allowed = value
        .chars()
        .all(|c| c.is_alphabetic() || c == ' ' || c == '-');
    if (1..=MAX_NAME_LENGTH).contains(&length) && allowed {
        Ok(value.to_string())
    } else {
        Err(ExerciseError::invalid_employee(
            field,
            "must be 1-30 alphabetic characters, spaces or dashes",
        ))
    }
}

fn validate_base_salary(value: Decimal) -> ExerciseResult<Decimal> {
    if (MIN_BASE_SALARY..=MAX_BASE_SALARY).contains(&value) {
        Ok(value)
    } else {
        Err(ExerciseError::invalid_employee(
            "base_salary",
            "must be between 20000 and 100000",
        ))
    }
}

fn validate_date_of_birth(value: &str, today: NaiveDate) -> ExerciseResult<RecordDate> {
    let date_of_birth = RecordDate::parse("date_of_birth", value)?;
    if (today - date_of_birth.date()).num_days() >= MIN_AGE_DAYS {
        Ok(date_of_birth)
    } else {
        Err(ExerciseError::invalid_employee(
            "date_of_birth",
            "employee must be at least 18 years old",
        ))
    }
}

fn validate_date_of_employment(value: &str, today: NaiveDate) -> ExerciseResult<RecordDate> {
    let date_of_employment = RecordDate::parse("date_of_employment", value)?;
    if date_of_employment.date() <= today {
        Ok(date_of_employment)
    } else {
        Err(ExerciseError::invalid_employee(
            "date_of_employment",
            "cannot be in the future",
        ))
    }
}

fn validate_country(value: &str) -> ExerciseResult<String> {
    if value.is_empty() {
        Err(ExerciseError::invalid_employee(
            "country",
            "must be a non-empty string",
        ))
    } else {
        Ok(value.to_string())
    }
}

impl Employee {
    /// Validates every field of `input` against today's date.
    ///
    /// # Examples
    ///
    /// ```
    /// use boundary_exercises::models::{Employee, NewEmployee};
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee::new(NewEmployee {
    ///     cpr: "1234567890".to_string(),
    ///     first_name: "John".to_string(),
    ///     last_name: "Doe".to_string(),
    ///     department: "IT".to_string(),
    ///     base_salary: Decimal::from(50_000),
    ///     educational_level: 2,
    ///     date_of_birth: "11/09/1990".to_string(),
    ///     date_of_employment: "11/09/2020".to_string(),
    ///     country: "Denmark".to_string(),
    /// })
    /// .unwrap();
    ///
    /// assert_eq!(employee.salary(), Decimal::from(52_440));
    /// assert_eq!(employee.shipping_costs(), Decimal::ZERO);
    /// ```
    pub fn new(input: NewEmployee) -> ExerciseResult<Self> {
        Self::new_on(input, today())
    }

    /// Validates every field of `input` against the given reference date.
    ///
    /// Fields are checked in declaration order and the first failure is returned.
    pub fn new_on(input: NewEmployee, today: NaiveDate) -> ExerciseResult<Self> {
        Ok(Self {
            cpr: validate_cpr(&input.cpr)?,
            first_name: validate_name("first_name", &input.first_name)?,
            last_name: validate_name("last_name", &input.last_name)?,
            department: input.department.parse()?,
            base_salary: validate_base_salary(input.base_salary)?,
            educational_level: EducationLevel::try_from(input.educational_level)?,
            date_of_birth: validate_date_of_birth(&input.date_of_birth, today)?,
            date_of_employment: validate_date_of_employment(&input.date_of_employment, today)?,
            country: validate_country(&input.country)?,
        })
    }

    /// Returns the CPR number.
    pub fn cpr(&self) -> &str {
        &self.cpr
    }

    /// Sets the CPR number; it must be exactly 10 digits.
    pub fn set_cpr(&mut self, value: &str) -> ExerciseResult<()> {
        self.cpr = validate_cpr(value)?;
        Ok(())
    }

    /// Returns the first name.
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Sets the first name: 1-30 letters, spaces or dashes.
    pub fn set_first_name(&mut self, value: &str) -> ExerciseResult<()> {
        self.first_name = validate_name("first_name", value)?;
        Ok(())
    }

    /// Returns the last name.
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Sets the last name: 1-30 letters, spaces or dashes.
    pub fn set_last_name(&mut self, value: &str) -> ExerciseResult<()> {
        self.last_name = validate_name("last_name", value)?;
        Ok(())
    }

    /// Returns the department.
    pub fn department(&self) -> Department {
        self.department
    }

    /// Sets the department from its exact name.
    pub fn set_department(&mut self, value: &str) -> ExerciseResult<()> {
        self.department = value.parse()?;
        Ok(())
    }

    /// Returns the base salary.
    pub fn base_salary(&self) -> Decimal {
        self.base_salary
    }

    /// Sets the base salary; it must be between 20000 and 100000 inclusive.
    pub fn set_base_salary(&mut self, value: Decimal) -> ExerciseResult<()> {
        self.base_salary = validate_base_salary(value)?;
        Ok(())
    }

    /// Returns the educational level.
    pub fn educational_level(&self) -> EducationLevel {
        self.educational_level
    }

    /// Sets the educational level from its number (0 to 3).
    pub fn set_educational_level(&mut self, value: i64) -> ExerciseResult<()> {
        self.educational_level = EducationLevel::try_from(value)?;
        Ok(())
    }

    /// Returns the date of birth.
    pub fn date_of_birth(&self) -> &RecordDate {
        &self.date_of_birth
    }

    /// Sets the date of birth, requiring an age of at least 18 today.
    pub fn set_date_of_birth(&mut self, value: &str) -> ExerciseResult<()> {
        self.set_date_of_birth_on(value, today())
    }

    /// Sets the date of birth, requiring an age of at least 18 on `today`.
    pub fn set_date_of_birth_on(&mut self, value: &str, today: NaiveDate) -> ExerciseResult<()> {
        self.date_of_birth = validate_date_of_birth(value, today)?;
        Ok(())
    }

    /// Returns the date of employment.
    pub fn date_of_employment(&self) -> &RecordDate {
        &self.date_of_employment
    }

    /// Sets the date of employment, which may not be after today.
    pub fn set_date_of_employment(&mut self, value: &str) -> ExerciseResult<()> {
        self.set_date_of_employment_on(value, today())
    }

    /// Sets the date of employment, which may not be after `today`.
    pub fn set_date_of_employment_on(
        &mut self,
        value: &str,
        today: NaiveDate,
    ) -> ExerciseResult<()> {
        self.date_of_employment = validate_date_of_employment(value, today)?;
        Ok(())
    }

    /// Returns the country.
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Sets the country; it must not be empty.
    pub fn set_country(&mut self, value: &str) -> ExerciseResult<()> {
        self.country = validate_country(value)?;
        Ok(())
    }

    /// The actual salary: base salary plus 1220 per educational level.
    pub fn salary(&self) -> Decimal {
        self.base_salary + Decimal::from(self.educational_level.level()) * EDUCATION_SUPPLEMENT
    }

    /// Staff discount percentage as of today.
    pub fn discount(&self) -> Decimal {
        self.discount_on(today())
    }

    /// Staff discount percentage: 0.5 per full 365-day year of employment.
    pub fn discount_on(&self, today: NaiveDate) -> Decimal {
        let days = (today - self.date_of_employment.date()).num_days().max(0);
        Decimal::from(days / 365) * Decimal::new(5, 1)
    }

    /// Shipping costs: free within Denmark, Norway and Sweden, 50 for Iceland
    /// and Finland, 100 everywhere else.
    pub fn shipping_costs(&self) -> Decimal {
        match self.country.as_str() {
            "Denmark" | "Norway" | "Sweden" => Decimal::ZERO,
            "Iceland" | "Finland" => Decimal::from(50),
            _ => Decimal::ONE_HUNDRED,
        }
    }
}
