//! Validated domain records for the boundary exercises.
//!
//! This module contains the password field and the employee record. Both
//! validate their input on construction and on every mutation.

mod employee;
mod password;

pub use employee::{
    DATE_FORMAT, Department, EDUCATION_SUPPLEMENT, EducationLevel, Employee, MAX_BASE_SALARY,
    MIN_AGE_DAYS, MIN_BASE_SALARY, NewEmployee, RecordDate,
};
pub use password::{MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH, PasswordField};
