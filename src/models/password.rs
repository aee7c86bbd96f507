//! Password field validation.

use crate::error::{ExerciseError, ExerciseResult};

/// The shortest accepted password, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// The longest accepted password, in characters.
pub const MAX_PASSWORD_LENGTH: usize = 10;

/// A password that has passed length validation.
///
/// The password is stored exactly as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordField {
    password: String,
}

impl PasswordField {
    /// Validates and stores a password of 6 to 10 characters.
    ///
    /// # Examples
    ///
    /// ```
    /// use boundary_exercises::models::PasswordField;
    ///
    /// let field = PasswordField::new("abcdef").unwrap();
    /// assert_eq!(field.password(), "abcdef");
    /// assert!(PasswordField::new("abcde").is_err());
    /// ```
    pub fn new(password: &str) -> ExerciseResult<Self> {
        let length = password.chars().count();
        if length < MIN_PASSWORD_LENGTH {
            return Err(ExerciseError::PasswordTooShort {
                min: MIN_PASSWORD_LENGTH,
            });
        }
        if length > MAX_PASSWORD_LENGTH {
            return Err(ExerciseError::PasswordTooLong {
                max: MAX_PASSWORD_LENGTH,
            });
        }
        Ok(Self {
            password: password.to_string(),
        })
    }

    /// Returns the stored password.
    pub fn password(&self) -> &str {
        &self.password
    }
}
