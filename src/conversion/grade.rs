//! Danish/American grade conversion backed by a SQLite reference table.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use rusqlite::{Connection, OptionalExtension, params};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{ExerciseError, ExerciseResult};

/// Rows written into an empty store: Danish grade, American grade, description.
pub const SEED_GRADES: [(i64, &str, &str); 7] = [
    (12, "A+", "Excellent"),
    (10, "A", "Very Good"),
    (7, "B", "Good"),
    (4, "C", "Fair"),
    (2, "D", "Adequate"),
    (0, "F", "Not Acceptable"),
    (-3, "F", "Inadequate"),
];

/// The grading system a grade is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradingCountry {
    /// The Danish 7-step scale.
    Denmark,
    /// American letter grades.
    America,
}

impl fmt::Display for GradingCountry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Denmark => f.write_str("Denmark"),
            Self::America => f.write_str("America"),
        }
    }
}

impl FromStr for GradingCountry {
    type Err = ExerciseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "denmark" => Ok(Self::Denmark),
            "america" => Ok(Self::America),
            _ => Err(ExerciseError::UnsupportedGradingCountry {
                country: value.to_string(),
            }),
        }
    }
}

/// One row of the reference table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeMapping {
    /// Grade on the Danish scale.
    pub danish_grade: i64,
    /// Equivalent American letter grade.
    pub american_grade: String,
    /// Description of the grade.
    pub description: String,
}

/// Handle to an initialised grade reference store.
///
/// The handle holds only the database path. Each query opens its own
/// connection and closes it before returning.
#[derive(Debug, Clone)]
pub struct GradeStore {
    path: PathBuf,
}

impl GradeStore {
    /// Opens the store at `path`, creating and seeding the table if needed.
    ///
    /// Seeding only happens when the table is empty, so reopening an existing
    /// store leaves its rows untouched.
    pub fn open<P: AsRef<Path>>(path: P) -> ExerciseResult<Self> {
        let path = path.as_ref().to_path_buf();
        let mut conn = Connection::open(&path)?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS grade_conversions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                danish_grade INTEGER,
                american_grade TEXT,
                description TEXT
            )",
            [],
        )?;

        let count: i64 =
            conn.query_row("SELECT COUNT(*) FROM grade_conversions", [], |row| row.get(0))?;
        if count == 0 {
            let tx = conn.transaction()?;
            for (danish, american, description) in SEED_GRADES {
                tx.execute(
                    "INSERT INTO grade_conversions (danish_grade, american_grade, description)
                     VALUES (?1, ?2, ?3)",
                    params![danish, american, description],
                )?;
            }
            tx.commit()?;
            info!(path = %path.display(), rows = SEED_GRADES.len(), "Seeded grade store");
        }

        Ok(Self { path })
    }

    /// The database file backing the store.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Converts `grade` from the system of `country` into the other system.
    ///
    /// `country` is "Denmark" or "America", case-insensitively. A Danish grade
    /// must be an integer; an American grade is matched upper-cased. When
    /// several rows share an American grade the first stored row answers.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(grade))` - the equivalent grade
    /// * `Ok(None)` - no row matches
    /// * `Err(_)` - unsupported country, non-integer Danish grade or a
    ///   storage failure
    pub fn convert(
        &self,
        grade: impl fmt::Display,
        country: &str,
    ) -> ExerciseResult<Option<String>> {
        let country: GradingCountry = country.parse()?;
        let grade = grade.to_string();
        let conn = Connection::open(&self.path)?;

        let converted = match country {
            GradingCountry::Denmark => {
                let key: i64 = grade.trim().parse().map_err(|_| ExerciseError::InvalidGrade {
                    grade: grade.clone(),
                })?;
                conn.query_row(
                    "SELECT american_grade FROM grade_conversions
                     WHERE danish_grade = ?1 ORDER BY id LIMIT 1",
                    params![key],
                    |row| row.get::<_, String>(0),
                )
                .optional()?
            }
            GradingCountry::America => conn
                .query_row(
                    "SELECT danish_grade FROM grade_conversions
                     WHERE american_grade = ?1 ORDER BY id LIMIT 1",
                    params![grade.to_uppercase()],
                    |row| row.get::<_, i64>(0),
                )
                .optional()?
                .map(|danish| danish.to_string()),
        };

        debug!(%grade, %country, found = converted.is_some(), "Grade lookup");
        Ok(converted)
    }

    /// Lists every stored row in insertion order.
    pub fn mappings(&self) -> ExerciseResult<Vec<GradeMapping>> {
        let conn = Connection::open(&self.path)?;
        let mut stmt = conn.prepare(
            "SELECT danish_grade, american_grade, description
             FROM grade_conversions ORDER BY id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(GradeMapping {
                danish_grade: row.get(0)?,
                american_grade: row.get(1)?,
                description: row.get(2)?,
            })
        })?;
        let mappings = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(mappings)
    }
}
