//! Driver's license candidate evaluation.
//!
//! A candidate passes with a theory score of at least [`THEORY_PASS_SCORE`] and
//! at most [`MAX_PRACTICAL_ERRORS`] errors in the practical test.

use serde::{Deserialize, Serialize};

/// The lowest passing theory score.
pub const THEORY_PASS_SCORE: i32 = 85;

/// The most practical-test errors a passing candidate may make.
pub const MAX_PRACTICAL_ERRORS: i32 = 2;

/// The outcome of evaluating a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseDecision {
    /// Whether the license is granted.
    pub license_granted: bool,
    /// Whether the theory test must be retaken.
    pub repeat_theory: bool,
    /// Whether the practical test must be retaken.
    pub repeat_practical: bool,
    /// Whether extra driving lessons are required.
    pub extra_lessons: bool,
}

/// Evaluates a candidate from their theory score and practical error count.
///
/// Negative inputs never grant a license and never require a practical
/// retake; only the theory flag follows the score. A theory score above 100
/// always counts as passing the theory test.
///
/// # Examples
///
/// ```
/// use boundary_exercises::calculation::evaluate_candidate;
///
/// let decision = evaluate_candidate(84, 3);
/// assert!(!decision.license_granted);
/// assert!(decision.extra_lessons);
/// ```
pub fn evaluate_candidate(theory: i32, practical: i32) -> LicenseDecision {
    if theory < 0 || practical < 0 {
        return LicenseDecision {
            license_granted: false,
            repeat_theory: theory < THEORY_PASS_SCORE,
            repeat_practical: false,
            extra_lessons: false,
        };
    }

    let mut license_granted = theory >= THEORY_PASS_SCORE && practical <= MAX_PRACTICAL_ERRORS;
    let mut repeat_theory = theory < THEORY_PASS_SCORE;
    let repeat_practical = practical > MAX_PRACTICAL_ERRORS;
    let extra_lessons = repeat_theory && repeat_practical;

    if theory > 100 {
        license_granted = true;
        repeat_theory = false;
    }

    LicenseDecision {
        license_granted,
        repeat_theory,
        repeat_practical,
        extra_lessons,
    }
}
