use super::types::{MarksError, SubjectScore};

/// Check that a (marks, maximum) pair is well formed: maximum strictly
/// positive and marks within [0, maximum]. Both boundaries are valid.
/// NaN fails every comparison, so it is rejected on either side.
pub fn validate(marks: f64, maximum: f64) -> bool {
    maximum > 0.0 && marks >= 0.0 && marks <= maximum
}

/// Validate a full submission, all-or-nothing. Fails on the first bad
/// subject in form order so the user is told which one to fix; callers
/// must not aggregate anything when this errors.
pub fn check_scores(scores: &[SubjectScore]) -> Result<(), MarksError> {
    for score in scores {
        if !validate(score.marks, score.maximum) {
            return Err(MarksError::InvalidInput { subject: score.subject });
        }
    }
    Ok(())
}
