use super::types::{ConversionRecord, MarksError, Subject};
use super::validate::validate;

/// Rescale marks from one maximum to another by direct proportion.
/// No rounding here; rounding to two decimals happens only at display
/// and report time. A non-positive `old_max` or `new_max`, or marks
/// outside [0, old_max], is rejected instead of producing inf/NaN.
pub fn convert(marks: f64, old_max: f64, new_max: f64) -> Result<f64, MarksError> {
    if !validate(marks, old_max) || !(new_max > 0.0) {
        return Err(MarksError::InvalidConversionInput);
    }
    Ok(marks / old_max * new_max)
}

/// Convert one subject's marks and capture the full record, so displays
/// can show both the original and the converted value later.
pub fn convert_subject(
    subject: Subject,
    marks: f64,
    old_max: f64,
    new_max: f64,
) -> Result<ConversionRecord, MarksError> {
    let converted_marks = convert(marks, old_max, new_max)?;
    Ok(ConversionRecord {
        subject,
        original_marks: marks,
        original_max: old_max,
        new_max,
        converted_marks,
    })
}
