use std::fmt;

/// The seven subjects, in canonical report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subject {
    Maths,
    English,
    Science,
    Social,
    Kannada,
    Hindi,
    Computer,
}

impl Subject {
    /// All subjects in the order they appear in forms and reports.
    pub const ALL: [Subject; 7] = [
        Subject::Maths,
        Subject::English,
        Subject::Science,
        Subject::Social,
        Subject::Kannada,
        Subject::Hindi,
        Subject::Computer,
    ];

    /// Subjects whose marks may be rescaled to a different maximum.
    pub const CONVERTIBLE: [Subject; 2] = [Subject::Hindi, Subject::Computer];

    pub fn name(&self) -> &'static str {
        match self {
            Subject::Maths => "Maths",
            Subject::English => "English",
            Subject::Science => "Science",
            Subject::Social => "Social",
            Subject::Kannada => "Kannada",
            Subject::Hindi => "Hindi",
            Subject::Computer => "Computer",
        }
    }

    pub fn is_convertible(&self) -> bool {
        matches!(self, Subject::Hindi | Subject::Computer)
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Marks entered for one subject, as used for aggregation.
/// Invariant (enforced by `validate::check_scores` before aggregation):
/// `0 <= marks <= maximum` and `maximum > 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubjectScore {
    pub subject: Subject,
    pub marks: f64,
    pub maximum: f64,
}

/// Result of rescaling one subject's marks to a new maximum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionRecord {
    pub subject: Subject,
    pub original_marks: f64,
    pub original_max: f64,
    pub new_max: f64,
    pub converted_marks: f64,
}

/// One computed row of the report. `original_marks` is set when the row
/// came through a conversion, so displays can show "original → converted".
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub subject: Subject,
    pub marks: f64,
    pub maximum: f64,
    pub percentage: f64,
    pub original_marks: Option<f64>,
}

impl ResultRow {
    /// Marks cell as shown in tables: "18 → 45.00" for converted rows.
    pub fn marks_display(&self) -> String {
        match self.original_marks {
            Some(original) => format!("{} → {:.2}", fmt_marks(original), self.marks),
            None => fmt_marks(self.marks),
        }
    }
}

/// Full computed report: one row per subject plus exact totals.
/// Totals are sums of the raw per-row values, never of rounded displays.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSummary {
    pub rows: Vec<ResultRow>,
    pub total_marks: f64,
    pub total_max: f64,
    pub total_percentage: f64,
}

/// Why a submission was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarksError {
    /// Marks for one subject are missing or outside [0, maximum].
    InvalidInput { subject: Subject },
    /// The conversion sub-form holds missing or out-of-range values.
    InvalidConversionInput,
}

impl fmt::Display for MarksError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarksError::InvalidInput { subject } => {
                write!(f, "Invalid marks for {}", subject)
            }
            MarksError::InvalidConversionInput => {
                write!(f, "Please enter valid marks (between 0 and maximum marks)")
            }
        }
    }
}

impl std::error::Error for MarksError {}

/// Format a marks value for display: whole numbers without a decimal
/// point, anything else to two places.
pub fn fmt_marks(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_order_is_canonical() {
        let names: Vec<&str> = Subject::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(
            names,
            vec!["Maths", "English", "Science", "Social", "Kannada", "Hindi", "Computer"]
        );
    }

    #[test]
    fn test_only_hindi_and_computer_convertible() {
        let convertible: Vec<Subject> = Subject::ALL
            .iter()
            .copied()
            .filter(Subject::is_convertible)
            .collect();
        assert_eq!(convertible, vec![Subject::Hindi, Subject::Computer]);
    }

    #[test]
    fn test_fmt_marks_whole_and_fractional() {
        assert_eq!(fmt_marks(18.0), "18");
        assert_eq!(fmt_marks(45.5), "45.50");
        assert_eq!(fmt_marks(0.0), "0");
    }

    #[test]
    fn test_marks_display_converted_row() {
        let row = ResultRow {
            subject: Subject::Hindi,
            marks: 45.0,
            maximum: 50.0,
            percentage: 90.0,
            original_marks: Some(18.0),
        };
        assert_eq!(row.marks_display(), "18 → 45.00");
    }

    #[test]
    fn test_marks_display_plain_row() {
        let row = ResultRow {
            subject: Subject::Maths,
            marks: 80.0,
            maximum: 100.0,
            percentage: 80.0,
            original_marks: None,
        };
        assert_eq!(row.marks_display(), "80");
    }

    #[test]
    fn test_error_messages() {
        let e = MarksError::InvalidInput { subject: Subject::Maths };
        assert_eq!(e.to_string(), "Invalid marks for Maths");
        assert_eq!(
            MarksError::InvalidConversionInput.to_string(),
            "Please enter valid marks (between 0 and maximum marks)"
        );
    }
}
