use super::types::{ConversionRecord, ReportSummary, ResultRow, SubjectScore};

/// `marks / maximum * 100`, full precision. The zero-maximum guard is
/// unreachable for validated input but keeps the function total.
pub fn percentage(marks: f64, maximum: f64) -> f64 {
    if maximum == 0.0 {
        0.0
    } else {
        marks / maximum * 100.0
    }
}

/// Build the report from validated per-subject scores. Totals are exact
/// sums of the row values; display rounding never feeds back into them.
/// A conversion record is attached by subject lookup and only affects
/// what the row remembers as its original marks; the score itself must
/// already carry the converted value and new maximum.
pub fn aggregate(scores: &[SubjectScore], conversions: &[ConversionRecord]) -> ReportSummary {
    let mut rows = Vec::with_capacity(scores.len());
    let mut total_marks = 0.0;
    let mut total_max = 0.0;

    for score in scores {
        let original_marks = conversions
            .iter()
            .find(|record| record.subject == score.subject)
            .map(|record| record.original_marks);

        rows.push(ResultRow {
            subject: score.subject,
            marks: score.marks,
            maximum: score.maximum,
            percentage: percentage(score.marks, score.maximum),
            original_marks,
        });

        total_marks += score.marks;
        total_max += score.maximum;
    }

    let total_percentage = percentage(total_marks, total_max);

    ReportSummary {
        rows,
        total_marks,
        total_max,
        total_percentage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marks::types::Subject;

    fn score(subject: Subject, marks: f64, maximum: f64) -> SubjectScore {
        SubjectScore { subject, marks, maximum }
    }

    fn full_submission() -> Vec<SubjectScore> {
        vec![
            score(Subject::Maths, 80.0, 100.0),
            score(Subject::English, 70.0, 100.0),
            score(Subject::Science, 90.0, 100.0),
            score(Subject::Social, 60.0, 100.0),
            score(Subject::Kannada, 50.0, 100.0),
            score(Subject::Hindi, 40.0, 50.0),
            score(Subject::Computer, 45.0, 50.0),
        ]
    }

    #[test]
    fn test_totals_are_exact_sums() {
        let summary = aggregate(&full_submission(), &[]);
        assert_eq!(summary.total_marks, 435.0);
        assert_eq!(summary.total_max, 600.0);
        assert_eq!(format!("{:.2}", summary.total_percentage), "72.50");
    }

    #[test]
    fn test_per_row_percentage() {
        let summary = aggregate(&full_submission(), &[]);
        assert_eq!(summary.rows[0].percentage, 80.0);
        assert_eq!(summary.rows[5].percentage, 80.0); // Hindi 40/50
        assert_eq!(summary.rows[6].percentage, 90.0); // Computer 45/50
    }

    #[test]
    fn test_rows_keep_submission_order() {
        let summary = aggregate(&full_submission(), &[]);
        let subjects: Vec<Subject> = summary.rows.iter().map(|r| r.subject).collect();
        assert_eq!(subjects, Subject::ALL.to_vec());
    }

    #[test]
    fn test_conversion_contributes_converted_value() {
        // Hindi 18/20 rescaled to /50: totals must use 45, not 18
        let record = ConversionRecord {
            subject: Subject::Hindi,
            original_marks: 18.0,
            original_max: 20.0,
            new_max: 50.0,
            converted_marks: 45.0,
        };
        let scores = vec![
            score(Subject::Maths, 80.0, 100.0),
            score(Subject::Hindi, 45.0, 50.0),
        ];
        let summary = aggregate(&scores, &[record]);
        assert_eq!(summary.total_marks, 125.0);
        assert_eq!(summary.total_max, 150.0);

        let hindi = &summary.rows[1];
        assert_eq!(hindi.original_marks, Some(18.0));
        assert_eq!(hindi.marks_display(), "18 → 45.00");
        assert_eq!(hindi.percentage, 90.0);
    }

    #[test]
    fn test_unconverted_rows_have_no_original() {
        let summary = aggregate(&full_submission(), &[]);
        assert!(summary.rows.iter().all(|r| r.original_marks.is_none()));
    }

    #[test]
    fn test_percentage_zero_maximum_guard() {
        assert_eq!(percentage(10.0, 0.0), 0.0);
    }

    #[test]
    fn test_full_precision_retained() {
        // 1/3 of 100: display would round, the stored value must not
        let summary = aggregate(&[score(Subject::Maths, 1.0, 3.0)], &[]);
        assert!((summary.rows[0].percentage - 100.0 / 3.0).abs() < 1e-12);
    }
}
