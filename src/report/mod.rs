pub mod pdf;
pub mod text;

pub use pdf::render_pdf;
pub use text::{format_report_table, should_use_colors};

use crate::marks::types::{fmt_marks, ReportSummary};

/// Default file name for the exported PDF artifact.
pub const REPORT_FILE_NAME: &str = "marks_report.pdf";

/// Header shared by the on-screen table, the stdout summary, and the PDF.
pub const TABLE_HEADER: [&str; 4] = ["Subject", "Marks", "Maximum Marks", "Percentage"];

/// Flatten a summary into display cells: one row per subject in the
/// order computed, then the totals row. Every output target renders
/// from this one shape so exported figures cannot diverge from the
/// on-screen ones.
pub fn table_rows(summary: &ReportSummary) -> Vec<[String; 4]> {
    let mut data: Vec<[String; 4]> = summary
        .rows
        .iter()
        .map(|row| {
            [
                row.subject.to_string(),
                row.marks_display(),
                fmt_marks(row.maximum),
                format!("{:.2}%", row.percentage),
            ]
        })
        .collect();

    data.push([
        "Total".to_string(),
        format!("{:.2}", summary.total_marks),
        format!("{:.2}", summary.total_max),
        format!("{:.2}%", summary.total_percentage),
    ]);

    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marks::{aggregate, ConversionRecord, Subject, SubjectScore};

    fn sample_summary() -> ReportSummary {
        let scores = vec![
            SubjectScore { subject: Subject::Maths, marks: 80.0, maximum: 100.0 },
            SubjectScore { subject: Subject::Hindi, marks: 45.0, maximum: 50.0 },
        ];
        let conversion = ConversionRecord {
            subject: Subject::Hindi,
            original_marks: 18.0,
            original_max: 20.0,
            new_max: 50.0,
            converted_marks: 45.0,
        };
        aggregate(&scores, &[conversion])
    }

    #[test]
    fn test_table_rows_shape() {
        let data = table_rows(&sample_summary());
        assert_eq!(data.len(), 3); // two subjects + totals
        assert_eq!(data[0][0], "Maths");
        assert_eq!(data[0][1], "80");
        assert_eq!(data[0][3], "80.00%");
    }

    #[test]
    fn test_converted_row_shows_both_values() {
        let data = table_rows(&sample_summary());
        assert_eq!(data[1][1], "18 → 45.00");
        assert_eq!(data[1][2], "50");
        assert_eq!(data[1][3], "90.00%");
    }

    #[test]
    fn test_totals_row_is_last() {
        let data = table_rows(&sample_summary());
        let total = data.last().unwrap();
        assert_eq!(total[0], "Total");
        assert_eq!(total[1], "125.00");
        assert_eq!(total[2], "150.00");
        assert_eq!(total[3], "83.33%");
    }
}
