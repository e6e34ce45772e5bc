use std::io::IsTerminal;

use owo_colors::OwoColorize;

use crate::marks::types::ReportSummary;
use super::{table_rows, TABLE_HEADER};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format the report as an aligned text table for stdout. Carries the
/// same cells, in the same order, as the on-screen and PDF tables.
pub fn format_report_table(summary: &ReportSummary, use_colors: bool) -> String {
    let data = table_rows(summary);

    // Column widths from header and content. The arrow cell counts
    // chars, not bytes, so "→" doesn't skew the padding.
    let mut widths: [usize; 4] = TABLE_HEADER.map(str::len);
    for row in &data {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(data.len() + 2);
    lines.push(format_line(&TABLE_HEADER.map(String::from), &widths, use_colors, true, false));
    lines.push(separator(&widths));

    let last = data.len() - 1;
    for (i, row) in data.iter().enumerate() {
        lines.push(format_line(row, &widths, use_colors, false, i == last));
    }

    lines.join("\n")
}

fn format_line(
    cells: &[String; 4],
    widths: &[usize; 4],
    use_colors: bool,
    header: bool,
    total: bool,
) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, w)| {
            let pad = w - cell.chars().count();
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect();
    let line = padded.join(" | ");

    if use_colors && header {
        line.bold().to_string()
    } else if use_colors && total {
        line.bold().yellow().to_string()
    } else {
        line
    }
}

fn separator(widths: &[usize; 4]) -> String {
    widths
        .iter()
        .map(|w| "-".repeat(*w))
        .collect::<Vec<_>>()
        .join("-+-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marks::{aggregate, Subject, SubjectScore};

    fn summary() -> ReportSummary {
        aggregate(
            &[
                SubjectScore { subject: Subject::Maths, marks: 80.0, maximum: 100.0 },
                SubjectScore { subject: Subject::English, marks: 70.0, maximum: 100.0 },
            ],
            &[],
        )
    }

    #[test]
    fn test_plain_output_has_no_ansi() {
        let out = format_report_table(&summary(), false);
        assert!(!out.contains('\u{1b}'));
    }

    #[test]
    fn test_header_first_total_last() {
        let out = format_report_table(&summary(), false);
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("Subject"));
        assert!(lines.last().unwrap().starts_with("Total"));
    }

    #[test]
    fn test_rows_in_order_with_cells() {
        let out = format_report_table(&summary(), false);
        let lines: Vec<&str> = out.lines().collect();
        // header, separator, Maths, English, Total
        assert_eq!(lines.len(), 5);
        assert!(lines[2].starts_with("Maths"));
        assert!(lines[2].contains("80.00%"));
        assert!(lines[3].starts_with("English"));
        assert!(lines[4].contains("150.00"));
        assert!(lines[4].contains("75.00%"));
    }

    #[test]
    fn test_columns_align() {
        let out = format_report_table(&summary(), false);
        let positions: Vec<Vec<usize>> = out
            .lines()
            .filter(|l| l.contains('|'))
            .map(|l| l.char_indices().filter(|(_, c)| *c == '|').map(|(i, _)| i).collect())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] == w[1]));
    }
}
