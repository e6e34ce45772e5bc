use ratatui::prelude::*;
use ratatui::widgets::{Block, Cell, Clear, Paragraph, Row, Table, Tabs};

use crate::report;
use crate::tui::app::{App, FormField, InputMode, Screen};
use crate::tui::theme;

pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Handle very small terminal sizes gracefully
    if area.height < 14 || area.width < 44 {
        let msg = Paragraph::new("Terminal too small").alignment(Alignment::Center);
        frame.render_widget(msg, area);
        return;
    }

    // Layout: Title(1) + Tabs(1) + Body(fill) + Status(1)
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(area);

    render_title(frame, chunks[0], app);
    render_tabs(frame, chunks[1], app);
    match app.screen {
        Screen::Entry => render_entry_form(frame, chunks[2], app),
        Screen::Converting => render_conversion_form(frame, chunks[2], app),
        Screen::Results => render_results(frame, chunks[2], app),
    }
    render_status_bar(frame, chunks[3], app);

    if app.input_mode == InputMode::Help {
        render_help_popup(frame);
    }
}

fn render_title(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        "Marksheet",
        Style::default().fg(theme::TITLE_COLOR).bold(),
    )];

    // Show the export destination on the right once a report exists
    if app.has_artifact() {
        let right_text = format!("report ready: {}", app.output_path.display());
        let padding = (area.width as usize).saturating_sub("Marksheet".len() + right_text.len());
        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(Span::styled(right_text, Style::default().fg(theme::MUTED)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let titles = vec!["Entry", "Convert", "Results"];
    let selected = match app.screen {
        Screen::Entry => 0,
        Screen::Converting => 1,
        Screen::Results => 2,
    };

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(theme::MUTED))
        .highlight_style(Style::default().fg(theme::TITLE_COLOR).bold().reversed())
        .divider(" | ");

    frame.render_widget(tabs, area);
}

fn field_line<'a>(field: &'a FormField, focused: bool, note: Option<String>) -> Line<'a> {
    let value_style = if focused {
        theme::FIELD_FOCUSED
    } else {
        Style::default()
    };
    let cursor = if focused { "_" } else { " " };

    let mut spans = vec![
        Span::raw("  "),
        Span::styled(
            format!("{:<22}", field.label),
            Style::default().fg(theme::LABEL_COLOR),
        ),
        Span::styled(format!("[ {:<10}{}]", field.buffer, cursor), value_style),
    ];
    if let Some(note) = note {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(note, Style::default().fg(theme::MUTED)));
    }
    Line::from(spans)
}

fn render_entry_form(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![Line::from(""), Line::from(Span::styled("  Enter marks per subject", Style::default().bold()))];
    lines.push(Line::from(""));

    for (i, field) in app.entry_fields.iter().enumerate() {
        let note = crate::marks::Subject::ALL
            .get(i)
            .and_then(|s| app.conversion_for(*s))
            .map(|r| {
                format!(
                    "converted from {}/{}",
                    crate::marks::types::fmt_marks(r.original_marks),
                    crate::marks::types::fmt_marks(r.original_max)
                )
            });
        lines.push(field_line(field, app.focus == i, note));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  The maximum applies to every subject without a conversion.",
        Style::default().fg(theme::MUTED),
    )));

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_conversion_form(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![Line::from("")];

    // Three fields per convertible subject, with a heading before each group
    for (group, heading) in ["Convert Hindi Marks", "Convert Computer Marks"]
        .iter()
        .enumerate()
    {
        lines.push(Line::from(Span::styled(
            format!("  {}", heading),
            Style::default().bold(),
        )));
        lines.push(Line::from(""));
        for offset in 0..3 {
            let idx = group * 3 + offset;
            lines.push(field_line(&app.conv_fields[idx], app.focus == idx, None));
        }
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "  Converted values are filled into the entry form on success.",
        Style::default().fg(theme::MUTED),
    )));

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_results(frame: &mut Frame, area: Rect, app: &App) {
    let summary = match &app.summary {
        Some(summary) => summary,
        None => {
            let empty = Paragraph::new("No results computed yet")
                .alignment(Alignment::Center)
                .block(Block::default());
            frame.render_widget(empty, area);
            return;
        }
    };

    let data = report::table_rows(summary);
    let (subject_rows, total_row) = data.split_at(data.len() - 1);

    let mut rows: Vec<Row> = subject_rows
        .iter()
        .enumerate()
        .map(|(idx, cells)| {
            let percentage = summary.rows[idx].percentage;
            let row_style = if idx % 2 == 1 {
                Style::default().bg(theme::ROW_ALT_BG)
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(cells[0].clone()),
                Cell::from(cells[1].clone()),
                Cell::from(cells[2].clone()),
                Cell::from(cells[3].clone())
                    .style(Style::default().fg(theme::percentage_color(percentage))),
            ])
            .style(row_style)
        })
        .collect();

    let total = &total_row[0];
    rows.push(
        Row::new(vec![
            Cell::from(total[0].clone()),
            Cell::from(total[1].clone()),
            Cell::from(total[2].clone()),
            Cell::from(total[3].clone()),
        ])
        .style(theme::TOTAL_ROW_STYLE),
    );

    let widths = [
        Constraint::Length(12),
        Constraint::Length(16),
        Constraint::Length(15),
        Constraint::Length(12),
    ];

    let table = Table::new(rows, widths).header(
        Row::new(report::TABLE_HEADER.to_vec())
            .style(theme::TABLE_HEADER_STYLE)
            .bottom_margin(1),
    );

    frame.render_widget(table, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let text = if let Some((ref msg, _)) = app.flash_message {
        let msg_color = if msg.starts_with("Invalid")
            || msg.starts_with("Please")
            || msg.starts_with("Failed")
            || msg.starts_with("No report")
        {
            theme::FLASH_ERROR
        } else {
            theme::FLASH_SUCCESS
        };
        Line::from(Span::styled(msg.clone(), Style::default().fg(msg_color)))
    } else {
        let hints: Vec<(&str, &str)> = match app.screen {
            Screen::Entry => {
                let mut hints = vec![
                    ("Tab/↑↓", ":move "),
                    ("Enter", ":calculate "),
                    ("c", ":convert "),
                    ("r", ":reset "),
                ];
                if app.has_artifact() {
                    hints.push(("d", ":download "));
                }
                hints.push(("?", ":help "));
                hints.push(("q", ":quit"));
                hints
            }
            Screen::Converting => vec![
                ("Tab/↑↓", ":move "),
                ("Enter", ":convert "),
                ("r", ":reset "),
                ("Esc", ":back "),
                ("?", ":help "),
                ("q", ":quit"),
            ],
            Screen::Results => vec![
                ("d", ":download "),
                ("Esc", ":back "),
                ("r", ":reset "),
                ("?", ":help "),
                ("q", ":quit"),
            ],
        };

        let mut spans = Vec::new();
        for (i, (key, label)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(*key, Style::default().fg(theme::STATUS_KEY_COLOR)));
            spans.push(Span::raw(*label));
        }
        Line::from(spans)
    };

    frame.render_widget(
        Paragraph::new(text).style(Style::default().bg(theme::STATUS_BAR_BG)),
        area,
    );
}

/// Create a centered rectangle with fixed width and height
fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect { x, y, width, height }
}

fn render_help_popup(frame: &mut Frame) {
    let popup_area = centered_rect_fixed(52, 14, frame.area());

    frame.render_widget(Clear, popup_area);

    let block = Block::bordered().title(" Keyboard Shortcuts ");
    frame.render_widget(block.clone(), popup_area);
    let inner = block.inner(popup_area);

    let key_style = Style::default().fg(Color::Cyan).bold();
    let help_lines = vec![
        Line::from(vec![
            Span::styled("Tab / Up / Down  ", key_style),
            Span::raw("Move between fields"),
        ]),
        Line::from(vec![
            Span::styled("0-9 .            ", key_style),
            Span::raw("Edit the focused field"),
        ]),
        Line::from(vec![
            Span::styled("Enter            ", key_style),
            Span::raw("Submit the current form"),
        ]),
        Line::from(vec![
            Span::styled("c                ", key_style),
            Span::raw("Open the conversion form"),
        ]),
        Line::from(vec![
            Span::styled("d                ", key_style),
            Span::raw("Download the PDF report"),
        ]),
        Line::from(vec![
            Span::styled("r                ", key_style),
            Span::raw("Reset the current form"),
        ]),
        Line::from(vec![
            Span::styled("Esc              ", key_style),
            Span::raw("Back to the entry form"),
        ]),
        Line::from(vec![
            Span::styled("q / Ctrl-c       ", key_style),
            Span::raw("Quit"),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(theme::MUTED),
        )),
    ];

    frame.render_widget(Paragraph::new(help_lines), inner);
}
