use std::path::PathBuf;
use std::time::Instant;

use crate::marks::{
    aggregate, check_scores, convert_subject, ConversionRecord, MarksError, ReportSummary,
    Subject, SubjectScore,
};
use crate::report;

const MAX_FIELD_LEN: usize = 10;
const SHARED_MAX_FIELD: usize = Subject::ALL.len();

/// Which screen the session is on: enter marks, rescale Hindi/Computer,
/// or view the computed results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Entry,
    Converting,
    Results,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Form,
    Help,
}

/// One editable numeric field.
#[derive(Debug, Clone)]
pub struct FormField {
    pub label: &'static str,
    pub buffer: String,
}

impl FormField {
    fn new(label: &'static str) -> Self {
        FormField { label, buffer: String::new() }
    }

    fn parsed(&self) -> Option<f64> {
        let trimmed = self.buffer.trim();
        if trimmed.is_empty() {
            None
        } else {
            trimmed.parse().ok()
        }
    }
}

/// All state for one interactive session. Everything transient lives
/// here and is dropped on reset; nothing outlives the event loop that
/// owns this struct.
pub struct App {
    pub screen: Screen,
    pub input_mode: InputMode,
    /// Seven subject fields plus the shared maximum, in form order.
    pub entry_fields: Vec<FormField>,
    /// Marks / original maximum / new maximum, per convertible subject.
    pub conv_fields: Vec<FormField>,
    pub focus: usize,
    pub conversions: Vec<ConversionRecord>,
    pub summary: Option<ReportSummary>,
    /// Prepared export artifact, rebuilt on every successful submission.
    pub pdf_bytes: Option<Vec<u8>>,
    pub output_path: PathBuf,
    pub flash_message: Option<(String, Instant)>,
    pub should_quit: bool,
    pub verbose: bool,
}

impl App {
    pub fn new(output_path: PathBuf, verbose: bool) -> Self {
        Self {
            screen: Screen::Entry,
            input_mode: InputMode::Form,
            entry_fields: entry_fields(),
            conv_fields: conv_fields(),
            focus: 0,
            conversions: Vec::new(),
            summary: None,
            pdf_bytes: None,
            output_path,
            flash_message: None,
            should_quit: false,
            verbose,
        }
    }

    fn field_count(&self) -> usize {
        match self.screen {
            Screen::Entry => self.entry_fields.len(),
            Screen::Converting => self.conv_fields.len(),
            Screen::Results => 0,
        }
    }

    fn current_fields_mut(&mut self) -> Option<&mut Vec<FormField>> {
        match self.screen {
            Screen::Entry => Some(&mut self.entry_fields),
            Screen::Converting => Some(&mut self.conv_fields),
            Screen::Results => None,
        }
    }

    pub fn next_field(&mut self) {
        let count = self.field_count();
        if count == 0 {
            return;
        }
        self.focus = if self.focus >= count - 1 { 0 } else { self.focus + 1 };
    }

    pub fn previous_field(&mut self) {
        let count = self.field_count();
        if count == 0 {
            return;
        }
        self.focus = if self.focus == 0 { count - 1 } else { self.focus - 1 };
    }

    pub fn push_char(&mut self, c: char) {
        let focus = self.focus;
        if let Some(fields) = self.current_fields_mut() {
            let buffer = &mut fields[focus].buffer;
            if buffer.len() < MAX_FIELD_LEN {
                buffer.push(c);
            }
        }
    }

    pub fn backspace(&mut self) {
        let focus = self.focus;
        if let Some(fields) = self.current_fields_mut() {
            fields[focus].buffer.pop();
        }
    }

    pub fn conversion_for(&self, subject: Subject) -> Option<&ConversionRecord> {
        self.conversions.iter().find(|r| r.subject == subject)
    }

    /// Assemble the submission. A converted subject takes its maximum
    /// from the stored record; everyone else shares the maximum field.
    /// A missing or unparseable value fails as that subject's input.
    fn build_scores(&self) -> Result<Vec<SubjectScore>, MarksError> {
        let shared_max = self.entry_fields[SHARED_MAX_FIELD].parsed();

        let mut scores = Vec::with_capacity(Subject::ALL.len());
        for (i, subject) in Subject::ALL.iter().copied().enumerate() {
            let maximum = match self.conversion_for(subject) {
                Some(record) => Some(record.new_max),
                None => shared_max,
            };
            match (self.entry_fields[i].parsed(), maximum) {
                (Some(marks), Some(maximum)) => {
                    scores.push(SubjectScore { subject, marks, maximum })
                }
                _ => return Err(MarksError::InvalidInput { subject }),
            }
        }
        Ok(scores)
    }

    /// Validate and compute the report. All-or-nothing: on any failure
    /// the entry screen stays as-is and the error names the subject.
    pub fn submit(&mut self) {
        let scores = match self.build_scores().and_then(|scores| {
            check_scores(&scores)?;
            Ok(scores)
        }) {
            Ok(scores) => scores,
            Err(e) => {
                self.show_flash(e.to_string());
                return;
            }
        };

        let summary = aggregate(&scores, &self.conversions);

        // Prepare the export artifact from the same summary that feeds
        // the table, so the two can never diverge.
        match report::render_pdf(&summary) {
            Ok(bytes) => {
                self.pdf_bytes = Some(bytes);
                self.show_flash("Marks calculated successfully!".to_string());
            }
            Err(e) => {
                self.pdf_bytes = None;
                self.show_flash(format!("Report ready, PDF failed: {}", e));
            }
        }

        self.summary = Some(summary);
        self.screen = Screen::Results;
        self.focus = 0;
    }

    /// Apply the conversion sub-form. Both subjects are validated and
    /// stored together; on failure the previous records are kept.
    pub fn convert_submit(&mut self) {
        let mut records = Vec::with_capacity(Subject::CONVERTIBLE.len());
        for (i, subject) in Subject::CONVERTIBLE.iter().copied().enumerate() {
            let base = i * 3;
            let parsed = (
                self.conv_fields[base].parsed(),
                self.conv_fields[base + 1].parsed(),
                self.conv_fields[base + 2].parsed(),
            );
            let record = match parsed {
                (Some(marks), Some(old_max), Some(new_max)) => {
                    convert_subject(subject, marks, old_max, new_max)
                }
                _ => Err(MarksError::InvalidConversionInput),
            };
            match record {
                Ok(record) => records.push(record),
                Err(e) => {
                    self.show_flash(e.to_string());
                    return;
                }
            }
        }

        // Prefill the entry buffers with the exact converted values.
        // f64's Display is round-trip precise, so submitting reparses
        // the same number.
        for record in &records {
            if let Some(idx) = Subject::ALL.iter().position(|s| *s == record.subject) {
                self.entry_fields[idx].buffer = format!("{}", record.converted_marks);
            }
        }

        self.conversions = records;
        self.show_flash("Marks converted successfully!".to_string());
    }

    pub fn start_conversion(&mut self) {
        self.screen = Screen::Converting;
        self.focus = 0;
    }

    pub fn return_to_entry(&mut self) {
        self.screen = Screen::Entry;
        self.focus = 0;
    }

    /// Clear the whole session: buffers, conversions, computed summary,
    /// and any prepared artifact.
    pub fn reset(&mut self) {
        self.entry_fields = entry_fields();
        self.conv_fields = conv_fields();
        self.conversions.clear();
        self.summary = None;
        self.pdf_bytes = None;
        self.screen = Screen::Entry;
        self.focus = 0;
        self.show_flash("Form reset".to_string());
    }

    /// Clear only the conversion sub-form and its stored records,
    /// including values they prefilled into the entry form.
    pub fn reset_conversion(&mut self) {
        if !self.conversions.is_empty() {
            for subject in Subject::CONVERTIBLE {
                if let Some(idx) = Subject::ALL.iter().position(|s| *s == subject) {
                    self.entry_fields[idx].buffer.clear();
                }
            }
        }
        self.conv_fields = conv_fields();
        self.conversions.clear();
        self.focus = 0;
        self.show_flash("Conversion form reset".to_string());
    }

    pub fn has_artifact(&self) -> bool {
        self.pdf_bytes.is_some()
    }

    /// Write the prepared PDF to the configured output path.
    pub fn export(&mut self) {
        let bytes = match &self.pdf_bytes {
            Some(bytes) => bytes,
            None => {
                self.show_flash("No report to export yet".to_string());
                return;
            }
        };
        match std::fs::write(&self.output_path, bytes) {
            Ok(()) => {
                self.show_flash(format!("Saved report to {}", self.output_path.display()))
            }
            Err(e) => self.show_flash(format!("Failed to write PDF: {}", e)),
        }
    }

    pub fn show_help(&mut self) {
        self.input_mode = InputMode::Help;
    }

    pub fn dismiss_help(&mut self) {
        self.input_mode = InputMode::Form;
    }

    pub fn show_flash(&mut self, msg: String) {
        self.flash_message = Some((msg, Instant::now()));
    }

    pub fn update_flash(&mut self) {
        if let Some((_, timestamp)) = self.flash_message {
            if timestamp.elapsed().as_secs() >= 3 {
                self.flash_message = None;
            }
        }
    }
}

fn entry_fields() -> Vec<FormField> {
    let mut fields: Vec<FormField> = Subject::ALL
        .iter()
        .map(|subject| FormField::new(subject.name()))
        .collect();
    fields.push(FormField::new("Maximum Marks"));
    fields
}

fn conv_fields() -> Vec<FormField> {
    vec![
        FormField::new("Hindi marks"),
        FormField::new("Hindi maximum"),
        FormField::new("Hindi new maximum"),
        FormField::new("Computer marks"),
        FormField::new("Computer maximum"),
        FormField::new("Computer new maximum"),
    ]
}
