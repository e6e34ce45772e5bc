pub mod aggregate;
pub mod convert;
pub mod types;
pub mod validate;

pub use aggregate::{aggregate, percentage};
pub use convert::{convert, convert_subject};
pub use types::{ConversionRecord, MarksError, ReportSummary, ResultRow, Subject, SubjectScore};
pub use validate::{check_scores, validate};
