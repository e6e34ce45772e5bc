//! Interactive exam-marks calculator.
//!
//! Enter marks for the seven fixed subjects, optionally rescale Hindi
//! and Computer marks to a different maximum, and export the computed
//! report as a PDF. `marks` holds the computational core, `report` the
//! output targets, `tui` the interactive form.

pub mod marks;
pub mod report;
pub mod tui;
