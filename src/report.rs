use serde::{Deserialize, Serialize};

/// Progress and warning channel offered to the hosting layer.
///
/// Both methods default to no-ops so callers only override what they care
/// about. Progress fractions run from 0.0 to 1.0 within each pipeline stage;
/// warnings are human-readable and non-fatal.
pub trait Reporter {
    /// Called at each meaningful step boundary (per source read, per sheet
    /// copied).
    fn progress(&mut self, _fraction: f64, _label: &str) {}

    /// Called once per non-fatal condition, e.g. an orphaned sheet.
    fn warning(&mut self, _message: &str) {}
}

/// Reporter that discards all notifications.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {}

/// Non-fatal conditions collected over one consolidation run.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsolidationReport {
    /// Sheets present in the summed data but absent from the template; their
    /// totals were dropped.
    pub orphaned_sheets: Vec<String>,
    /// Individual summed values that could not be written to the output.
    pub skipped_cells: Vec<CellWriteFailure>,
}

impl ConsolidationReport {
    /// True when the run completed without any non-fatal condition.
    pub fn is_clean(&self) -> bool {
        self.orphaned_sheets.is_empty() && self.skipped_cells.is_empty()
    }
}

/// A single summed value that could not be placed into the output workbook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellWriteFailure {
    /// Sheet the value was destined for.
    pub sheet: String,
    /// Coordinate that could not be addressed.
    pub coordinate: String,
    /// Human-readable reason the write was skipped.
    pub reason: String,
}
