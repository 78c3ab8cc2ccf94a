//! Output formatting module for CLI

pub mod json;
mod terminal;

pub use json::JsonOutput;
pub use terminal::TerminalOutput;

use std::path::Path;
use std::time::Duration;

use crate::actions::RenamePlan;
use crate::error::RenamarionError;
use crate::inventory::InventorySummary;

/// Everything a report shows about one scan
#[derive(Debug, Clone)]
pub struct ScanReport<'a> {
    pub root: &'a Path,
    pub summary: InventorySummary,
    pub plan: &'a RenamePlan,
    pub duration: Duration,
}

/// Trait for rendering report output
pub trait ReportRenderer {
    fn render_report(&self, report: &ScanReport<'_>) -> Result<String, RenamarionError>;
}
