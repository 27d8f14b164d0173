//! Report rendering port trait.

use crate::domain::error::EntrygaugeError;
use crate::domain::report::EvaluationReport;

/// Port for rendering an evaluation report for the front end.
pub trait ReportPort {
    fn render(&self, report: &EvaluationReport) -> Result<String, EntrygaugeError>;
}
