//! JSON report adapter.
//!
//! Machine-readable output for the interactive front end: the latest
//! standardized signals and cash split plus the full feature and price
//! history for charting.

use crate::domain::error::EntrygaugeError;
use crate::domain::report::EvaluationReport;
use crate::ports::report_port::ReportPort;

pub struct JsonReportAdapter;

impl ReportPort for JsonReportAdapter {
    fn render(&self, report: &EvaluationReport) -> Result<String, EntrygaugeError> {
        serde_json::to_string_pretty(report).map_err(|e| EntrygaugeError::Render {
            reason: e.to_string(),
        })
    }
}
