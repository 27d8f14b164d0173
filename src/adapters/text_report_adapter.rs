//! Console text report adapter.

use crate::domain::error::EntrygaugeError;
use crate::domain::report::EvaluationReport;
use crate::ports::report_port::ReportPort;

pub struct TextReportAdapter;

impl ReportPort for TextReportAdapter {
    fn render(&self, report: &EvaluationReport) -> Result<String, EntrygaugeError> {
        Ok(format!(
            "=== Allocation Signal: {code} ===\n\
             Period:        {period}\n\
             Price:         {price:.2}\n\
             Momentum Z:    {mom_z:.2}\n\
             Volatility Z:  {vol_z:.2}\n\
             Weight:        {weight:.1}%\n\
             Advice:        {advice}\n\
             \n\
             === Cash Split ===\n\
             Invest:        {investment:.0}\n\
             Reserve:       {reserve:.0}\n",
            code = report.code,
            period = report.period,
            price = report.price,
            mom_z = report.momentum_z,
            vol_z = report.volatility_z,
            weight = report.weight * 100.0,
            advice = report.advice,
            investment = report.investment,
            reserve = report.reserve,
        ))
    }
}
