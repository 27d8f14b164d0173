//! Evaluation report assembly.
//!
//! Everything a front end needs to render one recommendation: the latest
//! standardized signals, the advisory, the cash split, and the full feature
//! and price history for charting. The cash split is plain scalar arithmetic
//! owned here, outside the engine.

use crate::domain::advice::Advice;
use crate::domain::engine::{Evaluation, FeatureRow};
use crate::domain::series::{PricePoint, PriceSeries};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReport {
    pub code: String,
    /// Latest eligible period.
    pub period: NaiveDate,
    /// Close (or override) in effect for the latest period.
    pub price: f64,
    pub momentum_z: f64,
    pub volatility_z: f64,
    pub weight: f64,
    pub advice: Advice,
    pub cash_total: f64,
    pub investment: f64,
    pub reserve: f64,
    pub rows: Vec<FeatureRow>,
    pub prices: Vec<PricePoint>,
}

impl EvaluationReport {
    pub fn build(series: &PriceSeries, evaluation: &Evaluation, cash_total: f64) -> Self {
        let latest = evaluation.latest();
        let weight = latest.weight;
        Self {
            code: series.code.clone(),
            period: latest.date,
            price: series.latest().map(|p| p.close).unwrap_or(0.0),
            momentum_z: latest.momentum_z,
            volatility_z: latest.volatility_z,
            weight,
            advice: evaluation.advice,
            cash_total,
            investment: weight * cash_total,
            reserve: (1.0 - weight) * cash_total,
            rows: evaluation.rows.clone(),
            prices: series.points.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::engine::evaluate;
    use crate::domain::params::StrategyParams;
    use approx::assert_relative_eq;

    fn sample_report(cash_total: f64) -> EvaluationReport {
        let series = PriceSeries {
            code: "0050".into(),
            points: [100.0, 102.0, 105.0, 103.0, 108.0, 112.0]
                .iter()
                .enumerate()
                .map(|(i, &close)| PricePoint {
                    date: NaiveDate::from_ymd_opt(2024, 1 + i as u32, 1).unwrap(),
                    close,
                })
                .collect(),
        };
        let evaluation = evaluate(&series, &StrategyParams::default()).unwrap();
        EvaluationReport::build(&series, &evaluation, cash_total)
    }

    #[test]
    fn cash_split_sums_to_total() {
        let report = sample_report(100_000.0);
        assert_relative_eq!(
            report.investment + report.reserve,
            100_000.0,
            epsilon = 1e-6
        );
        assert_relative_eq!(
            report.investment,
            report.weight * 100_000.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn carries_latest_row_and_history() {
        let report = sample_report(50_000.0);
        assert_eq!(report.code, "0050");
        assert_eq!(report.period, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert!((report.price - 112.0).abs() < f64::EPSILON);
        assert_eq!(report.rows.len(), 3);
        assert_eq!(report.prices.len(), 6);
        assert_eq!(report.advice, Advice::StrongBuy);
    }
}
