//! Allocation engine.
//!
//! One full recomputation per call: momentum and volatility are derived for
//! every period, periods with both defined are standardized against each
//! other in a single full-series pass (population mean, sample stddev), and
//! weight[t] = sigmoid(momentum_z[t] - volatility_z[t]). The advisory is
//! taken from the latest eligible weight; earlier rows exist to anchor the
//! standardization statistics and for charting.

use crate::domain::advice::Advice;
use crate::domain::error::EntrygaugeError;
use crate::domain::params::StrategyParams;
use crate::domain::series::PriceSeries;
use crate::domain::signal;
use chrono::NaiveDate;
use serde::Serialize;

/// Standardization needs at least two eligible periods.
pub const MIN_ELIGIBLE_PERIODS: usize = 2;

/// Derived figures for one eligible period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureRow {
    pub date: NaiveDate,
    pub momentum: f64,
    pub volatility: f64,
    pub momentum_z: f64,
    pub volatility_z: f64,
    pub weight: f64,
}

/// Engine output: one row per eligible period, plus the advisory derived
/// from the latest row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub rows: Vec<FeatureRow>,
    pub advice: Advice,
}

impl Evaluation {
    /// The latest eligible row, the only one surfaced as a recommendation.
    pub fn latest(&self) -> &FeatureRow {
        // non-empty by construction: evaluate() rejects < MIN_ELIGIBLE_PERIODS
        self.rows.last().expect("evaluation has eligible rows")
    }
}

pub fn evaluate(
    series: &PriceSeries,
    params: &StrategyParams,
) -> Result<Evaluation, EntrygaugeError> {
    let momentum = signal::momentum(series, params.momentum_period);
    let volatility = signal::volatility(series, params.volatility_period);

    let eligible: Vec<(NaiveDate, f64, f64)> = momentum
        .iter()
        .zip(&volatility)
        .filter(|(m, v)| m.valid && v.valid)
        .map(|(m, v)| (m.date, m.value, v.value))
        .collect();

    if eligible.len() < MIN_ELIGIBLE_PERIODS {
        return Err(EntrygaugeError::InsufficientData {
            have: eligible.len(),
            need: MIN_ELIGIBLE_PERIODS,
        });
    }

    let momenta: Vec<f64> = eligible.iter().map(|&(_, m, _)| m).collect();
    let vols: Vec<f64> = eligible.iter().map(|&(_, _, v)| v).collect();

    let mom_mean = signal::mean(&momenta);
    let mom_stddev = signal::sample_stddev(&momenta);
    if mom_stddev == 0.0 {
        return Err(EntrygaugeError::DegenerateSeries {
            signal: "momentum".into(),
        });
    }

    let vol_mean = signal::mean(&vols);
    let vol_stddev = signal::sample_stddev(&vols);
    if vol_stddev == 0.0 {
        return Err(EntrygaugeError::DegenerateSeries {
            signal: "volatility".into(),
        });
    }

    let rows: Vec<FeatureRow> = eligible
        .into_iter()
        .map(|(date, momentum, volatility)| {
            let momentum_z = (momentum - mom_mean) / mom_stddev;
            let volatility_z = (volatility - vol_mean) / vol_stddev;
            let weight = sigmoid(momentum_z - volatility_z);
            FeatureRow {
                date,
                momentum,
                volatility,
                momentum_z,
                volatility_z,
                weight,
            }
        })
        .collect();

    let advice = Advice::from_weight(rows[rows.len() - 1].weight);

    Ok(Evaluation { rows, advice })
}

/// Logistic function mapping any real to (0, 1).
fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}
