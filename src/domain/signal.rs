//! Momentum, period-return, and rolling-volatility signals.
//!
//! momentum(n)[t] = close[t] / close[t-n] - 1
//! return[t] = close[t] / close[t-1] - 1
//! volatility(n)[t] = sample stddev of the n returns ending at t
//!
//! Warmup points carry `valid: false` and a zero value. Volatility uses the
//! sample (n-1 denominator) standard deviation.

use crate::domain::series::PriceSeries;
use chrono::NaiveDate;

/// A single point in a derived signal series, aligned with the price series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalPoint {
    pub date: NaiveDate,
    pub valid: bool,
    pub value: f64,
}

pub fn momentum(series: &PriceSeries, period: usize) -> Vec<SignalPoint> {
    let points = &series.points;
    let mut values = Vec::with_capacity(points.len());

    for i in 0..points.len() {
        let valid = period > 0 && i >= period;
        let value = if valid {
            points[i].close / points[i - period].close - 1.0
        } else {
            0.0
        };
        values.push(SignalPoint {
            date: points[i].date,
            valid,
            value,
        });
    }

    values
}

/// Single-period percentage returns; momentum over one period.
pub fn period_returns(series: &PriceSeries) -> Vec<SignalPoint> {
    momentum(series, 1)
}

pub fn volatility(series: &PriceSeries, period: usize) -> Vec<SignalPoint> {
    let returns = period_returns(series);
    let mut values = Vec::with_capacity(returns.len());

    for i in 0..returns.len() {
        // The window must hold `period` valid returns, and the sample
        // stddev needs at least two of them.
        let valid = period >= 2 && i >= period;
        let value = if valid {
            let window: Vec<f64> = returns[i + 1 - period..=i]
                .iter()
                .map(|r| r.value)
                .collect();
            sample_stddev(&window)
        } else {
            0.0
        };
        values.push(SignalPoint {
            date: returns[i].date,
            valid,
            value,
        });
    }

    values
}

/// Arithmetic mean; 0.0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample (n-1 denominator) standard deviation; 0.0 for fewer than two
/// values.
pub fn sample_stddev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let variance = values
        .iter()
        .map(|v| {
            let diff = v - m;
            diff * diff
        })
        .sum::<f64>()
        / (values.len() - 1) as f64;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::series::PricePoint;
    use approx::assert_relative_eq;

    fn make_series(closes: &[f64]) -> PriceSeries {
        PriceSeries {
            code: "TEST".into(),
            points: closes
                .iter()
                .enumerate()
                .map(|(i, &close)| PricePoint {
                    date: NaiveDate::from_ymd_opt(2024, 1 + i as u32, 1).unwrap(),
                    close,
                })
                .collect(),
        }
    }

    #[test]
    fn momentum_warmup() {
        let series = make_series(&[100.0, 105.0, 110.0, 115.0, 120.0]);
        let mom = momentum(&series, 3);

        assert!(!mom[0].valid);
        assert!(!mom[1].valid);
        assert!(!mom[2].valid);
        assert!(mom[3].valid);
        assert!(mom[4].valid);
    }

    #[test]
    fn momentum_basic_calculation() {
        let series = make_series(&[100.0, 102.0, 105.0, 103.0]);
        let mom = momentum(&series, 3);

        assert_relative_eq!(mom[3].value, 103.0 / 100.0 - 1.0, epsilon = 1e-12);
    }

    #[test]
    fn momentum_zero_period_never_valid() {
        let series = make_series(&[100.0, 102.0]);
        let mom = momentum(&series, 0);
        assert!(mom.iter().all(|p| !p.valid));
    }

    #[test]
    fn period_returns_are_one_period_momentum() {
        let series = make_series(&[100.0, 102.0, 105.0]);
        let rets = period_returns(&series);

        assert!(!rets[0].valid);
        assert_relative_eq!(rets[1].value, 0.02, epsilon = 1e-12);
        assert_relative_eq!(rets[2].value, 105.0 / 102.0 - 1.0, epsilon = 1e-12);
    }

    #[test]
    fn volatility_warmup() {
        let series = make_series(&[100.0, 102.0, 105.0, 103.0, 108.0]);
        let vol = volatility(&series, 2);

        assert!(!vol[0].valid);
        assert!(!vol[1].valid);
        assert!(vol[2].valid);
        assert!(vol[3].valid);
        assert!(vol[4].valid);
    }

    #[test]
    fn volatility_of_two_returns_is_scaled_absolute_difference() {
        // sample stddev of two values is |a - b| / sqrt(2)
        let series = make_series(&[100.0, 102.0, 105.0]);
        let vol = volatility(&series, 2);

        let r1 = 0.02_f64;
        let r2 = 105.0 / 102.0 - 1.0;
        let expected = (r2 - r1).abs() / 2.0_f64.sqrt();
        assert_relative_eq!(vol[2].value, expected, epsilon = 1e-12);
    }

    #[test]
    fn volatility_of_flat_series_is_zero() {
        let series = make_series(&[100.0, 100.0, 100.0, 100.0]);
        let vol = volatility(&series, 2);

        assert!(vol[2].valid);
        assert!(vol[2].value.abs() < f64::EPSILON);
        assert!(vol[3].value.abs() < f64::EPSILON);
    }

    #[test]
    fn volatility_window_of_one_never_valid() {
        let series = make_series(&[100.0, 102.0, 105.0]);
        let vol = volatility(&series, 1);
        assert!(vol.iter().all(|p| !p.valid));
    }

    #[test]
    fn mean_basic() {
        assert_relative_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), 2.5, epsilon = 1e-12);
        assert!(mean(&[]).abs() < f64::EPSILON);
    }

    #[test]
    fn sample_stddev_known_value() {
        // values 1..4: sample variance 5/3
        let expected = (5.0_f64 / 3.0).sqrt();
        assert_relative_eq!(
            sample_stddev(&[1.0, 2.0, 3.0, 4.0]),
            expected,
            epsilon = 1e-12
        );
    }

    #[test]
    fn sample_stddev_degenerate_inputs() {
        assert!(sample_stddev(&[]).abs() < f64::EPSILON);
        assert!(sample_stddev(&[5.0]).abs() < f64::EPSILON);
        assert!(sample_stddev(&[5.0, 5.0, 5.0]).abs() < f64::EPSILON);
    }
}
