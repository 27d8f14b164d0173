//! Series normalization.
//!
//! Turns raw provider observations into a [`PriceSeries`]: observations with
//! a missing, non-finite, or non-positive close are dropped, duplicate months
//! collapse to their last observation, and an optional override replaces the
//! close of the chronologically last point. Only the final, still-forming
//! period may be hypothetical; every earlier close stays as observed.

use crate::domain::error::EntrygaugeError;
use crate::domain::series::{Observation, PricePoint, PriceSeries};
use chrono::Datelike;

/// Minimum number of cleaned points for a series to be usable at all.
pub const MIN_SERIES_POINTS: usize = 2;

pub fn normalize(
    code: &str,
    raw: &[Observation],
    override_price: Option<f64>,
) -> Result<PriceSeries, EntrygaugeError> {
    if let Some(price) = override_price {
        if !price.is_finite() || price <= 0.0 {
            return Err(EntrygaugeError::InvalidPrice { value: price });
        }
    }

    let mut cleaned: Vec<PricePoint> = raw
        .iter()
        .filter_map(|obs| match obs.close {
            Some(close) if close.is_finite() && close > 0.0 => Some(PricePoint {
                date: obs.date,
                close,
            }),
            _ => None,
        })
        .collect();

    cleaned.sort_by_key(|p| p.date);

    // One point per calendar month; a re-reported month keeps its last value.
    let mut points: Vec<PricePoint> = Vec::with_capacity(cleaned.len());
    for point in cleaned {
        let repeated = matches!(
            points.last(),
            Some(last) if same_month(last.date, point.date)
        );
        if repeated {
            let idx = points.len() - 1;
            points[idx] = point;
        } else {
            points.push(point);
        }
    }

    if points.len() < MIN_SERIES_POINTS {
        return Err(EntrygaugeError::InsufficientData {
            have: points.len(),
            need: MIN_SERIES_POINTS,
        });
    }

    if let Some(price) = override_price {
        if let Some(last) = points.last_mut() {
            last.close = price;
        }
    }

    Ok(PriceSeries {
        code: code.to_string(),
        points,
    })
}

fn same_month(a: chrono::NaiveDate, b: chrono::NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}
