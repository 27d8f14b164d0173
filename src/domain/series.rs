//! Monthly price series representation.

use chrono::NaiveDate;
use serde::Serialize;

/// A raw monthly observation as delivered by a data provider. `close` is
/// `None` when the provider reported the month without a usable price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub date: NaiveDate,
    pub close: Option<f64>,
}

/// One calendar month, one positive close.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
}

/// Cleaned monthly close series: strictly ascending dates, one point per
/// month, every close finite and positive. Built by
/// [`normalize`](crate::domain::normalize::normalize).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSeries {
    pub code: String,
    pub points: Vec<PricePoint>,
}

impl PriceSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The most recent point, the only one a price override may touch.
    pub fn latest(&self) -> Option<&PricePoint> {
        self.points.last()
    }
}
