//! Advisory classification of the allocation weight.

use serde::Serialize;
use std::fmt;

pub const STRONG_BUY_THRESHOLD: f64 = 0.8;
pub const PARTIAL_BUY_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Advice {
    StrongBuy,
    PartialBuy,
    HoldCash,
}

impl Advice {
    /// Classify the latest eligible weight. Thresholds are exclusive: a
    /// weight of exactly 0.8 is a partial buy, exactly 0.5 holds cash.
    pub fn from_weight(weight: f64) -> Self {
        if weight > STRONG_BUY_THRESHOLD {
            Advice::StrongBuy
        } else if weight > PARTIAL_BUY_THRESHOLD {
            Advice::PartialBuy
        } else {
            Advice::HoldCash
        }
    }
}

impl fmt::Display for Advice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advice::StrongBuy => write!(f, "strong buy"),
            Advice::PartialBuy => write!(f, "partial buy"),
            Advice::HoldCash => write!(f, "hold cash"),
        }
    }
}
