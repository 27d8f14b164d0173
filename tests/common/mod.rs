#![allow(dead_code)]

use chrono::{Months, NaiveDate};
use entrygauge::domain::error::EntrygaugeError;
pub use entrygauge::domain::series::{Observation, PricePoint, PriceSeries};
use entrygauge::ports::data_port::DataPort;
use std::collections::HashMap;

pub struct MockDataPort {
    pub data: HashMap<String, Vec<Observation>>,
    pub errors: HashMap<String, String>,
}

impl MockDataPort {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
            errors: HashMap::new(),
        }
    }

    pub fn with_observations(mut self, code: &str, observations: Vec<Observation>) -> Self {
        self.data.insert(code.to_string(), observations);
        self
    }

    pub fn with_closes(self, code: &str, start: &str, closes: &[f64]) -> Self {
        let observations = monthly_observations(
            start,
            &closes.iter().map(|&c| Some(c)).collect::<Vec<_>>(),
        );
        self.with_observations(code, observations)
    }

    pub fn with_error(mut self, code: &str, reason: &str) -> Self {
        self.errors.insert(code.to_string(), reason.to_string());
        self
    }
}

impl DataPort for MockDataPort {
    fn fetch_monthly_closes(
        &self,
        code: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<Observation>, EntrygaugeError> {
        if let Some(reason) = self.errors.get(code) {
            return Err(EntrygaugeError::Data {
                reason: reason.clone(),
            });
        }
        Ok(self
            .data
            .get(code)
            .cloned()
            .unwrap_or_default()
            .into_iter()
            .filter(|o| o.date >= start_date && o.date <= end_date)
            .collect())
    }

    fn list_symbols(&self) -> Result<Vec<String>, EntrygaugeError> {
        let mut symbols: Vec<String> = self.data.keys().cloned().collect();
        symbols.sort();
        Ok(symbols)
    }

    fn get_data_range(
        &self,
        code: &str,
    ) -> Result<Option<(NaiveDate, NaiveDate, usize)>, EntrygaugeError> {
        if let Some(reason) = self.errors.get(code) {
            return Err(EntrygaugeError::Data {
                reason: reason.clone(),
            });
        }
        match self.data.get(code) {
            Some(observations) if !observations.is_empty() => {
                let min = observations.iter().map(|o| o.date).min().unwrap();
                let max = observations.iter().map(|o| o.date).max().unwrap();
                Ok(Some((min, max, observations.len())))
            }
            _ => Ok(None),
        }
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Consecutive monthly observations starting at `start` (YYYY-MM-DD).
pub fn monthly_observations(start: &str, closes: &[Option<f64>]) -> Vec<Observation> {
    let start = NaiveDate::parse_from_str(start, "%Y-%m-%d").unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| Observation {
            date: start + Months::new(i as u32),
            close,
        })
        .collect()
}

/// A cleaned series of consecutive monthly closes starting 2024-01-01.
pub fn make_series(code: &str, closes: &[f64]) -> PriceSeries {
    let start = date(2024, 1, 1);
    PriceSeries {
        code: code.to_string(),
        points: closes
            .iter()
            .enumerate()
            .map(|(i, &close)| PricePoint {
                date: start + Months::new(i as u32),
                close,
            })
            .collect(),
    }
}
