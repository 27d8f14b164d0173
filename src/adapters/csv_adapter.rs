//! CSV file data adapter.
//!
//! One file per instrument at `<base_path>/<CODE>.csv` with `date,close`
//! rows. A blank or `NA` close is kept as a missing observation so the
//! normalizer can drop it explicitly.

use crate::domain::error::EntrygaugeError;
use crate::domain::series::Observation;
use crate::ports::data_port::DataPort;
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

pub struct CsvAdapter {
    base_path: PathBuf,
}

impl CsvAdapter {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn csv_path(&self, code: &str) -> PathBuf {
        self.base_path.join(format!("{}.csv", code))
    }

    fn read_observations(&self, code: &str) -> Result<Vec<Observation>, EntrygaugeError> {
        let path = self.csv_path(code);
        let content = fs::read_to_string(&path).map_err(|e| EntrygaugeError::Data {
            reason: format!("failed to read {}: {}", path.display(), e),
        })?;

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let mut observations = Vec::new();

        for result in rdr.records() {
            let record = result.map_err(|e| EntrygaugeError::Data {
                reason: format!("CSV parse error: {}", e),
            })?;

            let date_str = record.get(0).ok_or_else(|| EntrygaugeError::Data {
                reason: "missing date column".into(),
            })?;
            let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|e| {
                EntrygaugeError::Data {
                    reason: format!("invalid date format: {}", e),
                }
            })?;

            let close_str = record
                .get(1)
                .ok_or_else(|| EntrygaugeError::Data {
                    reason: "missing close column".into(),
                })?
                .trim();

            let close = if close_str.is_empty() || close_str.eq_ignore_ascii_case("na") {
                None
            } else {
                let value: f64 = close_str.parse().map_err(|e| EntrygaugeError::Data {
                    reason: format!("invalid close value: {}", e),
                })?;
                Some(value)
            };

            observations.push(Observation { date, close });
        }

        observations.sort_by_key(|o| o.date);
        Ok(observations)
    }
}

impl DataPort for CsvAdapter {
    fn fetch_monthly_closes(
        &self,
        code: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<Observation>, EntrygaugeError> {
        let observations = self.read_observations(code)?;
        Ok(observations
            .into_iter()
            .filter(|o| o.date >= start_date && o.date <= end_date)
            .collect())
    }

    fn list_symbols(&self) -> Result<Vec<String>, EntrygaugeError> {
        let entries = fs::read_dir(&self.base_path).map_err(|e| EntrygaugeError::Data {
            reason: format!(
                "failed to read directory {}: {}",
                self.base_path.display(),
                e
            ),
        })?;

        let mut symbols = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|e| EntrygaugeError::Data {
                reason: format!("directory entry error: {}", e),
            })?;

            let name = entry.file_name();
            let name_str = name.to_string_lossy();

            if let Some(code) = name_str.strip_suffix(".csv") {
                symbols.push(code.to_string());
            }
        }

        symbols.sort();
        Ok(symbols)
    }

    fn get_data_range(
        &self,
        code: &str,
    ) -> Result<Option<(NaiveDate, NaiveDate, usize)>, EntrygaugeError> {
        if !self.csv_path(code).exists() {
            return Ok(None);
        }

        let observations = self.read_observations(code)?;
        match (observations.first(), observations.last()) {
            (Some(first), Some(last)) => Ok(Some((first.date, last.date, observations.len()))),
            _ => Ok(None),
        }
    }
}
