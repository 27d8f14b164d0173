//! Market-data provider port trait.

use crate::domain::error::EntrygaugeError;
use crate::domain::series::Observation;
use chrono::NaiveDate;

/// The narrow contract with the market-data provider: ordered monthly close
/// observations for one instrument over a window. Gaps and outages surface
/// as an empty or short series, never as partial results.
pub trait DataPort {
    fn fetch_monthly_closes(
        &self,
        code: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<Observation>, EntrygaugeError>;

    fn list_symbols(&self) -> Result<Vec<String>, EntrygaugeError>;

    fn get_data_range(
        &self,
        code: &str,
    ) -> Result<Option<(NaiveDate, NaiveDate, usize)>, EntrygaugeError>;
}
