use chrono::{Months, NaiveDate};
use tracing::{debug, instrument};

use crate::error::{PlanningError, Result};
use crate::period::MonthYear;

/// The planning cycle of a scenario: the calendar month immediately before
/// the scenario's start month.
///
/// Displays as `MMMYY`, e.g. `Jan26`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cycle {
    /// First day of the cycle month.
    first_day: NaiveDate,
}

impl Cycle {
    /// Computes the cycle preceding `start`.
    ///
    /// The subtraction is done on calendar dates, so a January start rolls
    /// back to December of the previous year.
    #[instrument]
    pub fn preceding(start: MonthYear) -> Result<Self> {
        let start_day = NaiveDate::from_ymd_opt(start.year, start.month.number_from_month(), 1)
            .ok_or_else(|| PlanningError::Date(format!("{} is out of range", start)))?;
        let first_day = start_day
            .checked_sub_months(Months::new(1))
            .ok_or_else(|| PlanningError::Date(format!("no month precedes {}", start)))?;

        let cycle = Self { first_day };
        debug!("Cycle for start {} is {}", start, cycle);
        Ok(cycle)
    }

    /// Token `MMMYY` used in scenario names and the `scenario_cycle` column.
    pub fn token(&self) -> String {
        self.first_day.format("%b%y").to_string()
    }

    /// The cycle month as a `YYYYMM` storage token.
    pub fn period_token(&self) -> String {
        self.first_day.format("%Y%m").to_string()
    }
}

impl std::fmt::Display for Cycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.first_day.format("%b%y"))
    }
}
