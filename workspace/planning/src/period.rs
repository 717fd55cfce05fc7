use chrono::Month;

/// Canonical month tokens accepted on the wire, in calendar order.
pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Parses a canonical 3-letter month token. Matching is case-sensitive.
pub fn parse_month(token: &str) -> Option<Month> {
    let index = MONTHS.iter().position(|month| *month == token)?;
    Month::try_from(index as u8 + 1).ok()
}

/// The canonical 3-letter token of a month.
pub fn month_token(month: Month) -> &'static str {
    MONTHS[month.number_from_month() as usize - 1]
}

/// A calendar month of a specific year, as submitted for a scenario's start
/// or end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthYear {
    pub month: Month,
    pub year: i32,
}

impl MonthYear {
    pub fn new(month: Month, year: i32) -> Self {
        Self { month, year }
    }

    /// Storage token `YYYYMM`.
    pub fn period_token(&self) -> String {
        format!("{:04}{:02}", self.year, self.month.number_from_month())
    }
}

impl std::fmt::Display for MonthYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:04}", month_token(self.month), self.year)
    }
}
