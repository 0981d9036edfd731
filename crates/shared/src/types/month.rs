//! Calendar month keys.
//!
//! A budget plan always spans exactly the twelve calendar months. Months are
//! parsed leniently (short name, full name, 1-based number) because they come
//! from hand-edited spreadsheets.

use serde::{Deserialize, Serialize};

/// One of the twelve calendar months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Month {
    /// January
    Jan,
    /// February
    Feb,
    /// March
    Mar,
    /// April
    Apr,
    /// May
    May,
    /// June
    Jun,
    /// July
    Jul,
    /// August
    Aug,
    /// September
    Sep,
    /// October
    Oct,
    /// November
    Nov,
    /// December
    Dec,
}

impl Month {
    /// All months in calendar order.
    pub const ALL: [Self; 12] = [
        Self::Jan,
        Self::Feb,
        Self::Mar,
        Self::Apr,
        Self::May,
        Self::Jun,
        Self::Jul,
        Self::Aug,
        Self::Sep,
        Self::Oct,
        Self::Nov,
        Self::Dec,
    ];

    /// Zero-based position in the calendar year.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// One-based month number (January = 1).
    #[must_use]
    pub const fn number(self) -> u32 {
        self as u32 + 1
    }

    /// Returns the month for a one-based number, if it is in `1..=12`.
    #[must_use]
    pub fn from_number(number: u32) -> Option<Self> {
        let index = usize::try_from(number.checked_sub(1)?).ok()?;
        Self::ALL.get(index).copied()
    }

    /// Three-letter name, e.g. `"Jan"`.
    #[must_use]
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::Jan => "Jan",
            Self::Feb => "Feb",
            Self::Mar => "Mar",
            Self::Apr => "Apr",
            Self::May => "May",
            Self::Jun => "Jun",
            Self::Jul => "Jul",
            Self::Aug => "Aug",
            Self::Sep => "Sep",
            Self::Oct => "Oct",
            Self::Nov => "Nov",
            Self::Dec => "Dec",
        }
    }

    /// Full English name, e.g. `"January"`.
    #[must_use]
    pub const fn full_name(self) -> &'static str {
        match self {
            Self::Jan => "January",
            Self::Feb => "February",
            Self::Mar => "March",
            Self::Apr => "April",
            Self::May => "May",
            Self::Jun => "June",
            Self::Jul => "July",
            Self::Aug => "August",
            Self::Sep => "September",
            Self::Oct => "October",
            Self::Nov => "November",
            Self::Dec => "December",
        }
    }

    /// The month before this one, or January itself.
    ///
    /// This is the default comparison month: January has no earlier month in
    /// the plan, so it compares against itself.
    #[must_use]
    pub fn previous_or_self(self) -> Self {
        match self.index() {
            0 => self,
            i => Self::ALL[i - 1],
        }
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.short_name())
    }
}

impl From<chrono::Month> for Month {
    fn from(month: chrono::Month) -> Self {
        Self::ALL[month.number_from_month() as usize - 1]
    }
}

impl std::str::FromStr for Month {
    type Err = String;

    /// Accepts `"Jan"`, `"january"`, `"JANUARY"` and `"1"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(number) = trimmed.parse::<u32>() {
            return Self::from_number(number).ok_or_else(|| format!("Unknown month: {s}"));
        }
        trimmed
            .parse::<chrono::Month>()
            .map(Self::from)
            .map_err(|_| format!("Unknown month: {s}"))
    }
}

#[cfg(test)]
#[path = "month_tests.rs"]
mod tests;
