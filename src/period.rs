//! A calendar amount of years, months, and days.

use serde::{Deserialize, Serialize};

/// An amount of time expressed in calendar units.
///
/// Unlike a day count, a period keeps years, months, and days apart, so that
/// adding it to a date moves by whole calendar months first and days second.
/// Components may be negative; a period is not normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Period {
    years: i64,
    months: i64,
    days: i64,
}

impl Period {
    /// A period of zero length.
    pub const ZERO: Self = Self {
        years: 0,
        months: 0,
        days: 0,
    };

    /// Creates a period from years, months, and days.
    pub const fn new(years: i64, months: i64, days: i64) -> Self {
        Self {
            years,
            months,
            days,
        }
    }

    /// Creates a period of whole years.
    pub const fn of_years(years: i64) -> Self {
        Self::new(years, 0, 0)
    }

    /// Creates a period of whole months.
    pub const fn of_months(months: i64) -> Self {
        Self::new(0, months, 0)
    }

    /// Creates a period of whole weeks, stored as days.
    pub const fn of_weeks(weeks: i64) -> Self {
        Self::new(0, 0, weeks * 7)
    }

    /// Creates a period of whole days.
    pub const fn of_days(days: i64) -> Self {
        Self::new(0, 0, days)
    }

    /// Returns the years component.
    pub const fn years(&self) -> i64 {
        self.years
    }

    /// Returns the months component.
    pub const fn months(&self) -> i64 {
        self.months
    }

    /// Returns the days component.
    pub const fn days(&self) -> i64 {
        self.days
    }

    /// Returns the years and months components folded into months.
    pub const fn total_months(&self) -> i64 {
        self.years * 12 + self.months
    }

    /// Returns whether all three components are zero.
    pub const fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0 && self.days == 0
    }
}
