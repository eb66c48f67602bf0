//! The immutable date value and its arithmetic.

use std::fmt;
use std::str::FromStr;

use crate::consts::{DATE_SEPARATOR, MAX_MONTH, MAX_YEAR, MIN_DAY, MIN_YEAR};
use crate::epoch;
use crate::error::DateError;
use crate::fields::{DateField, DateUnit};
use crate::leap::{day_of_year, is_leap_year, month_day_of_year, month_length, year_length};
use crate::period::Period;
use crate::seq::DateSeq;

/// Epoch day of the minimum supported date.
pub(crate) const EPOCH_MIN: i64 = epoch::year_start(MIN_YEAR as i64);
/// Epoch day of the maximum supported date (day 365 of the maximum year).
pub(crate) const EPOCH_MAX: i64 = epoch::year_start(MAX_YEAR as i64) + 364;

/// A date in the Iranian solar calendar.
///
/// A value is an immutable `(year, month, day)` triple that is valid by
/// construction: the month is in `1..=12` and the day fits the month's
/// length in that year. Every modifying operation returns a new value.
///
/// Ordering is lexicographic on `(year, month, day)`, which coincides with
/// epoch-day order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IranianDate {
    year: i32,
    month: u8,
    day: u8,
}

impl IranianDate {
    /// The minimum supported date, first day of the minimum year.
    pub const MIN: Self = Self {
        year: MIN_YEAR,
        month: 1,
        day: 1,
    };

    /// The maximum supported date, `MAX_YEAR-12-29`.
    ///
    /// Day 29 is the conservative choice: it is valid whether or not the
    /// maximum year is leap.
    pub const MAX: Self = Self {
        year: MAX_YEAR,
        month: 12,
        day: 29,
    };

    /// Creates a date from year, month, and day.
    ///
    /// # Errors
    /// Returns [`DateError::InvalidField`] if the year is out of the
    /// supported range, the month is not in `1..=12`, or the day does not
    /// exist in that month (which includes day 30 of the twelfth month in
    /// a non-leap year).
    pub fn of(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        check_year(i64::from(year))?;
        if !(MIN_DAY..=MAX_MONTH).contains(&month) {
            return Err(DateError::InvalidField {
                field: DateField::MonthOfYear,
                value: i64::from(month),
            });
        }
        if !(MIN_DAY..=month_length(year, month)).contains(&day) {
            return Err(DateError::InvalidField {
                field: DateField::DayOfMonth,
                value: i64::from(day),
            });
        }
        Ok(Self { year, month, day })
    }

    /// Creates a date from a year and a 1-based day-of-year.
    ///
    /// # Errors
    /// Returns [`DateError::InvalidField`] if the year is out of range or
    /// the day-of-year exceeds the year's length (366 is only valid in
    /// leap years).
    pub fn of_year_day(year: i32, day_of_year: u16) -> Result<Self, DateError> {
        check_year(i64::from(year))?;
        if !(1..=year_length(year)).contains(&day_of_year) {
            return Err(DateError::InvalidField {
                field: DateField::DayOfYear,
                value: i64::from(day_of_year),
            });
        }
        let (month, day) = month_day_of_year(day_of_year);
        Ok(Self { year, month, day })
    }

    /// Creates a date from a count of days since 1970-01-01 Gregorian.
    ///
    /// # Errors
    /// Returns [`DateError::InvalidField`] if the epoch day falls outside
    /// the supported date range.
    pub fn of_epoch_day(epoch_day: i64) -> Result<Self, DateError> {
        if !(EPOCH_MIN..=EPOCH_MAX).contains(&epoch_day) {
            return Err(DateError::InvalidField {
                field: DateField::EpochDay,
                value: epoch_day,
            });
        }
        Ok(Self::from_epoch_day_unchecked(epoch_day))
    }

    /// `epoch_day` must already be within `EPOCH_MIN..=EPOCH_MAX`.
    fn from_epoch_day_unchecked(epoch_day: i64) -> Self {
        let (year, doy) = epoch::from_epoch_day(epoch_day);
        let (month, day) = month_day_of_year(doy);
        Self {
            year: year as i32,
            month,
            day,
        }
    }

    /// Resolves a day past the end of its month to the last valid day.
    /// `year` and `month` must already be validated.
    fn resolve_previous_valid(year: i32, month: u8, day: u8) -> Self {
        Self {
            year,
            month,
            day: day.min(month_length(year, month)),
        }
    }

    //--------------------------------------------------------------------

    /// Returns the proleptic year.
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month of the year (1..=12).
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the day of the month (1..=31).
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Returns the 1-based day-of-year (1..=366).
    pub const fn day_of_year(&self) -> u16 {
        day_of_year(self.month, self.day)
    }

    /// Returns the day of the week (1..=7); epoch day 0 is day 4.
    pub const fn day_of_week(&self) -> u8 {
        ((self.to_epoch_day() + 3).rem_euclid(7) + 1) as u8
    }

    /// Returns the count of days since 1970-01-01 Gregorian.
    pub const fn to_epoch_day(self) -> i64 {
        epoch::to_epoch_day(self.year as i64, day_of_year(self.month, self.day))
    }

    /// Linear month index used for month arithmetic.
    pub(crate) const fn proleptic_month(&self) -> i64 {
        self.year as i64 * 12 + self.month as i64 - 1
    }

    /// Returns whether this date's year is a leap year.
    pub const fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    /// Returns the length of this date's month in days.
    pub const fn length_of_month(&self) -> u8 {
        month_length(self.year, self.month)
    }

    /// Returns the length of this date's year in days.
    pub const fn length_of_year(&self) -> u16 {
        year_length(self.year)
    }

    //--------------------------------------------------------------------

    /// Reads a field through the generic field surface.
    ///
    /// # Errors
    /// Returns [`DateError::UnsupportedField`] for epoch-day and
    /// proleptic-month, which must be read through their dedicated
    /// accessors, and [`DateError::EraNotSupported`] for the era fields.
    pub fn get(&self, field: DateField) -> Result<i64, DateError> {
        match field {
            DateField::DayOfWeek => Ok(i64::from(self.day_of_week())),
            DateField::AlignedDayOfWeekInMonth => Ok((i64::from(self.day) - 1) % 7 + 1),
            DateField::AlignedDayOfWeekInYear => Ok((i64::from(self.day_of_year()) - 1) % 7 + 1),
            DateField::DayOfMonth => Ok(i64::from(self.day)),
            DateField::DayOfYear => Ok(i64::from(self.day_of_year())),
            DateField::AlignedWeekOfMonth => Ok((i64::from(self.day) - 1) / 7 + 1),
            DateField::AlignedWeekOfYear => Ok((i64::from(self.day_of_year()) - 1) / 7 + 1),
            DateField::MonthOfYear => Ok(i64::from(self.month)),
            DateField::Year => Ok(i64::from(self.year)),
            DateField::EpochDay | DateField::ProlepticMonth => {
                Err(DateError::UnsupportedField { field })
            }
            DateField::Era | DateField::YearOfEra => Err(DateError::EraNotSupported),
        }
    }

    /// Returns a copy of this date with `field` set to `value`.
    ///
    /// Fields that name a position within a larger cycle (day-of-week,
    /// aligned fields) move the date by the difference; the era fields
    /// always fail.
    ///
    /// # Errors
    /// Returns [`DateError::InvalidField`] when `value` is outside the
    /// field's range and [`DateError::EraNotSupported`] for era fields.
    pub fn with_field(&self, field: DateField, value: i64) -> Result<Self, DateError> {
        let invalid = || DateError::InvalidField { field, value };
        match field {
            DateField::DayOfWeek => {
                if !(1..=7).contains(&value) {
                    return Err(invalid());
                }
                self.plus_days(value - i64::from(self.day_of_week()))
            }
            DateField::AlignedDayOfWeekInMonth | DateField::AlignedDayOfWeekInYear => {
                if !(1..=7).contains(&value) {
                    return Err(invalid());
                }
                self.plus_days(value - self.get(field)?)
            }
            DateField::DayOfMonth => {
                let day = u8::try_from(value).map_err(|_| invalid())?;
                self.with_day_of_month(day)
            }
            DateField::DayOfYear => {
                let doy = u16::try_from(value).map_err(|_| invalid())?;
                self.with_day_of_year(doy)
            }
            DateField::EpochDay => Self::of_epoch_day(value),
            DateField::AlignedWeekOfMonth => {
                if !(1..=5).contains(&value) {
                    return Err(invalid());
                }
                self.plus_weeks(value - self.get(field)?)
            }
            DateField::AlignedWeekOfYear => {
                if !(1..=53).contains(&value) {
                    return Err(invalid());
                }
                self.plus_weeks(value - self.get(field)?)
            }
            DateField::MonthOfYear => {
                let month = u8::try_from(value).map_err(|_| invalid())?;
                self.with_month(month)
            }
            DateField::ProlepticMonth => self.plus_months(value - self.proleptic_month()),
            DateField::Year => {
                let year = i32::try_from(value).map_err(|_| invalid())?;
                self.with_year(year)
            }
            DateField::Era | DateField::YearOfEra => Err(DateError::EraNotSupported),
        }
    }

    /// Returns a copy of this date with the year changed, resolving the
    /// day to the last valid day of the month when it no longer exists.
    ///
    /// # Errors
    /// Returns [`DateError::InvalidField`] if the year is out of range.
    pub fn with_year(&self, year: i32) -> Result<Self, DateError> {
        if self.year == year {
            return Ok(*self);
        }
        check_year(i64::from(year))?;
        Ok(Self::resolve_previous_valid(year, self.month, self.day))
    }

    /// Returns a copy of this date with the month changed, resolving the
    /// day to the last valid day of the month when it no longer exists.
    ///
    /// # Errors
    /// Returns [`DateError::InvalidField`] if the month is not in `1..=12`.
    pub fn with_month(&self, month: u8) -> Result<Self, DateError> {
        if self.month == month {
            return Ok(*self);
        }
        if !(MIN_DAY..=MAX_MONTH).contains(&month) {
            return Err(DateError::InvalidField {
                field: DateField::MonthOfYear,
                value: i64::from(month),
            });
        }
        Ok(Self::resolve_previous_valid(self.year, month, self.day))
    }

    /// Returns a copy of this date with the day-of-month changed.
    ///
    /// # Errors
    /// Returns [`DateError::InvalidField`] if the day does not exist in
    /// this month.
    pub fn with_day_of_month(&self, day: u8) -> Result<Self, DateError> {
        if self.day == day {
            return Ok(*self);
        }
        Self::of(self.year, self.month, day)
    }

    /// Returns a copy of this date with the day-of-year changed.
    ///
    /// # Errors
    /// Returns [`DateError::InvalidField`] if the day-of-year is invalid
    /// for this year.
    pub fn with_day_of_year(&self, day_of_year: u16) -> Result<Self, DateError> {
        if self.day_of_year() == day_of_year {
            return Ok(*self);
        }
        Self::of_year_day(self.year, day_of_year)
    }

    //--------------------------------------------------------------------

    /// Returns a copy of this date with `days` added.
    ///
    /// # Errors
    /// Returns [`DateError::InvalidField`] if the result leaves the
    /// supported range.
    pub fn plus_days(&self, days: i64) -> Result<Self, DateError> {
        self.add_days(i128::from(days))
    }

    /// Returns a copy of this date with `weeks * 7` days added.
    ///
    /// # Errors
    /// Returns [`DateError::InvalidField`] if the result leaves the
    /// supported range.
    pub fn plus_weeks(&self, weeks: i64) -> Result<Self, DateError> {
        self.add_days(i128::from(weeks) * 7)
    }

    /// Returns a copy of this date with `months` added.
    ///
    /// When the day-of-month does not exist in the target month it is
    /// resolved to the last valid day; day overflow never fails.
    ///
    /// # Errors
    /// Returns [`DateError::InvalidField`] if the resulting year leaves
    /// the supported range.
    pub fn plus_months(&self, months: i64) -> Result<Self, DateError> {
        self.add_months(i128::from(months))
    }

    /// Returns a copy of this date with `years` added, with the same
    /// last-valid-day resolution as [`plus_months`](Self::plus_months)
    /// (day 30 of the twelfth month moving to a non-leap year becomes 29).
    ///
    /// # Errors
    /// Returns [`DateError::InvalidField`] if the resulting year leaves
    /// the supported range.
    pub fn plus_years(&self, years: i64) -> Result<Self, DateError> {
        self.add_years(i128::from(years))
    }

    /// Returns a copy of this date moved by `amount` of `unit`.
    ///
    /// # Errors
    /// Returns [`DateError::UnsupportedUnit`] for the eras unit, or
    /// [`DateError::InvalidField`] if the result leaves the supported
    /// range.
    pub fn plus(&self, amount: i64, unit: DateUnit) -> Result<Self, DateError> {
        match unit {
            DateUnit::Days => self.plus_days(amount),
            DateUnit::Weeks => self.plus_weeks(amount),
            DateUnit::Months => self.plus_months(amount),
            DateUnit::Years => self.plus_years(amount),
            DateUnit::Decades => self.add_years(i128::from(amount) * 10),
            DateUnit::Centuries => self.add_years(i128::from(amount) * 100),
            DateUnit::Millennia => self.add_years(i128::from(amount) * 1000),
            DateUnit::Eras => Err(DateError::UnsupportedUnit { unit }),
        }
    }

    /// Returns a copy of this date moved back by `amount` of `unit`.
    ///
    /// # Errors
    /// Same conditions as [`plus`](Self::plus).
    pub fn minus(&self, amount: i64, unit: DateUnit) -> Result<Self, DateError> {
        if amount == i64::MIN {
            self.plus(i64::MAX, unit)?.plus(1, unit)
        } else {
            self.plus(-amount, unit)
        }
    }

    /// Returns a copy of this date with `days` subtracted.
    ///
    /// # Errors
    /// Returns [`DateError::InvalidField`] if the result leaves the
    /// supported range.
    pub fn minus_days(&self, days: i64) -> Result<Self, DateError> {
        if days == i64::MIN {
            self.plus_days(i64::MAX)?.plus_days(1)
        } else {
            self.plus_days(-days)
        }
    }

    /// Returns a copy of this date with `weeks * 7` days subtracted.
    ///
    /// # Errors
    /// Returns [`DateError::InvalidField`] if the result leaves the
    /// supported range.
    pub fn minus_weeks(&self, weeks: i64) -> Result<Self, DateError> {
        if weeks == i64::MIN {
            self.plus_weeks(i64::MAX)?.plus_weeks(1)
        } else {
            self.plus_weeks(-weeks)
        }
    }

    /// Returns a copy of this date with `months` subtracted, resolving the
    /// day to the last valid day of the target month when needed.
    ///
    /// # Errors
    /// Returns [`DateError::InvalidField`] if the resulting year leaves
    /// the supported range.
    pub fn minus_months(&self, months: i64) -> Result<Self, DateError> {
        if months == i64::MIN {
            self.plus_months(i64::MAX)?.plus_months(1)
        } else {
            self.plus_months(-months)
        }
    }

    /// Returns a copy of this date with `years` subtracted, resolving the
    /// day to the last valid day of the target month when needed.
    ///
    /// # Errors
    /// Returns [`DateError::InvalidField`] if the resulting year leaves
    /// the supported range.
    pub fn minus_years(&self, years: i64) -> Result<Self, DateError> {
        if years == i64::MIN {
            self.plus_years(i64::MAX)?.plus_years(1)
        } else {
            self.plus_years(-years)
        }
    }

    /// Returns a copy of this date with a whole period added: months
    /// first, then days.
    ///
    /// # Errors
    /// Returns [`DateError::InvalidField`] if an intermediate or final
    /// result leaves the supported range.
    pub fn plus_period(&self, period: Period) -> Result<Self, DateError> {
        self.plus_months(period.total_months())?.plus_days(period.days())
    }

    /// Returns a copy of this date with a whole period subtracted: months
    /// first, then days.
    ///
    /// # Errors
    /// Returns [`DateError::InvalidField`] if an intermediate or final
    /// result leaves the supported range.
    pub fn minus_period(&self, period: Period) -> Result<Self, DateError> {
        self.minus_months(period.total_months())?.minus_days(period.days())
    }

    fn add_days(&self, days: i128) -> Result<Self, DateError> {
        if days == 0 {
            return Ok(*self);
        }
        // In-month fast path; anything else goes through the epoch codec.
        let dom = i128::from(self.day) + days;
        if (1..=i128::from(self.length_of_month())).contains(&dom) {
            return Ok(Self {
                day: dom as u8,
                ..*self
            });
        }
        let epoch_day = i128::from(self.to_epoch_day()) + days;
        if !(i128::from(EPOCH_MIN)..=i128::from(EPOCH_MAX)).contains(&epoch_day) {
            return Err(DateError::InvalidField {
                field: DateField::EpochDay,
                value: saturating_i64(epoch_day),
            });
        }
        Ok(Self::from_epoch_day_unchecked(epoch_day as i64))
    }

    fn add_months(&self, months: i128) -> Result<Self, DateError> {
        if months == 0 {
            return Ok(*self);
        }
        let total = i128::from(self.proleptic_month()) + months;
        let year = total.div_euclid(12);
        let month = total.rem_euclid(12) as u8 + 1;
        check_year_wide(year)?;
        Ok(Self::resolve_previous_valid(year as i32, month, self.day))
    }

    fn add_years(&self, years: i128) -> Result<Self, DateError> {
        if years == 0 {
            return Ok(*self);
        }
        let year = i128::from(self.year) + years;
        check_year_wide(year)?;
        Ok(Self::resolve_previous_valid(year as i32, self.month, self.day))
    }

    //--------------------------------------------------------------------

    /// Returns the signed number of days from this date to `end`.
    pub const fn days_until(&self, end: &Self) -> i64 {
        end.to_epoch_day() - self.to_epoch_day()
    }

    /// Whole months from this date to `end`, truncated toward zero. The
    /// packed `proleptic_month * 32 + day` form compares month positions
    /// and day positions in one subtraction.
    const fn months_until(&self, end: &Self) -> i64 {
        let packed1 = self.proleptic_month() * 32 + self.day as i64;
        let packed2 = end.proleptic_month() * 32 + end.day as i64;
        (packed2 - packed1) / 32
    }

    /// Returns the signed amount of `unit` from this date to `end`
    /// (exclusive), truncated toward zero.
    ///
    /// # Errors
    /// Returns [`DateError::EraNotSupported`] for the eras unit.
    pub fn until_in(&self, end: &Self, unit: DateUnit) -> Result<i64, DateError> {
        match unit {
            DateUnit::Days => Ok(self.days_until(end)),
            DateUnit::Weeks => Ok(self.days_until(end) / 7),
            DateUnit::Months => Ok(self.months_until(end)),
            DateUnit::Years => Ok(self.months_until(end) / 12),
            DateUnit::Decades => Ok(self.months_until(end) / 120),
            DateUnit::Centuries => Ok(self.months_until(end) / 1200),
            DateUnit::Millennia => Ok(self.months_until(end) / 12000),
            DateUnit::Eras => Err(DateError::EraNotSupported),
        }
    }

    /// Decomposes the span from this date to `end` (exclusive) into a
    /// period of years, months, and days.
    ///
    /// A positive month count with a negative day remainder borrows one
    /// month back and recounts the days against the actual month lengths,
    /// and symmetrically for the negative case, so variable-length months
    /// are accounted exactly.
    pub fn until(&self, end: &Self) -> Period {
        let mut total_months = end.proleptic_month() - self.proleptic_month();
        let mut days = i64::from(end.day) - i64::from(self.day);
        if total_months > 0 && days < 0 {
            total_months -= 1;
            if let Ok(calc) = self.plus_months(total_months) {
                days = end.to_epoch_day() - calc.to_epoch_day();
            }
        } else if total_months < 0 && days > 0 {
            total_months += 1;
            days -= i64::from(end.length_of_month());
        }
        Period::new(total_months / 12, total_months % 12, days)
    }

    //--------------------------------------------------------------------

    /// Returns a lazy sequence of dates from this date (inclusive) to
    /// `end_exclusive`, stepped by one day.
    ///
    /// # Errors
    /// Returns [`DateError::DirectionMismatch`] if `end_exclusive` is
    /// before this date.
    pub fn dates_until(&self, end_exclusive: Self) -> Result<DateSeq, DateError> {
        self.dates_until_by(end_exclusive, Period::of_days(1))
    }

    /// Returns a lazy sequence of dates from this date (inclusive) to
    /// `end_exclusive`, advancing by `step` each time. Element `n` equals
    /// `self` plus `step` applied `n` times.
    ///
    /// # Errors
    /// Returns [`DateError::InvalidStep`] if `step` is zero or its month
    /// and day components have opposite signs, and
    /// [`DateError::DirectionMismatch`] if `step` points away from
    /// `end_exclusive`.
    pub fn dates_until_by(&self, end_exclusive: Self, step: Period) -> Result<DateSeq, DateError> {
        DateSeq::new(*self, end_exclusive, step)
    }

    //--------------------------------------------------------------------

    /// Returns whether this date is strictly after `other`.
    pub fn is_after(&self, other: &Self) -> bool {
        self > other
    }

    /// Returns whether this date is strictly before `other`.
    pub fn is_before(&self, other: &Self) -> bool {
        self < other
    }

    /// Returns whether this date equals `other`.
    pub fn is_equal(&self, other: &Self) -> bool {
        self == other
    }
}

fn check_year(year: i64) -> Result<(), DateError> {
    if (i64::from(MIN_YEAR)..=i64::from(MAX_YEAR)).contains(&year) {
        Ok(())
    } else {
        Err(DateError::InvalidField {
            field: DateField::Year,
            value: year,
        })
    }
}

fn check_year_wide(year: i128) -> Result<(), DateError> {
    if (i128::from(MIN_YEAR)..=i128::from(MAX_YEAR)).contains(&year) {
        Ok(())
    } else {
        Err(DateError::InvalidField {
            field: DateField::Year,
            value: saturating_i64(year),
        })
    }
}

fn saturating_i64(value: i128) -> i64 {
    value.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}

impl fmt::Display for IranianDate {
    /// Fixed-width form: the year zero-padded to at least three digits,
    /// prefixed with `+` above 9999, then two-digit month and day.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let abs_year = self.year.abs();
        if abs_year < 1000 {
            if self.year < 0 {
                write!(f, "-")?;
            }
            write!(f, "{abs_year:03}")?;
        } else {
            if self.year > 9999 {
                write!(f, "+")?;
            }
            write!(f, "{}", self.year)?;
        }
        write!(f, "-{:02}-{:02}", self.month, self.day)
    }
}

impl FromStr for IranianDate {
    type Err = DateError;

    /// Parses the textual form produced by `Display`: an optional sign,
    /// the year, and zero-padded month and day separated by hyphens.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::InvalidFormat("empty date string".to_owned()));
        }
        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        let parts: Vec<&str> = rest.split(DATE_SEPARATOR).collect();
        if parts.len() != 3 {
            return Err(DateError::InvalidFormat(format!(
                "expected year{DATE_SEPARATOR}month{DATE_SEPARATOR}day: {trimmed}"
            )));
        }
        let year: i64 = parts[0]
            .parse()
            .map_err(|_| DateError::InvalidFormat(parts[0].to_owned()))?;
        let year = if negative { -year } else { year };
        let month: u8 = parts[1]
            .parse()
            .map_err(|_| DateError::InvalidFormat(parts[1].to_owned()))?;
        let day: u8 = parts[2]
            .parse()
            .map_err(|_| DateError::InvalidFormat(parts[2].to_owned()))?;
        check_year(year)?;
        Self::of(year as i32, month, day)
    }
}

impl serde::Serialize for IranianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for IranianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u8, day: u8) -> IranianDate {
        match IranianDate::of(year, month, day) {
            Ok(d) => d,
            Err(e) => panic!("invalid test date {year}-{month}-{day}: {e}"),
        }
    }

    #[test]
    fn test_of_valid() {
        let d = date(6404, 1, 16);
        assert_eq!(d.year(), 6404);
        assert_eq!(d.month(), 1);
        assert_eq!(d.day(), 16);
    }

    #[test]
    fn test_of_invalid_month() {
        assert!(matches!(
            IranianDate::of(6404, 13, 1),
            Err(DateError::InvalidField {
                field: DateField::MonthOfYear,
                value: 13
            })
        ));
        assert!(IranianDate::of(6404, 0, 1).is_err());
    }

    #[test]
    fn test_of_invalid_day() {
        assert!(matches!(
            IranianDate::of(6404, 1, 32),
            Err(DateError::InvalidField {
                field: DateField::DayOfMonth,
                value: 32
            })
        ));
        assert!(IranianDate::of(6404, 1, 0).is_err());
        assert!(IranianDate::of(6404, 7, 31).is_err());
    }

    #[test]
    fn test_of_final_month_day_30_needs_leap_year() {
        assert!(IranianDate::of(6403, 12, 30).is_ok());
        assert!(IranianDate::of(6404, 12, 30).is_err());
        assert!(IranianDate::of(6404, 12, 29).is_ok());
    }

    #[test]
    fn test_of_invalid_year() {
        assert!(IranianDate::of(1_000_000_000, 1, 1).is_err());
        assert!(IranianDate::of(-1_000_000_000, 1, 1).is_err());
    }

    #[test]
    fn test_of_year_day() {
        assert_eq!(IranianDate::of_year_day(6404, 365), Ok(date(6404, 12, 29)));
        assert_eq!(IranianDate::of_year_day(6403, 366), Ok(date(6403, 12, 30)));
        assert_eq!(IranianDate::of_year_day(6404, 16), Ok(date(6404, 1, 16)));
        assert!(matches!(
            IranianDate::of_year_day(6404, 366),
            Err(DateError::InvalidField {
                field: DateField::DayOfYear,
                value: 366
            })
        ));
        assert!(IranianDate::of_year_day(6404, 0).is_err());
    }

    #[test]
    fn test_of_epoch_day_anchor_fixtures() {
        assert_eq!(IranianDate::of_epoch_day(0), Ok(date(6348, 10, 11)));
        assert_eq!(IranianDate::of_epoch_day(79), Ok(date(6349, 1, 1)));
        assert_eq!(IranianDate::of_epoch_day(78), Ok(date(6348, 12, 29)));
        assert_eq!(IranianDate::of_epoch_day(-286), Ok(date(6348, 1, 1)));
        assert_eq!(IranianDate::of_epoch_day(-287), Ok(date(6347, 12, 29)));
    }

    #[test]
    fn test_of_epoch_day_modern_fixtures() {
        // 2025-03-21 and 2025-04-05 Gregorian.
        assert_eq!(IranianDate::of_epoch_day(20168), Ok(date(6404, 1, 1)));
        assert_eq!(IranianDate::of_epoch_day(20183), Ok(date(6404, 1, 16)));
        // 2025-03-20, the leap day closing year 6403.
        assert_eq!(IranianDate::of_epoch_day(20167), Ok(date(6403, 12, 30)));
    }

    #[test]
    fn test_of_epoch_day_out_of_range() {
        assert!(IranianDate::of_epoch_day(EPOCH_MAX + 1).is_err());
        assert!(IranianDate::of_epoch_day(EPOCH_MIN - 1).is_err());
        assert!(IranianDate::of_epoch_day(i64::MAX).is_err());
        assert!(IranianDate::of_epoch_day(i64::MIN).is_err());
    }

    #[test]
    fn test_min_max_roundtrip() {
        assert_eq!(
            IranianDate::of_epoch_day(IranianDate::MIN.to_epoch_day()),
            Ok(IranianDate::MIN)
        );
        assert_eq!(
            IranianDate::of_epoch_day(IranianDate::MAX.to_epoch_day()),
            Ok(IranianDate::MAX)
        );
        assert_eq!(IranianDate::MIN.to_epoch_day(), EPOCH_MIN);
        assert_eq!(IranianDate::MAX.to_epoch_day(), EPOCH_MAX);
    }

    #[test]
    fn test_to_epoch_day_fixtures() {
        assert_eq!(date(6348, 10, 11).to_epoch_day(), 0);
        assert_eq!(date(6349, 1, 1).to_epoch_day(), 79);
        assert_eq!(date(6348, 1, 1).to_epoch_day(), -286);
        assert_eq!(date(6347, 12, 29).to_epoch_day(), -287);
        assert_eq!(date(6404, 1, 16).to_epoch_day(), 20183);
    }

    #[test]
    fn test_epoch_roundtrip_range() {
        for epoch_day in -40_000..40_000 {
            let d = match IranianDate::of_epoch_day(epoch_day) {
                Ok(d) => d,
                Err(e) => panic!("epoch day {epoch_day}: {e}"),
            };
            assert_eq!(d.to_epoch_day(), epoch_day, "epoch day {epoch_day}");
        }
    }

    #[test]
    fn test_day_of_week() {
        assert_eq!(date(6404, 1, 16).day_of_week(), 6);
        // Epoch day 0 (1970-01-01, a Thursday) anchors at 4.
        assert_eq!(date(6348, 10, 11).day_of_week(), 4);
        // Consecutive days cycle through 1..=7.
        let mut d = date(6404, 1, 1);
        for _ in 0..20 {
            let next = match d.plus_days(1) {
                Ok(n) => n,
                Err(e) => panic!("{e}"),
            };
            assert_eq!(
                i64::from(next.day_of_week()),
                i64::from(d.day_of_week()) % 7 + 1
            );
            d = next;
        }
    }

    #[test]
    fn test_day_of_year() {
        assert_eq!(date(6404, 1, 16).day_of_year(), 16);
        assert_eq!(date(6348, 10, 11).day_of_year(), 287);
        assert_eq!(date(6403, 12, 30).day_of_year(), 366);
    }

    #[test]
    fn test_proleptic_month() {
        assert_eq!(date(6404, 1, 16).proleptic_month(), 76848);
    }

    #[test]
    fn test_lengths() {
        assert!(date(6403, 1, 1).is_leap_year());
        assert!(!date(6404, 1, 1).is_leap_year());
        assert_eq!(date(6403, 1, 1).length_of_year(), 366);
        assert_eq!(date(6404, 1, 1).length_of_year(), 365);
        assert_eq!(date(6403, 12, 1).length_of_month(), 30);
        assert_eq!(date(6404, 12, 1).length_of_month(), 29);
        for month in 1..=6 {
            assert_eq!(date(6404, month, 1).length_of_month(), 31);
        }
        for month in 7..=11 {
            assert_eq!(date(6404, month, 1).length_of_month(), 30);
        }
    }

    #[test]
    fn test_get_supported_fields() {
        let d = date(6404, 1, 16);
        assert_eq!(d.get(DateField::DayOfWeek), Ok(6));
        assert_eq!(d.get(DateField::AlignedDayOfWeekInMonth), Ok(2));
        assert_eq!(d.get(DateField::AlignedDayOfWeekInYear), Ok(2));
        assert_eq!(d.get(DateField::DayOfMonth), Ok(16));
        assert_eq!(d.get(DateField::DayOfYear), Ok(16));
        assert_eq!(d.get(DateField::AlignedWeekOfMonth), Ok(3));
        assert_eq!(d.get(DateField::AlignedWeekOfYear), Ok(3));
        assert_eq!(d.get(DateField::MonthOfYear), Ok(1));
        assert_eq!(d.get(DateField::Year), Ok(6404));
    }

    #[test]
    fn test_get_restricted_fields() {
        let d = date(6404, 1, 16);
        assert_eq!(
            d.get(DateField::EpochDay),
            Err(DateError::UnsupportedField {
                field: DateField::EpochDay
            })
        );
        assert_eq!(
            d.get(DateField::ProlepticMonth),
            Err(DateError::UnsupportedField {
                field: DateField::ProlepticMonth
            })
        );
        assert_eq!(d.get(DateField::Era), Err(DateError::EraNotSupported));
        assert_eq!(d.get(DateField::YearOfEra), Err(DateError::EraNotSupported));
    }

    #[test]
    fn test_with_year_resolves_leap_day() {
        assert_eq!(date(6403, 12, 30).with_year(6404), Ok(date(6404, 12, 29)));
        assert_eq!(date(6404, 1, 16).with_year(6404), Ok(date(6404, 1, 16)));
    }

    #[test]
    fn test_with_month_resolves_day() {
        assert_eq!(date(6404, 6, 31).with_month(7), Ok(date(6404, 7, 30)));
        assert!(date(6404, 1, 1).with_month(13).is_err());
    }

    #[test]
    fn test_with_day_of_month() {
        assert_eq!(date(6404, 1, 16).with_day_of_month(18), Ok(date(6404, 1, 18)));
        assert!(date(6404, 7, 1).with_day_of_month(31).is_err());
    }

    #[test]
    fn test_with_day_of_year() {
        assert_eq!(date(6404, 1, 1).with_day_of_year(365), Ok(date(6404, 12, 29)));
        assert!(date(6404, 1, 1).with_day_of_year(366).is_err());
    }

    #[test]
    fn test_with_field() {
        let d = date(6404, 1, 16);
        assert_eq!(d.with_field(DateField::DayOfMonth, 18), Ok(date(6404, 1, 18)));
        assert_eq!(
            date(6403, 12, 30).with_field(DateField::Year, 6404),
            Ok(date(6404, 12, 29))
        );
        assert_eq!(
            d.with_field(DateField::EpochDay, 20168),
            Ok(date(6404, 1, 1))
        );
        // Day-of-week 6 moving to 7 advances one day.
        assert_eq!(d.with_field(DateField::DayOfWeek, 7), Ok(date(6404, 1, 17)));
        assert_eq!(d.with_field(DateField::DayOfWeek, 6), Ok(d));
        assert_eq!(
            d.with_field(DateField::ProlepticMonth, 76849),
            Ok(date(6404, 2, 16))
        );
        assert_eq!(
            d.with_field(DateField::Era, 1),
            Err(DateError::EraNotSupported)
        );
        assert!(matches!(
            d.with_field(DateField::DayOfWeek, 8),
            Err(DateError::InvalidField {
                field: DateField::DayOfWeek,
                value: 8
            })
        ));
    }

    #[test]
    fn test_plus_days() {
        assert_eq!(date(6404, 1, 16).plus_days(2), Ok(date(6404, 1, 18)));
        assert_eq!(date(6403, 12, 30).plus_days(1), Ok(date(6404, 1, 1)));
        assert_eq!(date(6404, 1, 30).plus_days(2), Ok(date(6404, 2, 1)));
        assert_eq!(date(6404, 1, 1).plus_days(365), Ok(date(6405, 1, 1)));
        assert_eq!(date(6404, 1, 16).plus_days(0), Ok(date(6404, 1, 16)));
        assert_eq!(date(6404, 1, 1).plus_days(-1), Ok(date(6403, 12, 30)));
    }

    #[test]
    fn test_plus_weeks() {
        assert_eq!(date(6403, 12, 30).plus_weeks(1), Ok(date(6404, 1, 7)));
    }

    #[test]
    fn test_plus_months_resolves_day() {
        assert_eq!(date(6404, 6, 31).plus_months(1), Ok(date(6404, 7, 30)));
        assert_eq!(date(6403, 6, 31).plus_months(6), Ok(date(6403, 12, 30)));
        assert_eq!(date(6404, 6, 31).plus_months(6), Ok(date(6404, 12, 29)));
        assert_eq!(date(6404, 1, 16).plus_months(-1), Ok(date(6403, 12, 16)));
        assert_eq!(date(6404, 1, 16).plus_months(12), Ok(date(6405, 1, 16)));
    }

    #[test]
    fn test_plus_years_resolves_day() {
        assert_eq!(date(6403, 12, 30).plus_years(1), Ok(date(6404, 12, 29)));
        assert_eq!(date(6404, 1, 16).plus_years(2), Ok(date(6406, 1, 16)));
    }

    #[test]
    fn test_plus_unit_dispatch() {
        let d = date(6404, 1, 16);
        assert_eq!(d.plus(2, DateUnit::Days), Ok(date(6404, 1, 18)));
        assert_eq!(d.plus(1, DateUnit::Weeks), Ok(date(6404, 1, 23)));
        assert_eq!(d.plus(1, DateUnit::Months), Ok(date(6404, 2, 16)));
        assert_eq!(d.plus(1, DateUnit::Years), Ok(date(6405, 1, 16)));
        assert_eq!(d.plus(1, DateUnit::Decades), Ok(date(6414, 1, 16)));
        assert_eq!(d.plus(1, DateUnit::Centuries), Ok(date(6504, 1, 16)));
        assert_eq!(d.plus(1, DateUnit::Millennia), Ok(date(7404, 1, 16)));
        assert_eq!(
            d.plus(1, DateUnit::Eras),
            Err(DateError::UnsupportedUnit {
                unit: DateUnit::Eras
            })
        );
    }

    #[test]
    fn test_minus() {
        assert_eq!(date(6404, 1, 18).minus_days(2), Ok(date(6404, 1, 16)));
        assert_eq!(date(6404, 1, 1).minus_days(1), Ok(date(6403, 12, 30)));
        assert_eq!(date(6404, 1, 7).minus_weeks(1), Ok(date(6403, 12, 30)));
        assert_eq!(date(6404, 1, 18).minus(2, DateUnit::Days), Ok(date(6404, 1, 16)));
        assert_eq!(date(6404, 12, 29).minus_months(12), Ok(date(6403, 12, 29)));
        assert_eq!(date(6404, 12, 29).minus_years(1), Ok(date(6403, 12, 29)));
    }

    #[test]
    fn test_minus_most_negative_amount_does_not_overflow() {
        let d = date(6404, 1, 16);
        assert!(d.minus_days(i64::MIN).is_err());
        assert!(d.minus_weeks(i64::MIN).is_err());
        assert!(d.minus_months(i64::MIN).is_err());
        assert!(d.minus_years(i64::MIN).is_err());
        assert!(d.minus(i64::MIN, DateUnit::Days).is_err());
    }

    #[test]
    fn test_plus_out_of_range() {
        assert!(IranianDate::MAX.plus_days(1).is_err());
        assert!(IranianDate::MIN.plus_days(-1).is_err());
        assert!(date(6404, 1, 16).plus_years(i64::MAX).is_err());
    }

    #[test]
    fn test_period_arithmetic() {
        let d = date(6404, 1, 16);
        assert_eq!(d.plus_period(Period::new(1, 1, 1)), Ok(date(6405, 2, 17)));
        assert_eq!(
            date(6405, 2, 17).minus_period(Period::new(1, 1, 1)),
            Ok(date(6404, 1, 16))
        );
        assert_eq!(d.plus_period(Period::ZERO), Ok(d));
    }

    #[test]
    fn test_plus_days_inverse_property() {
        let samples = [
            date(6404, 1, 16),
            date(6403, 12, 30),
            date(6348, 10, 11),
            date(6347, 1, 1),
        ];
        for d in samples {
            for n in [-1000, -366, -1, 0, 1, 29, 366, 12345] {
                let roundtrip = d.plus_days(n).and_then(|x| x.plus_days(-n));
                assert_eq!(roundtrip, Ok(d), "date {d} n {n}");
            }
        }
    }

    #[test]
    fn test_plus_months_inverse_property() {
        // Inverse holds exactly while no clamping is involved.
        let d = date(6404, 1, 16);
        for n in [-25, -12, -1, 0, 1, 11, 12, 120] {
            let roundtrip = d.plus_months(n).and_then(|x| x.minus_months(n));
            assert_eq!(roundtrip, Ok(d), "n {n}");
            let roundtrip = d.plus_years(n).and_then(|x| x.minus_years(n));
            assert_eq!(roundtrip, Ok(d), "n {n}");
        }
        // With clamping the inverse lands on the clamped day.
        let leap_day = date(6403, 12, 30);
        let there_and_back = leap_day.plus_years(1).and_then(|x| x.minus_years(1));
        assert_eq!(there_and_back, Ok(date(6403, 12, 29)));
    }

    #[test]
    fn test_until_in_units() {
        let d = date(6404, 1, 16);
        let end = date(6404, 2, 1);
        assert_eq!(d.until_in(&end, DateUnit::Days), Ok(16));
        assert_eq!(d.until_in(&end, DateUnit::Weeks), Ok(2));
        assert_eq!(d.until_in(&end, DateUnit::Months), Ok(0));
        assert_eq!(
            d.until_in(&date(6405, 1, 16), DateUnit::Years),
            Ok(1)
        );
        assert_eq!(
            d.until_in(&date(6414, 1, 16), DateUnit::Decades),
            Ok(1)
        );
        assert_eq!(
            d.until_in(&end, DateUnit::Eras),
            Err(DateError::EraNotSupported)
        );
        // Truncation toward zero: one day short of a month is zero months.
        assert_eq!(
            d.until_in(&date(6404, 2, 15), DateUnit::Months),
            Ok(0)
        );
        assert_eq!(
            d.until_in(&date(6404, 2, 16), DateUnit::Months),
            Ok(1)
        );
    }

    #[test]
    fn test_until_period() {
        let d = date(6404, 1, 16);
        assert_eq!(d.until(&date(6404, 2, 1)), Period::new(0, 0, 16));
        assert_eq!(d.until(&date(6403, 1, 16)), Period::new(-1, 0, 0));
        assert_eq!(d.until(&date(6405, 2, 17)), Period::new(1, 1, 1));
        // Borrow across a short month: one clamped month plus the remainder.
        assert_eq!(date(6404, 6, 31).until(&date(6404, 7, 30)), Period::new(0, 0, 30));
        // Negative direction with positive day difference.
        assert_eq!(date(6404, 3, 15).until(&date(6404, 1, 20)), Period::new(0, -1, -26));
    }

    #[test]
    fn test_until_consistent_with_plus_period() {
        let d = date(6404, 1, 16);
        let targets = [
            date(6404, 2, 1),
            date(6405, 2, 17),
            date(6406, 11, 3),
        ];
        for end in targets {
            let period = d.until(&end);
            assert_eq!(d.plus_period(period), Ok(end), "end {end}");
        }
    }

    #[test]
    fn test_ordering_lexicographic() {
        assert!(date(6404, 12, 29).is_after(&date(6404, 1, 16)));
        assert!(date(6403, 12, 29).is_before(&date(6404, 1, 16)));
        assert!(date(6404, 1, 16).is_equal(&date(6404, 1, 16)));
        assert!(date(6404, 1, 16) < date(6404, 1, 17));
        assert!(date(6404, 1, 16) < date(6404, 2, 1));
        assert!(date(6404, 1, 16) < date(6405, 1, 1));
    }

    #[test]
    fn test_ordering_consistent_with_epoch_day() {
        let dates = [
            date(6347, 12, 29),
            date(6348, 1, 1),
            date(6348, 10, 11),
            date(6403, 12, 30),
            date(6404, 1, 1),
            date(6404, 1, 16),
        ];
        for a in &dates {
            for b in &dates {
                assert_eq!(
                    a.cmp(b),
                    a.to_epoch_day().cmp(&b.to_epoch_day()),
                    "{a} vs {b}"
                );
            }
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(date(6404, 1, 16).to_string(), "6404-01-16");
        assert_eq!(date(16, 1, 16).to_string(), "016-01-16");
        assert_eq!(date(999, 12, 29).to_string(), "999-12-29");
        assert_eq!(date(1000, 1, 1).to_string(), "1000-01-01");
        assert_eq!(date(-5, 3, 4).to_string(), "-005-03-04");
        assert_eq!(date(-12345, 3, 4).to_string(), "-12345-03-04");
        assert_eq!(date(9999, 1, 1).to_string(), "9999-01-01");
        assert_eq!(date(10000, 1, 1).to_string(), "+10000-01-01");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("6404-01-16".parse(), Ok(date(6404, 1, 16)));
        assert_eq!("016-01-16".parse(), Ok(date(16, 1, 16)));
        assert_eq!("-005-03-04".parse(), Ok(date(-5, 3, 4)));
        assert_eq!("+10000-01-01".parse(), Ok(date(10000, 1, 1)));
        assert_eq!(" 6404-01-16 ".parse(), Ok(date(6404, 1, 16)));
    }

    #[test]
    fn test_from_str_rejects_malformed_input() {
        assert!(matches!(
            "".parse::<IranianDate>(),
            Err(DateError::InvalidFormat(_))
        ));
        assert!(matches!(
            "6404-01".parse::<IranianDate>(),
            Err(DateError::InvalidFormat(_))
        ));
        assert!(matches!(
            "6404-01-16-2".parse::<IranianDate>(),
            Err(DateError::InvalidFormat(_))
        ));
        assert!(matches!(
            "6404-XX-16".parse::<IranianDate>(),
            Err(DateError::InvalidFormat(_))
        ));
        assert!(matches!(
            "6404-13-01".parse::<IranianDate>(),
            Err(DateError::InvalidField { .. })
        ));
        assert!(matches!(
            "6404-12-30".parse::<IranianDate>(),
            Err(DateError::InvalidField { .. })
        ));
    }

    #[test]
    fn test_display_parse_roundtrip() {
        let samples = [
            date(6404, 1, 16),
            date(16, 1, 16),
            date(-5, 3, 4),
            date(10000, 1, 1),
            date(-12345, 3, 4),
        ];
        for d in samples {
            assert_eq!(d.to_string().parse(), Ok(d), "date {d}");
        }
    }

    #[test]
    fn test_serde_string_format() {
        let d = date(6404, 1, 16);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, r#""6404-01-16""#);
        let parsed: IranianDate = serde_json::from_str(&json).unwrap();
        assert_eq!(d, parsed);
    }

    #[test]
    fn test_serde_validation() {
        let result: Result<IranianDate, _> = serde_json::from_str(r#""6404-13-01""#);
        assert!(result.is_err());
        let result: Result<IranianDate, _> = serde_json::from_str(r#""6404-12-30""#);
        assert!(result.is_err());
        let result: Result<IranianDate, _> = serde_json::from_str(r#""6403-12-30""#);
        assert!(result.is_ok());
    }
}
