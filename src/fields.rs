//! Closed enumerations of the date fields and units the calendar exposes.

use crate::prelude::*;

/// A readable or settable field of a date value.
///
/// Epoch day and proleptic month carry more range than a plain field read
/// allows, so [`IranianDate::get`](crate::IranianDate::get) rejects them;
/// use [`IranianDate::to_epoch_day`](crate::IranianDate::to_epoch_day)
/// instead. The era fields exist only to be rejected: the calendar has a
/// single, unnamed era.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum DateField {
    /// Day of the week, 1..=7
    #[display(fmt = "day-of-week")]
    DayOfWeek,
    /// Day within the notional week starting on the 1st of the month, 1..=7
    #[display(fmt = "aligned-day-of-week-in-month")]
    AlignedDayOfWeekInMonth,
    /// Day within the notional week starting on the 1st of the year, 1..=7
    #[display(fmt = "aligned-day-of-week-in-year")]
    AlignedDayOfWeekInYear,
    /// Day of the month, 1..=31
    #[display(fmt = "day-of-month")]
    DayOfMonth,
    /// Day of the year, 1..=366
    #[display(fmt = "day-of-year")]
    DayOfYear,
    /// Days since 1970-01-01 Gregorian
    #[display(fmt = "epoch-day")]
    EpochDay,
    /// Notional week of the month counted from the 1st, 1..=5
    #[display(fmt = "aligned-week-of-month")]
    AlignedWeekOfMonth,
    /// Notional week of the year counted from day 1, 1..=53
    #[display(fmt = "aligned-week-of-year")]
    AlignedWeekOfYear,
    /// Month of the year, 1..=12
    #[display(fmt = "month-of-year")]
    MonthOfYear,
    /// Linear month index `year * 12 + (month - 1)`
    #[display(fmt = "proleptic-month")]
    ProlepticMonth,
    /// Proleptic year
    #[display(fmt = "year")]
    Year,
    /// Era (not supported by this calendar)
    #[display(fmt = "era")]
    Era,
    /// Year within an era (not supported by this calendar)
    #[display(fmt = "year-of-era")]
    YearOfEra,
}

/// A unit of date-based arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum DateUnit {
    #[display(fmt = "days")]
    Days,
    #[display(fmt = "weeks")]
    Weeks,
    #[display(fmt = "months")]
    Months,
    #[display(fmt = "years")]
    Years,
    #[display(fmt = "decades")]
    Decades,
    #[display(fmt = "centuries")]
    Centuries,
    #[display(fmt = "millennia")]
    Millennia,
    /// Eras (not supported by this calendar)
    #[display(fmt = "eras")]
    Eras,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_display() {
        assert_eq!(DateField::DayOfWeek.to_string(), "day-of-week");
        assert_eq!(DateField::ProlepticMonth.to_string(), "proleptic-month");
        assert_eq!(DateField::YearOfEra.to_string(), "year-of-era");
    }

    #[test]
    fn test_unit_display() {
        assert_eq!(DateUnit::Days.to_string(), "days");
        assert_eq!(DateUnit::Millennia.to_string(), "millennia");
    }
}
