//! Leap-year rule and year/month length tables.

use crate::consts::{
    CYCLE_YEARS, DAYS_BEFORE_MONTH, DAYS_IN_MONTH, FINAL_MONTH, FINAL_MONTH_DAYS_LEAP,
    LEAP_BASE_YEAR, LEAP_MODULUS, LEAP_PHASE, LEAP_SCALE, MAX_MONTH,
};

/// Returns whether `year` is a leap year (366 days).
///
/// The rule is a 2820-year grand cycle containing 683 leap years, evaluated
/// with pure integer arithmetic so that it is exact for every year, however
/// large. Within one cycle, leap years fall where the scaled cycle position
/// wraps below the scale factor.
pub const fn is_leap_year(year: i32) -> bool {
    let periodic = (year as i64 - LEAP_BASE_YEAR).rem_euclid(CYCLE_YEARS);
    ((periodic + LEAP_PHASE) * LEAP_SCALE) % LEAP_MODULUS < LEAP_SCALE
}

/// Returns the number of days in `year`: 366 when leap, 365 otherwise.
pub const fn year_length(year: i32) -> u16 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Returns the number of days in `month` of `year`.
///
/// Months 1 through 6 have 31 days and months 7 through 11 have 30 days;
/// the twelfth month has 30 days only in leap years.
pub const fn month_length(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FINAL_MONTH && is_leap_year(year) {
        FINAL_MONTH_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Returns the 1-based ordinal of `(month, day)` within its year.
///
/// Month lengths before the twelfth month are fixed, so the year is not
/// consulted.
pub(crate) const fn day_of_year(month: u8, day: u8) -> u16 {
    debug_assert!(month != 0 && month <= MAX_MONTH);
    DAYS_BEFORE_MONTH[month as usize] + day as u16
}

/// Splits a day-of-year into its `(month, day)` pair.
///
/// `doy` must already be valid for its year (1..=365, or 366 in leap years);
/// the walk lands day 366 on the 30th of the twelfth month without needing
/// the year itself.
pub(crate) fn month_day_of_year(doy: u16) -> (u8, u8) {
    let mut month: u8 = 1;
    let mut remaining = doy;
    let mut len = 31;
    while remaining > len {
        remaining -= len;
        month += 1;
        len = if month < 7 { 31 } else { 30 };
    }
    (month, remaining as u8)
}
