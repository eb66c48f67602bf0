//! Conversion between epoch days and `(year, day-of-year)` pairs.
//!
//! Epoch day 0 is 1970-01-01 Gregorian, which falls on day 287 of calendar
//! year 6348. Both directions run in constant time: the epoch day of a
//! year's first day is a prefix sum of year lengths, computed from the
//! grand-cycle structure of the leap-year rule rather than by walking years.

use crate::consts::{
    ANCHOR_NEXT_YEAR_START, ANCHOR_YEAR, ANCHOR_YEAR_START, CYCLE_DAYS, CYCLE_LEAP_YEARS,
    CYCLE_YEARS, LEAP_BASE_YEAR, LEAP_MODULUS, LEAP_PHASE, LEAP_SCALE,
};

/// Counts leap years among cycle positions `0..n`, where position `p`
/// corresponds to the year `LEAP_BASE_YEAR + p`. Negative `n` extends the
/// count backwards (the result is then negative).
///
/// Within one cycle the scaled position `(p + PHASE) * SCALE` advances by
/// `SCALE` per year modulo `LEAP_MODULUS`, so it wraps below `SCALE` exactly
/// once per leap year; the number of wraps up to `n` is the floor of the
/// scaled span, which gives the count without iteration.
const fn leap_count(n: i64) -> i64 {
    let cycles = n.div_euclid(CYCLE_YEARS);
    let rem = n.rem_euclid(CYCLE_YEARS);
    let phase_floor = LEAP_SCALE * (LEAP_PHASE - 1) / LEAP_MODULUS;
    let partial = LEAP_SCALE * (rem + LEAP_PHASE - 1) / LEAP_MODULUS - phase_floor;
    cycles * CYCLE_LEAP_YEARS + partial
}

/// Counts leap years in the half-open year range `first..bound`.
/// `first` must not exceed `bound`.
const fn leap_years_between(first: i64, bound: i64) -> i64 {
    leap_count(bound - LEAP_BASE_YEAR) - leap_count(first - LEAP_BASE_YEAR)
}

/// Returns the epoch day of the first day of `year`.
pub(crate) const fn year_start(year: i64) -> i64 {
    let leaps = if year >= ANCHOR_YEAR {
        leap_years_between(ANCHOR_YEAR, year)
    } else {
        -leap_years_between(year, ANCHOR_YEAR)
    };
    ANCHOR_YEAR_START + 365 * (year - ANCHOR_YEAR) + leaps
}

/// Returns the epoch day of day `day_of_year` in `year`.
pub(crate) const fn to_epoch_day(year: i64, day_of_year: u16) -> i64 {
    year_start(year) + day_of_year as i64 - 1
}

/// Splits an epoch day into its `(year, day-of-year)` pair.
pub(crate) fn from_epoch_day(epoch_day: i64) -> (i64, u16) {
    if (ANCHOR_YEAR_START..ANCHOR_NEXT_YEAR_START).contains(&epoch_day) {
        return (ANCHOR_YEAR, (epoch_day - ANCHOR_YEAR_START + 1) as u16);
    }
    // The mean year length is CYCLE_DAYS / CYCLE_YEARS days, so the estimate
    // is off by at most a day or two of drift; the loops settle it.
    let approx = (epoch_day - ANCHOR_YEAR_START) as i128 * CYCLE_YEARS as i128;
    let mut year = ANCHOR_YEAR + approx.div_euclid(CYCLE_DAYS as i128) as i64;
    while epoch_day < year_start(year) {
        year -= 1;
    }
    while epoch_day >= year_start(year + 1) {
        year += 1;
    }
    let doy = epoch_day - year_start(year) + 1;
    (year, doy as u16)
}
