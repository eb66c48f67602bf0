//! Lazy stepped sequences of dates.

use crate::consts::{MEAN_MONTH_DEN, MEAN_MONTH_NUM};
use crate::date::IranianDate;
use crate::error::DateError;
use crate::period::Period;

/// A finite, lazy sequence of dates produced by repeatedly stepping from a
/// start date toward an exclusive end.
///
/// Element `n` equals the start plus `n` applications of the step, months
/// first and days second, so a month-stepped sequence re-clamps against
/// each month's actual length rather than accumulating drift. Obtain one
/// from [`IranianDate::dates_until`] or [`IranianDate::dates_until_by`].
#[derive(Debug, Clone)]
pub struct DateSeq {
    start: IranianDate,
    months: i64,
    days: i64,
    next: i64,
    last: i64,
}

impl DateSeq {
    pub(crate) fn new(
        start: IranianDate,
        end_exclusive: IranianDate,
        step: Period,
    ) -> Result<Self, DateError> {
        let months = step.total_months();
        let days = step.days();
        // The step is judged by its folded (months, days) pair, so a period
        // whose years and months cancel out counts as zero.
        if (months == 0 && days == 0) || (months < 0 && days > 0) || (months > 0 && days < 0) {
            return Err(DateError::InvalidStep { months, days });
        }
        let until = start.days_until(&end_exclusive);
        if until == 0 {
            return Ok(Self::empty(start));
        }
        let sign: i64 = if months > 0 || days > 0 { 1 } else { -1 };
        if (sign < 0) != (until < 0) {
            return Err(DateError::DirectionMismatch {
                start,
                end: end_exclusive,
            });
        }
        let last = if months == 0 {
            // Day-only steps divide the span exactly.
            (until - sign) / days
        } else {
            Self::estimate_last(start, end_exclusive, months, days, sign)
        };
        Ok(Self {
            start,
            months,
            days,
            next: 0,
            last,
        })
    }

    const fn empty(start: IranianDate) -> Self {
        Self {
            start,
            months: 0,
            days: 1,
            next: 0,
            last: -1,
        }
    }

    /// Estimates the index of the last element from the mean month length,
    /// then walks the estimate back by at most two steps if it overshoots
    /// the end.
    fn estimate_last(
        start: IranianDate,
        end_exclusive: IranianDate,
        months: i64,
        days: i64,
        sign: i64,
    ) -> i64 {
        let until = start.days_until(&end_exclusive);
        let end_epoch = end_exclusive.to_epoch_day();
        let mean_step = i128::from(months) * i128::from(MEAN_MONTH_NUM)
            + i128::from(days) * i128::from(MEAN_MONTH_DEN);
        let mut last =
            (i128::from(until) * i128::from(MEAN_MONTH_DEN) / mean_step) as i64 + 1;
        let max_add_months = if months > 0 {
            IranianDate::MAX.proleptic_month() - start.proleptic_month()
        } else {
            start.proleptic_month() - IranianDate::MIN.proleptic_month()
        };
        let mut add_months = months.saturating_mul(last);
        let mut add_days = days.saturating_mul(last);
        if overshoots(start, add_months, add_days, sign, end_epoch, max_add_months) {
            last -= 1;
            add_months -= months;
            add_days -= days;
            if overshoots(start, add_months, add_days, sign, end_epoch, max_add_months) {
                last -= 1;
            }
        }
        last
    }
}

fn overshoots(
    start: IranianDate,
    add_months: i64,
    add_days: i64,
    sign: i64,
    end_epoch: i64,
    max_add_months: i64,
) -> bool {
    if i128::from(add_months) * i128::from(sign) > i128::from(max_add_months) {
        return true;
    }
    match start.plus_months(add_months) {
        Ok(moved) => {
            let landed = i128::from(moved.to_epoch_day()) + i128::from(add_days);
            landed * i128::from(sign) >= i128::from(end_epoch) * i128::from(sign)
        }
        Err(_) => true,
    }
}

impl Iterator for DateSeq {
    type Item = IranianDate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next > self.last {
            return None;
        }
        let n = self.next;
        let item = self
            .start
            .plus_months(self.months * n)
            .and_then(|d| d.plus_days(self.days * n))
            .ok()?;
        self.next += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.last - self.next + 1).unwrap_or(0);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DateSeq {}
