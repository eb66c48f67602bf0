//! Date values and arithmetic for the Iranian solar calendar.
//!
//! The calendar has twelve months: the first six have 31 days, the next
//! five have 30, and the twelfth has 29, or 30 in a leap year. Leap years
//! follow a 2820-year grand cycle of 683 leap years, evaluated with exact
//! integer arithmetic. Dates convert to and from a day count shared with
//! the Gregorian calendar (epoch day 0 is 1970-01-01), which makes the two
//! systems interchangeable at the day level.
//!
//! ```
//! use iranian_date::{DateUnit, IranianDate};
//!
//! let date = IranianDate::of(6404, 1, 16)?;
//! assert_eq!(date.to_string(), "6404-01-16");
//! assert_eq!(date.to_epoch_day(), 20183);
//! assert_eq!(date.day_of_week(), 6);
//! assert_eq!(date.plus(2, DateUnit::Days)?, IranianDate::of(6404, 1, 18)?);
//! # Ok::<(), iranian_date::DateError>(())
//! ```

mod consts;
mod date;
mod epoch;
mod error;
mod fields;
mod leap;
mod period;
mod prelude;
mod seq;

pub use consts::*;
pub use date::IranianDate;
pub use error::DateError;
pub use fields::{DateField, DateUnit};
pub use leap::{is_leap_year, month_length, year_length};
pub use period::Period;
pub use seq::DateSeq;
