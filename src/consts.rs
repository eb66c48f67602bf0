/// Minimum supported year (inclusive)
pub const MIN_YEAR: i32 = -999_999_999;

/// Maximum supported year (inclusive)
pub const MAX_YEAR: i32 = 999_999_999;

/// Maximum valid month (Esfand, the twelfth month)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for the twelfth month, the only month of variable length
pub const FINAL_MONTH: u8 = 12;

/// Days in the twelfth month during leap years
pub const FINAL_MONTH_DAYS_LEAP: u8 = 30;

/// Days in each month (index 0 is unused, months are 1-indexed)
/// The twelfth month shows 29 days (non-leap default, adjusted by `is_leap_year`)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // Farvardin
    31, // Ordibehesht
    31, // Khordad
    31, // Tir
    31, // Mordad
    31, // Shahrivar
    30, // Mehr
    30, // Aban
    30, // Azar
    30, // Dey
    30, // Bahman
    29, // Esfand (non-leap, adjusted by is_leap_year check)
];

/// Days elapsed before each month starts (index 0 unused, months are 1-indexed)
pub(crate) const DAYS_BEFORE_MONTH: [u16; 13] =
    [0, 0, 31, 62, 93, 124, 155, 186, 216, 246, 276, 306, 336];

/// The calendar year containing epoch day 0 (1970-01-01 Gregorian)
pub(crate) const ANCHOR_YEAR: i64 = 6348;

/// Epoch day of the first day of the anchor year
pub(crate) const ANCHOR_YEAR_START: i64 = -286;

/// Epoch day of the first day of the year after the anchor year
pub(crate) const ANCHOR_NEXT_YEAR_START: i64 = 79;

/// Length of the grand cycle after which the leap-year pattern repeats
pub(crate) const CYCLE_YEARS: i64 = 2820;
/// Leap years per grand cycle
pub(crate) const CYCLE_LEAP_YEARS: i64 = 683;
/// Days per grand cycle
pub(crate) const CYCLE_DAYS: i64 = CYCLE_YEARS * 365 + CYCLE_LEAP_YEARS;

/// Year whose cycle position anchors the leap-year rule
pub(crate) const LEAP_BASE_YEAR: i64 = 5474;
/// Phase shift applied to the cycle position before scaling
pub(crate) const LEAP_PHASE: i64 = 38;
/// Scale factor of the leap-year rule
pub(crate) const LEAP_SCALE: i64 = 682;
/// Modulus of the leap-year rule
pub(crate) const LEAP_MODULUS: i64 = 2816;

/// Mean month length used to estimate stepped-sequence sizes,
/// expressed as the ratio `MEAN_MONTH_NUM / MEAN_MONTH_DEN` days
pub(crate) const MEAN_MONTH_NUM: i64 = 48_699;
pub(crate) const MEAN_MONTH_DEN: i64 = 1_600;

/// Date component separator in the textual form
pub const DATE_SEPARATOR: char = '-';
