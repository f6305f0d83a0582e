/// Pivot years of the irregular Jalali leap cycles (ascending).
/// Each pair of neighbours delimits a run of 33-year sub-cycles.
pub const BREAK_POINTS: [i32; 20] = [
    -61, 9, 38, 199, 426, 686, 756, 818, 1111, 1181, 1210, 1635, 2060, 2097, 2192, 2262, 2324,
    2394, 2456, 3178,
];

/// Earliest supported Jalali year (the calendar epoch)
pub const MIN_JALALI_YEAR: i32 = 1;
/// Latest supported Jalali year (inclusive), bounded by the last break point
pub const MAX_JALALI_YEAR: i32 = BREAK_POINTS[BREAK_POINTS.len() - 1] - 1;

/// Earliest Gregorian year accepted by `GregorianDate`
pub const MIN_GREGORIAN_YEAR: i32 = 1;

/// Maximum valid month (Esfand / December)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Month number for Farvardin, the first Jalali month
pub const FARVARDIN: u8 = 1;
/// Month number for Esfand, the last Jalali month
pub const ESFAND: u8 = 12;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for March
pub const MARCH: u8 = 3;

/// Days in Esfand for leap years
pub const ESFAND_DAYS_LEAP: u8 = 30;
/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days in each Jalali month (index 0 is unused, months are 1-indexed)
/// Esfand shows 29 days (non-leap year default)
pub const JALALI_DAYS_IN_MONTH: [u8; 13] = [0, 31, 31, 31, 31, 31, 31, 30, 30, 30, 30, 30, 29];

/// Days elapsed in a Jalali year before the first of each month
pub const JALALI_DAYS_BEFORE_MONTH: [u16; 13] =
    [0, 0, 31, 62, 93, 124, 155, 186, 216, 246, 276, 306, 336];

/// Maximum days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const GREGORIAN_DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_gregorian_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Days elapsed in a non-leap Gregorian year before the first of each month
pub const GREGORIAN_DAYS_BEFORE_MONTH: [u16; 13] =
    [0, 0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Days in a full 400-year Gregorian cycle
pub(crate) const DAYS_PER_400_YEARS: i64 = 146_097;
/// Days in a 100-year block whose last year is not leap
pub(crate) const DAYS_PER_100_YEARS: i64 = 36_524;
/// Days in a 4-year block ending with a leap year
pub(crate) const DAYS_PER_4_YEARS: i64 = 1_461;
/// Days in a common year
pub(crate) const DAYS_PER_YEAR: i64 = 365;

/// Length of a regular Jalali sub-cycle in years
pub(crate) const JALALI_SUB_CYCLE: i32 = 33;
/// Leap years contained in one regular sub-cycle
pub(crate) const LEAPS_PER_SUB_CYCLE: i32 = 8;
/// Difference between a Jalali year and the Gregorian year its Nowruz falls in
pub(crate) const JALALI_GREGORIAN_OFFSET: i32 = 621;

/// Days in a week
pub const DAYS_IN_WEEK: u8 = 7;

/// Jalali month names, Farvardin first
pub const JALALI_MONTH_NAMES: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

/// One-letter weekday labels, Saturday first
pub const WEEKDAY_LABELS: [&str; 7] = ["ش", "ی", "د", "س", "چ", "پ", "ج"];

/// Persian digits, indexed by value
pub const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Separator between the parts of a Persian display string
pub const DISPLAY_SEPARATOR: char = ' ';
