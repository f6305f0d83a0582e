//! Jalali leap years and Nowruz dates from the break-point table.

use crate::consts::{
    BREAK_POINTS, CENTURY_CYCLE, JALALI_GREGORIAN_OFFSET, JALALI_SUB_CYCLE, LEAP_YEAR_CYCLE,
    LEAPS_PER_SUB_CYCLE, MAX_JALALI_YEAR, MIN_JALALI_YEAR,
};

/// Leap days counted up to the first break point, relative to AD 621
const LEAP_DAYS_AT_FIRST_BREAK: i32 = -14;
/// Gregorian leap-day correction matching `LEAP_DAYS_AT_FIRST_BREAK`
const GREGORIAN_LEAP_BASE: i32 = 150;
/// Day of March that Nowruz falls on when both leap counts agree
const NOWRUZ_MARCH_BASE: i32 = 20;

/// Position of a year inside the break-point table.
#[derive(Debug, Clone, Copy)]
struct Segment {
    /// Years elapsed since the pivot that opens the segment
    n: i32,
    /// Length of the segment in years
    jump: i32,
    /// Jalali leap days accumulated by all earlier segments
    leap_days: i32,
}

fn in_table(year: i32) -> bool {
    (BREAK_POINTS[0]..BREAK_POINTS[BREAK_POINTS.len() - 1]).contains(&year)
}

fn segment(year: i32) -> Segment {
    debug_assert!(in_table(year));

    let mut leap_days = LEAP_DAYS_AT_FIRST_BREAK;
    let mut jp = BREAK_POINTS[0];
    let mut jump = 0;
    for &jm in &BREAK_POINTS[1..] {
        jump = jm - jp;
        if year < jm {
            break;
        }
        leap_days += jump / JALALI_SUB_CYCLE * LEAPS_PER_SUB_CYCLE
            + jump % JALALI_SUB_CYCLE / LEAP_YEAR_CYCLE;
        jp = jm;
    }

    Segment {
        n: year - jp,
        jump,
        leap_days,
    }
}

/// Returns `true` if the Jalali `year` has a 30-day Esfand.
///
/// Years outside the break-point table are reported as common years.
pub fn is_leap_jalali_year(year: i32) -> bool {
    if !in_table(year) {
        return false;
    }

    let Segment { mut n, jump, .. } = segment(year);
    // The last years of a segment borrow the phase of the next sub-cycle
    if jump - n < 6 {
        n = n - jump + (jump + 4) / JALALI_SUB_CYCLE * JALALI_SUB_CYCLE;
    }
    let phase = (n + 1) % JALALI_SUB_CYCLE - 1;
    phase >= 0 && phase % LEAP_YEAR_CYCLE == 0
}

/// Returns `true` if `year` lies in the range conversions are defined for.
pub const fn is_supported_jalali_year(year: i32) -> bool {
    year >= MIN_JALALI_YEAR && year <= MAX_JALALI_YEAR
}

/// Number of days in the Jalali `year`.
pub fn days_in_jalali_year(year: i32) -> u16 {
    if is_leap_jalali_year(year) { 366 } else { 365 }
}

/// Gregorian `(year, day of March)` of Farvardin 1 of the Jalali `year`.
pub(crate) fn nowruz(year: i32) -> (i32, u8) {
    debug_assert!(is_supported_jalali_year(year));

    let Segment { n, jump, leap_days } = segment(year);
    let mut jalali_leaps = leap_days
        + n / JALALI_SUB_CYCLE * LEAPS_PER_SUB_CYCLE
        + (n % JALALI_SUB_CYCLE + 3) / LEAP_YEAR_CYCLE;
    if jump % JALALI_SUB_CYCLE == 4 && jump - n == 4 {
        jalali_leaps += 1;
    }

    let gregorian_year = year + JALALI_GREGORIAN_OFFSET;
    let gregorian_leaps = gregorian_year / LEAP_YEAR_CYCLE
        - (gregorian_year / CENTURY_CYCLE + 1) * 3 / 4
        - GREGORIAN_LEAP_BASE;

    let march_day = NOWRUZ_MARCH_BASE + jalali_leaps - gregorian_leaps;
    // Always 19..=22 inside the table
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let march_day = march_day as u8;
    (gregorian_year, march_day)
}
