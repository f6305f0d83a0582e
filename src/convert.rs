//! Exact conversion between the Jalali and Gregorian calendars.
//!
//! Both calendars are mapped onto one integer day number, counted from the
//! proleptic Gregorian date 0001-01-01 (day 0). Converting is then a matter of
//! turning fields into a day number in one calendar and splitting it back into
//! fields in the other.

use crate::consts::{
    DAYS_PER_4_YEARS, DAYS_PER_100_YEARS, DAYS_PER_400_YEARS, DAYS_PER_YEAR, FEBRUARY,
    GREGORIAN_DAYS_BEFORE_MONTH, JALALI_DAYS_BEFORE_MONTH, JALALI_GREGORIAN_OFFSET, JANUARY,
    MARCH, MAX_JALALI_YEAR, MAX_MONTH, MIN_GREGORIAN_YEAR, MIN_JALALI_YEAR,
};
use crate::leap::{days_in_jalali_year, nowruz};
use crate::types::{GregorianDate, JalaliDate, Weekday, is_gregorian_leap_year};
use crate::{Calendar, DateError};

/// Day number of 1970-01-01
const UNIX_EPOCH_DAY_NUMBER: i64 = 719_162;

fn days_before_gregorian_month(leap: bool, month: u8) -> i64 {
    let leap_day = i64::from(leap && month > FEBRUARY);
    i64::from(GREGORIAN_DAYS_BEFORE_MONTH[month as usize]) + leap_day
}

/// Day number of a Gregorian date whose fields are already valid.
pub(crate) fn gregorian_day_number(year: i32, month: u8, day: u8) -> i64 {
    let elapsed = i64::from(year) - 1;
    let before_year = elapsed * DAYS_PER_YEAR + elapsed.div_euclid(4) - elapsed.div_euclid(100)
        + elapsed.div_euclid(400);
    before_year + days_before_gregorian_month(is_gregorian_leap_year(year), month) + i64::from(day)
        - 1
}

/// Splits a day number into `(year, month, day)` without range checks.
fn gregorian_fields(days: i64) -> (i64, u8, u8) {
    let cycles = days.div_euclid(DAYS_PER_400_YEARS);
    let mut rest = days.rem_euclid(DAYS_PER_400_YEARS);

    // The last century of a cycle and the last year of a block are one day longer
    let centuries = (rest / DAYS_PER_100_YEARS).min(3);
    rest -= centuries * DAYS_PER_100_YEARS;
    let quads = rest / DAYS_PER_4_YEARS;
    rest %= DAYS_PER_4_YEARS;
    let years = (rest / DAYS_PER_YEAR).min(3);
    rest -= years * DAYS_PER_YEAR;

    let year = cycles * 400 + centuries * 100 + quads * 4 + years + 1;
    let leap = years == 3 && (quads != 24 || centuries == 3);

    let month = (JANUARY..=MAX_MONTH)
        .rev()
        .find(|&m| days_before_gregorian_month(leap, m) <= rest)
        .unwrap_or(JANUARY);
    let day = rest - days_before_gregorian_month(leap, month) + 1;

    // 1..=31 by construction
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let day = day as u8;
    (year, month, day)
}

/// Gregorian date of a day number.
pub(crate) fn gregorian_from_day_number(days: i64) -> Result<GregorianDate, DateError> {
    let (year, month, day) = gregorian_fields(days);
    let year = i32::try_from(year).map_err(|_| DateError::OutOfSupportedRange {
        calendar: Calendar::Gregorian,
        year: if year < 0 { i32::MIN } else { i32::MAX },
    })?;
    if year < MIN_GREGORIAN_YEAR {
        return Err(DateError::OutOfSupportedRange {
            calendar: Calendar::Gregorian,
            year,
        });
    }
    Ok(GregorianDate::from_parts(year, month, day))
}

pub(crate) fn gregorian_from_unix_days(days: i64) -> Result<GregorianDate, DateError> {
    gregorian_from_day_number(days.saturating_add(UNIX_EPOCH_DAY_NUMBER))
}

fn nowruz_day_number(year: i32) -> i64 {
    let (gregorian_year, march_day) = nowruz(year);
    gregorian_day_number(gregorian_year, MARCH, march_day)
}

/// Day number of a Jalali date.
pub(crate) fn jalali_day_number(date: &JalaliDate) -> i64 {
    let before_month = i64::from(JALALI_DAYS_BEFORE_MONTH[date.month() as usize]);
    nowruz_day_number(date.year()) + before_month + i64::from(date.day()) - 1
}

/// Jalali fields of a day number.
pub(crate) fn jalali_from_day_number(days: i64) -> Result<JalaliDate, DateError> {
    let gregorian = gregorian_from_day_number(days)?;
    let out_of_range = || DateError::OutOfSupportedRange {
        calendar: Calendar::Gregorian,
        year: gregorian.year(),
    };

    // Nowruz of Jalali year `y` always falls in March of Gregorian year `y + 621`
    let mut year = (gregorian.year() - JALALI_GREGORIAN_OFFSET).min(MAX_JALALI_YEAR);
    if year < MIN_JALALI_YEAR {
        return Err(out_of_range());
    }
    let mut start = nowruz_day_number(year);
    if days < start {
        year -= 1;
        if year < MIN_JALALI_YEAR {
            return Err(out_of_range());
        }
        start = nowruz_day_number(year);
    }

    let ordinal = days - start;
    if ordinal >= i64::from(days_in_jalali_year(year)) {
        return Err(out_of_range());
    }

    let month = (JANUARY..=MAX_MONTH)
        .rev()
        .find(|&m| i64::from(JALALI_DAYS_BEFORE_MONTH[m as usize]) <= ordinal)
        .unwrap_or(JANUARY);
    let day = ordinal - i64::from(JALALI_DAYS_BEFORE_MONTH[month as usize]) + 1;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let day = day as u8;
    Ok(JalaliDate::from_parts(year, month, day))
}

impl JalaliDate {
    /// The Gregorian date of the same day.
    pub fn to_gregorian(&self) -> GregorianDate {
        let (year, month, day) = gregorian_fields(jalali_day_number(self));
        // Supported Jalali years map to Gregorian years 622..=3799
        #[allow(clippy::cast_possible_truncation)]
        let year = year as i32;
        GregorianDate::from_parts(year, month, day)
    }

    pub fn weekday(&self) -> Weekday {
        Weekday::from_day_number(jalali_day_number(self))
    }
}

impl GregorianDate {
    /// The Jalali date of the same day.
    ///
    /// # Errors
    /// Returns `DateError::OutOfSupportedRange` if the day falls before
    /// Farvardin 1 of year 1 or after the last day of `MAX_JALALI_YEAR`.
    pub fn to_jalali(&self) -> Result<JalaliDate, DateError> {
        jalali_from_day_number(self.day_number())
    }

    pub fn weekday(&self) -> Weekday {
        Weekday::from_day_number(self.day_number())
    }

    fn day_number(&self) -> i64 {
        gregorian_day_number(self.year(), self.month(), self.day())
    }
}

/// Converts Jalali fields to a Gregorian date.
///
/// # Errors
/// Returns `DateError::InvalidDate` when the fields do not form a Jalali date
/// and `DateError::OutOfSupportedRange` when the year is outside the table.
pub fn jalali_to_gregorian(year: i32, month: u8, day: u8) -> Result<GregorianDate, DateError> {
    Ok(JalaliDate::new(year, month, day)?.to_gregorian())
}

/// Converts Gregorian fields to a Jalali date.
///
/// # Errors
/// Returns `DateError::InvalidDate` when the fields do not form a Gregorian
/// date and `DateError::OutOfSupportedRange` when the day has no Jalali
/// counterpart in the supported range.
pub fn gregorian_to_jalali(year: i32, month: u8, day: u8) -> Result<JalaliDate, DateError> {
    GregorianDate::new(year, month, day)?.to_jalali()
}
