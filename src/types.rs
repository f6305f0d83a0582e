use crate::consts::{
    CENTURY_CYCLE, DATE_SEPARATOR, DAYS_IN_WEEK, ESFAND, ESFAND_DAYS_LEAP, FEBRUARY,
    FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, GREGORIAN_DAYS_IN_MONTH, JALALI_DAYS_IN_MONTH,
    LEAP_YEAR_CYCLE, MAX_MONTH, MIN_DAY, MIN_GREGORIAN_YEAR, WEEKDAY_LABELS,
};
use crate::leap::{is_leap_jalali_year, is_supported_jalali_year};
use crate::numerals::to_ascii_digits;
use crate::{Calendar, DateError, prelude::*};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

/// A day of the Jalali calendar.
///
/// Every value satisfies `1 <= day <= days_in_jalali_month(year, month)` and
/// has a year inside the supported range, so conversion never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{year:04}-{month:02}-{day:02}")]
pub struct JalaliDate {
    year:  i32,
    month: u8,
    day:   u8,
}

impl JalaliDate {
    /// Creates a validated Jalali date.
    ///
    /// # Errors
    /// Returns `DateError::OutOfSupportedRange` for years outside
    /// `MIN_JALALI_YEAR..=MAX_JALALI_YEAR` and `DateError::InvalidDate` when the
    /// month or day does not exist.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        if !is_supported_jalali_year(year) {
            return Err(DateError::OutOfSupportedRange {
                calendar: Calendar::Jalali,
                year,
            });
        }
        if month == 0 || month > MAX_MONTH || day < MIN_DAY || day > days_in_jalali_month(year, month) {
            return Err(DateError::InvalidDate {
                calendar: Calendar::Jalali,
                year,
                month,
                day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Builds a date whose fields the caller has already validated.
    pub(crate) const fn from_parts(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Converts to the components tuple `(year, month, day)`
    pub const fn to_parts(&self) -> (i32, u8, u8) {
        (self.year, self.month, self.day)
    }
}

/// A day of the proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{year:04}-{month:02}-{day:02}")]
pub struct GregorianDate {
    year:  i32,
    month: u8,
    day:   u8,
}

impl GregorianDate {
    /// Creates a validated Gregorian date.
    ///
    /// # Errors
    /// Returns `DateError::OutOfSupportedRange` for years before
    /// `MIN_GREGORIAN_YEAR` and `DateError::InvalidDate` when the month or day
    /// does not exist.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        if year < MIN_GREGORIAN_YEAR {
            return Err(DateError::OutOfSupportedRange {
                calendar: Calendar::Gregorian,
                year,
            });
        }
        if month == 0 || month > MAX_MONTH || day < MIN_DAY || day > days_in_gregorian_month(year, month) {
            return Err(DateError::InvalidDate {
                calendar: Calendar::Gregorian,
                year,
                month,
                day,
            });
        }
        Ok(Self { year, month, day })
    }

    pub(crate) const fn from_parts(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// The UTC calendar date of an instant.
    ///
    /// # Errors
    /// Returns `DateError::OutOfSupportedRange` if the instant falls before
    /// year 1.
    pub fn from_system_time(time: SystemTime) -> Result<Self, DateError> {
        const SECONDS_PER_DAY: u64 = 86_400;

        let days = match time.duration_since(UNIX_EPOCH) {
            Ok(elapsed) => i64::try_from(elapsed.as_secs() / SECONDS_PER_DAY).unwrap_or(i64::MAX / 2),
            Err(err) => {
                let before = err.duration();
                let whole = before.as_secs().div_ceil(SECONDS_PER_DAY);
                -i64::try_from(whole).unwrap_or(i64::MAX / 2)
            },
        };
        crate::convert::gregorian_from_unix_days(days)
    }

    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Converts to the components tuple `(year, month, day)`
    pub const fn to_parts(&self) -> (i32, u8, u8) {
        (self.year, self.month, self.day)
    }
}

/// Day of the week, declared in Persian order (the week starts on Saturday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Saturday,
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    const ALL: [Self; 7] = [
        Self::Saturday,
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
    ];

    /// Weekday of a day number counted from 0001-01-01, which was a Monday.
    pub(crate) fn from_day_number(days: i64) -> Self {
        let index = (days + 2).rem_euclid(i64::from(DAYS_IN_WEEK));
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let index = index as usize;
        Self::ALL[index]
    }

    /// Column in a Persian week, Saturday = 0
    #[inline]
    pub const fn persian_index(self) -> u8 {
        self as u8
    }

    /// Index in a Western week, Sunday = 0
    #[inline]
    pub const fn gregorian_index(self) -> u8 {
        (self as u8 + DAYS_IN_WEEK - 1) % DAYS_IN_WEEK
    }

    /// One-letter Persian label
    pub const fn label(self) -> &'static str {
        WEEKDAY_LABELS[self as usize]
    }
}

// Parsing

/// Splits an ISO `YYYY-MM-DD` string into its numeric components.
/// Persian digits are accepted and normalized first.
pub(crate) fn parse_ymd(s: &str) -> Result<(i32, u8, u8), DateError> {
    let normalized = to_ascii_digits(s.trim());
    if normalized.is_empty() {
        return Err(DateError::InvalidFormat("Empty date string".to_owned()));
    }

    let parts: Vec<&str> = normalized.split(DATE_SEPARATOR).collect();
    let [year, month, day] = parts.as_slice() else {
        return Err(DateError::InvalidFormat(format!(
            "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} {DATE_SEPARATOR} separators in {normalized}",
            parts.len() - 1
        )));
    };

    if year.len() < 4 || month.len() != 2 || day.len() != 2 {
        return Err(DateError::InvalidFormat(normalized));
    }
    Ok((
        parse_number(year, &normalized)?,
        parse_number(month, &normalized)?,
        parse_number(day, &normalized)?,
    ))
}

fn parse_number<T: FromStr>(part: &str, whole: &str) -> Result<T, DateError> {
    if !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DateError::InvalidFormat(whole.to_owned()));
    }
    part.parse::<T>()
        .map_err(|_| DateError::InvalidFormat(whole.to_owned()))
}

impl FromStr for JalaliDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = parse_ymd(s)?;
        Self::new(year, month, day)
    }
}

impl FromStr for GregorianDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = parse_ymd(s)?;
        Self::new(year, month, day)
    }
}

impl TryFrom<(i32, u8, u8)> for JalaliDate {
    type Error = DateError;

    fn try_from(value: (i32, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl TryFrom<(i32, u8, u8)> for GregorianDate {
    type Error = DateError;

    fn try_from(value: (i32, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl Serialize for JalaliDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for JalaliDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// Helper functions

pub const fn is_gregorian_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_gregorian_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_gregorian_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        GREGORIAN_DAYS_IN_MONTH[month as usize]
    }
}

pub fn days_in_jalali_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == ESFAND && is_leap_jalali_year(year) {
        ESFAND_DAYS_LEAP
    } else {
        JALALI_DAYS_IN_MONTH[month as usize]
    }
}
