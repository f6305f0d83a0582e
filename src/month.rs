use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    Calendar, DATE_SEPARATOR, DateError, FARVARDIN, JalaliDate, MAX_MONTH, MIN_DAY, prelude::*,
    types::days_in_jalali_month,
};

/// A month of the Jalali calendar, the unit a calendar view shows at once.
/// The year is not limited to the supported conversion range, so a cursor can
/// always move; building a grid for an unsupported year fails instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{year:04}-{month:02}")]
pub struct JalaliMonth {
    year:  i32,
    month: u8,
}

impl JalaliMonth {
    /// Creates a new month with validation.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDate` if `month` is not in `1..=12`.
    pub fn new(year: i32, month: u8) -> Result<Self, DateError> {
        if month == 0 || month > MAX_MONTH {
            return Err(DateError::InvalidDate {
                calendar: Calendar::Jalali,
                year,
                month,
                day: MIN_DAY,
            });
        }
        Ok(Self { year, month })
    }

    /// Returns the year of the month
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month number (Farvardin = 1)
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// The following month, rolling Esfand over into the next year
    #[must_use]
    pub const fn next(self) -> Self {
        if self.month == MAX_MONTH {
            Self {
                year:  self.year.saturating_add(1),
                month: FARVARDIN,
            }
        } else {
            Self {
                year:  self.year,
                month: self.month + 1,
            }
        }
    }

    /// The preceding month, rolling Farvardin back into the previous year
    #[must_use]
    pub const fn prev(self) -> Self {
        if self.month == FARVARDIN {
            Self {
                year:  self.year.saturating_sub(1),
                month: MAX_MONTH,
            }
        } else {
            Self {
                year:  self.year,
                month: self.month - 1,
            }
        }
    }

    /// Number of days in the month
    pub fn days(&self) -> u8 {
        days_in_jalali_month(self.year, self.month)
    }

    /// First day of the month.
    ///
    /// # Errors
    /// Returns `DateError::OutOfSupportedRange` if the year cannot be converted.
    pub fn first_day(&self) -> Result<JalaliDate, DateError> {
        JalaliDate::new(self.year, self.month, MIN_DAY)
    }

    /// Last day of the month (inclusive).
    ///
    /// # Errors
    /// Returns `DateError::OutOfSupportedRange` if the year cannot be converted.
    pub fn last_day(&self) -> Result<JalaliDate, DateError> {
        JalaliDate::new(self.year, self.month, self.days())
    }

    /// Checks if `date` falls inside this month
    pub const fn contains(&self, date: &JalaliDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl From<JalaliDate> for JalaliMonth {
    fn from(date: JalaliDate) -> Self {
        Self {
            year:  date.year(),
            month: date.month(),
        }
    }
}

impl FromStr for JalaliMonth {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = crate::numerals::to_ascii_digits(s.trim());
        let separator_count = normalized.matches(DATE_SEPARATOR).count();

        match separator_count {
            1 => {
                let (year, month) = normalized.split_once(DATE_SEPARATOR).ok_or_else(|| {
                    DateError::InvalidFormat(format!(
                        "Separator '{DATE_SEPARATOR}' not found despite count == 1"
                    ))
                })?;
                let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
                if year.len() < 4 || month.len() != 2 || !all_digits(year) || !all_digits(month) {
                    return Err(DateError::InvalidFormat(normalized));
                }

                let year = year
                    .parse::<i32>()
                    .map_err(|_| DateError::InvalidFormat(normalized.clone()))?;
                let month = month
                    .parse::<u8>()
                    .map_err(|_| DateError::InvalidFormat(normalized.clone()))?;
                Self::new(year, month)
            },
            _ => Err(DateError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM, found {separator_count} '{DATE_SEPARATOR}' separators: {s}"
            ))),
        }
    }
}

impl Serialize for JalaliMonth {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for JalaliMonth {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
