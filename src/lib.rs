mod consts;
mod convert;
mod format;
mod grid;
mod leap;
mod month;
mod navigation;
mod numerals;
mod prelude;
mod types;

#[cfg(test)]
mod test_utils;

pub use consts::*;
pub use convert::{gregorian_to_jalali, jalali_to_gregorian};
pub use format::{format_display_date, month_name, month_title};
pub use grid::{Cells, GridCell, MonthGrid, build_month_grid};
pub use leap::{days_in_jalali_year, is_leap_jalali_year, is_supported_jalali_year};
pub use month::JalaliMonth;
pub use navigation::{Direction, NavigationState};
pub use numerals::{persian_number, to_ascii_digits, to_persian_digits};
pub use types::{
    GregorianDate, JalaliDate, Weekday, days_in_gregorian_month, days_in_jalali_month,
    is_gregorian_leap_year,
};

use crate::prelude::*;

/// Calendar a date or error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Calendar {
    #[display(fmt = "Jalali")]
    Jalali,
    #[display(fmt = "Gregorian")]
    Gregorian,
}

/// Errors raised while building, parsing or converting dates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// The month or day does not exist in the given year.
    #[error("Invalid {calendar} date: {year}-{month:02}-{day:02}")]
    InvalidDate {
        calendar: Calendar,
        year:     i32,
        month:    u8,
        day:      u8,
    },

    /// The input is not an ISO `YYYY-MM-DD` string.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    /// The year has no counterpart in the other calendar.
    #[error("{calendar} year {year} is outside the supported range")]
    OutOfSupportedRange { calendar: Calendar, year: i32 },
}

/// Coarse classification of [`DateError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed input or a non-existent month or day
    InvalidDate,
    /// A well-formed date outside the convertible years
    OutOfSupportedRange,
}

impl DateError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidDate { .. } | Self::InvalidFormat(_) => ErrorKind::InvalidDate,
            Self::OutOfSupportedRange { .. } => ErrorKind::OutOfSupportedRange,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{gregorian, jalali, jalali_month};

    #[test]
    fn test_nowruz_1403() {
        let date = jalali_to_gregorian(1403, 1, 1).unwrap();
        assert_eq!(date.to_string(), "2024-03-20");
        assert_eq!(gregorian_to_jalali(2024, 3, 20).unwrap(), jalali(1403, 1, 1));
    }

    #[test]
    fn test_esfand_30() {
        assert!(JalaliDate::new(1403, 12, 30).is_ok());
        assert!(is_leap_jalali_year(1403));
        assert!(!is_leap_jalali_year(1404));

        let err = JalaliDate::new(1404, 12, 30).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidDate);
        assert_eq!(err.to_string(), "Invalid Jalali date: 1404-12-30");
    }

    #[test]
    fn test_picker_session() {
        let mut state = NavigationState::open(gregorian(2025, 3, 1), None).unwrap();
        assert_eq!(state.cursor(), jalali_month(1403, 12));
        assert_eq!(state.navigate(Direction::Next), jalali_month(1404, 1));
        assert_eq!(state.navigate(Direction::Prev), jalali_month(1403, 12));

        state.jump_to(jalali(1403, 1, 10));
        let grid = state.grid().unwrap();
        let first = grid.cells().find(|cell| !cell.is_empty()).unwrap();
        assert_eq!(state.select(&first).as_deref(), Some("2024-03-20"));
        assert_eq!(
            format_display_date("2024-03-20").unwrap(),
            state.selected_label().unwrap()
        );
    }

    #[test]
    fn test_error_messages() {
        let err = DateError::OutOfSupportedRange {
            calendar: Calendar::Gregorian,
            year:     500,
        };
        assert_eq!(err.to_string(), "Gregorian year 500 is outside the supported range");
        assert_eq!(err.kind(), ErrorKind::OutOfSupportedRange);

        let err = "20240320".parse::<GregorianDate>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidDate);
        assert!(err.to_string().starts_with("Invalid date format: "));
    }

    #[test]
    fn test_public_types_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<JalaliDate>();
        assert_send_sync::<GregorianDate>();
        assert_send_sync::<MonthGrid>();
        assert_send_sync::<NavigationState>();
        assert_send_sync::<DateError>();
    }
}
