//! Persian display strings for dates and month views.

use crate::consts::{DISPLAY_SEPARATOR, JALALI_MONTH_NAMES, MAX_MONTH};
use crate::numerals::persian_number;
use crate::{DateError, GregorianDate, JalaliDate, JalaliMonth};

/// Persian name of a Jalali month (Farvardin = 1).
pub fn month_name(month: u8) -> Option<&'static str> {
    (1..=MAX_MONTH)
        .contains(&month)
        .then(|| JALALI_MONTH_NAMES[usize::from(month - 1)])
}

/// Header of a month view, e.g. `"فروردین ۱۴۰۳"`.
pub fn month_title(month: JalaliMonth) -> String {
    let name = month_name(month.month()).unwrap_or_default();
    format!("{name}{DISPLAY_SEPARATOR}{}", persian_number(month.year()))
}

impl JalaliDate {
    /// Long Persian form `"<day> <month name> <year>"`, e.g. `"۱ فروردین ۱۴۰۳"`.
    pub fn to_persian_string(&self) -> String {
        let name = month_name(self.month()).unwrap_or_default();
        format!(
            "{day}{DISPLAY_SEPARATOR}{name}{DISPLAY_SEPARATOR}{year}",
            day = persian_number(self.day()),
            year = persian_number(self.year()),
        )
    }
}

/// Turns an ISO Gregorian date string into its Persian display form.
///
/// # Errors
/// Returns the parse or conversion error; the caller decides on a fallback.
pub fn format_display_date(iso: &str) -> Result<String, DateError> {
    let date = iso.parse::<GregorianDate>()?;
    Ok(date.to_jalali()?.to_persian_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use crate::test_utils::{jalali, jalali_month};

    #[test]
    fn test_month_names() {
        assert_eq!(month_name(1), Some("فروردین"));
        assert_eq!(month_name(7), Some("مهر"));
        assert_eq!(month_name(12), Some("اسفند"));
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(13), None);
    }

    #[test]
    fn test_to_persian_string() {
        assert_eq!(jalali(1403, 1, 1).to_persian_string(), "۱ فروردین ۱۴۰۳");
        assert_eq!(jalali(1403, 12, 30).to_persian_string(), "۳۰ اسفند ۱۴۰۳");
        assert_eq!(jalali(1357, 11, 22).to_persian_string(), "۲۲ بهمن ۱۳۵۷");
    }

    #[test]
    fn test_month_title() {
        assert_eq!(month_title(jalali_month(1403, 1)), "فروردین ۱۴۰۳");
        assert_eq!(month_title(jalali_month(1404, 10)), "دی ۱۴۰۴");
    }

    #[test]
    fn test_format_display_date() {
        assert_eq!(format_display_date("2024-03-20").unwrap(), "۱ فروردین ۱۴۰۳");
        assert_eq!(format_display_date("2025-03-20").unwrap(), "۳۰ اسفند ۱۴۰۳");
    }

    #[test]
    fn test_format_display_date_errors() {
        let result = format_display_date("not a date");
        assert_eq!(result.map_err(|e| e.kind()), Err(ErrorKind::InvalidDate));

        let result = format_display_date("2023-02-29");
        assert_eq!(result.map_err(|e| e.kind()), Err(ErrorKind::InvalidDate));

        let result = format_display_date("0500-01-01");
        assert_eq!(result.map_err(|e| e.kind()), Err(ErrorKind::OutOfSupportedRange));
    }
}
