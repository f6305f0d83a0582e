//! Shorthand constructors for tests.

use crate::{GregorianDate, JalaliDate, JalaliMonth};

pub fn jalali(year: i32, month: u8, day: u8) -> JalaliDate {
    JalaliDate::new(year, month, day).expect("invalid Jalali date in test")
}

pub fn gregorian(year: i32, month: u8, day: u8) -> GregorianDate {
    GregorianDate::new(year, month, day).expect("invalid Gregorian date in test")
}

pub fn jalali_month(year: i32, month: u8) -> JalaliMonth {
    JalaliMonth::new(year, month).expect("invalid Jalali month in test")
}
