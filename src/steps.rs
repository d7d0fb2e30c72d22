//! Fallible steps which make up the sample date pipeline.

use derive_more::Display;
use log::{log_enabled, trace};
use serde::Serialize;

use crate::outcome::{error, ok, Outcome};

const WRONG_DATE: &str = "Wrong Date";

/// Dates after this year are refused.
pub const LATEST_YEAR: i32 = 2020;

#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct CalendarDate {
    year: i32,
    month: i32,
    day: i32,
}

impl CalendarDate {
    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> i32 {
        self.month
    }

    pub fn day(&self) -> i32 {
        self.day
    }
}

pub fn parse_string(text: &str) -> Outcome<i32> {
    match text.trim().parse() {
        Ok(num) => ok(num),
        Err(_) => error(format!("{text} is not a number")),
    }
}

pub fn create_date(year: i32, month: i32, day: i32) -> Outcome<CalendarDate> {
    if !(1..=LATEST_YEAR).contains(&year) || !(1..=12).contains(&month) {
        return error(WRONG_DATE);
    }
    if !(1..=days_in_month(year, month)).contains(&day) {
        return error(WRONG_DATE);
    }
    ok(CalendarDate { year, month, day })
}

pub fn multiply(a: i32, b: i32) -> Outcome<i32> {
    if a < 0 {
        return error(format!("{a} is less than zero"));
    }
    if b < 0 {
        return error(format!("{b} is less than zero"));
    }
    match a.checked_mul(b) {
        Some(product) => product.into(),
        None => error(format!("{a} * {b} overflows")),
    }
}

/// Parse a day of the month, build a date from it and render that date.
pub fn date_pipeline(year: i32, month: i32, day_text: &str) -> Outcome<String> {
    if log_enabled!(log::Level::Trace) {
        trace!("running date pipeline on {year}-{month} with day {day_text:?}");
    }
    parse_string(day_text)
        .then(|day| create_date(year, month, day))
        .then(|date| ok(date.to_string()))
}

fn days_in_month(year: i32, month: i32) -> i32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
