//! Conversions between the entry format (`DD-MM-YYYY`), the storage format
//! (`YYYY-MM-DD`) and the readable table format (`23 Jan, 2025`), plus the
//! "days remaining" labels shown next to start and due dates.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{Result, ViewError};

const STORAGE_FORMAT: &str = "%Y-%m-%d";
const MILLIS_PER_DAY: f64 = 86_400_000.0;

const MONTHS: [(&str, &str); 12] = [
    ("01", "Jan"),
    ("02", "Feb"),
    ("03", "Mar"),
    ("04", "Apr"),
    ("05", "May"),
    ("06", "Jun"),
    ("07", "Jul"),
    ("08", "Aug"),
    ("09", "Sep"),
    ("10", "Oct"),
    ("11", "Nov"),
    ("12", "Dec"),
];

/// Which of a task's two dates a label is computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateKind {
    Start,
    Due,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaysRemaining {
    Days(i64),
    Overdue,
    Started,
}

impl fmt::Display for DaysRemaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DaysRemaining::Days(days) => write!(f, "{days}"),
            DaysRemaining::Overdue => write!(f, "Overdue!"),
            DaysRemaining::Started => write!(f, "Started!"),
        }
    }
}

/// `23-01-2025` -> `2025-01-23`. The parts are swapped verbatim; only the
/// number of `-` separated parts is checked.
pub fn to_storage_format(display: &str) -> Result<String> {
    let [d, m, y] = split_three(display, "DD-MM-YYYY")?;
    Ok(format!("{y}-{m}-{d}"))
}

/// `2025-01-23` -> `23 Jan, 2025`. The day is emitted exactly as written.
pub fn to_readable_format(storage: &str) -> Result<String> {
    let [y, m, d] = split_three(storage, "YYYY-MM-DD")?;
    let month = MONTHS
        .iter()
        .find(|(number, _)| *number == m)
        .map(|(_, name)| *name)
        .ok_or_else(|| ViewError::malformed_date(storage, "a month between 01 and 12"))?;
    Ok(format!("{d} {month}, {y}"))
}

/// Readable form of an already-typed date.
pub fn readable(date: NaiveDate) -> String {
    date.format("%d %b, %Y").to_string()
}

pub fn parse_storage_date(storage: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(storage.trim(), STORAGE_FORMAT)
        .map_err(|_| ViewError::malformed_date(storage, "YYYY-MM-DD"))
}

/// Days between local midnight of `date` and `now`.
///
/// A due date in the past reports [`DaysRemaining::Overdue`] and a start
/// date in the future reports [`DaysRemaining::Started`]. Everything else is
/// the magnitude of the ceiling of the fractional day difference, so a
/// difference of exactly zero is `Days(0)` for both kinds.
pub fn days_remaining(date: NaiveDate, kind: DateKind, now: NaiveDateTime) -> DaysRemaining {
    let target = date.and_time(NaiveTime::MIN);
    let days = (target - now).num_milliseconds() as f64 / MILLIS_PER_DAY;

    if days < 0.0 && kind == DateKind::Due {
        DaysRemaining::Overdue
    } else if days > 0.0 && kind == DateKind::Start {
        DaysRemaining::Started
    } else {
        DaysRemaining::Days(days.ceil().abs() as i64)
    }
}

/// [`days_remaining`] measured from local midnight of `today`.
pub fn days_remaining_on(date: NaiveDate, kind: DateKind, today: NaiveDate) -> DaysRemaining {
    days_remaining(date, kind, today.and_time(NaiveTime::MIN))
}

fn split_three<'a>(value: &'a str, expected: &'static str) -> Result<[&'a str; 3]> {
    let parts: Vec<&str> = value.split('-').collect();
    match parts.as_slice() {
        [a, b, c] => Ok([*a, *b, *c]),
        _ => Err(ViewError::malformed_date(value, expected)),
    }
}
