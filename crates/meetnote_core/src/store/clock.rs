//! Date source used to stamp new notes.

use chrono::{Local, NaiveDate};

/// Format used for a note's `date` field, e.g. `Dec 15, 2024`.
pub const NOTE_DATE_FORMAT: &str = "%b %-d, %Y";

/// Supplies the calendar date at note creation time.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Local wall-clock date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Renders a date the way note cards display it.
pub fn format_note_date(date: NaiveDate) -> String {
    date.format(NOTE_DATE_FORMAT).to_string()
}
