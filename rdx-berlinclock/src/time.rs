//! The validated time value every clock face renders from.
//!
//! Text is read with a fixed, locale-independent `HH:mm:ss` parser: two digits
//! for each field, colon separated, no padding or signs, and strict range
//! checks. Nothing else in the crate parses time.

use crate::error::InvalidTimeFormat;
use chrono::{Local, NaiveTime, TimeZone, Timelike, Utc};
use std::fmt;
use std::str::FromStr;

pub const HOURS_PER_DAY: u8 = 24;
pub const MINUTES_PER_HOUR: u8 = 60;
pub const SECONDS_PER_MINUTE: u8 = 60;

/// A time of day with hour in `0..24`, minute in `0..60` and second in `0..60`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
    second: u8,
}

impl ClockTime {
    /// Midnight, `00:00:00`.
    pub const MIDNIGHT: ClockTime = ClockTime {
        hour: 0,
        minute: 0,
        second: 0,
    };

    /// Creates a `ClockTime`, rejecting any field outside its 24-hour range.
    pub fn new(hour: u8, minute: u8, second: u8) -> Result<Self, InvalidTimeFormat> {
        if hour < HOURS_PER_DAY && minute < MINUTES_PER_HOUR && second < SECONDS_PER_MINUTE {
            Ok(Self {
                hour,
                minute,
                second,
            })
        } else {
            Err(InvalidTimeFormat::new(format!(
                "{hour:02}:{minute:02}:{second:02}"
            )))
        }
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn second(&self) -> u8 {
        self.second
    }

    /// The current wall-clock time in the system's local timezone.
    pub fn now_local() -> Self {
        Local::now().time().into()
    }

    /// The current wall-clock time in `tz`.
    pub fn now_in<Tz: TimeZone>(tz: &Tz) -> Self {
        Utc::now().with_timezone(tz).time().into()
    }
}

impl From<NaiveTime> for ClockTime {
    /// Truncates sub-second precision. A leap second (which chrono stores as
    /// nanoseconds past `:59`) reads as `:59`.
    fn from(time: NaiveTime) -> Self {
        // chrono guarantees these ranges, so the narrowing casts are lossless.
        Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
            second: time.second() as u8,
        }
    }
}

impl FromStr for ClockTime {
    type Err = InvalidTimeFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidTimeFormat::new(s);

        let bytes = s.as_bytes();
        if bytes.len() != 8 || bytes[2] != b':' || bytes[5] != b':' {
            return Err(invalid());
        }

        let field = |at: usize| -> Option<u8> {
            let (tens, units) = (bytes[at], bytes[at + 1]);
            if tens.is_ascii_digit() && units.is_ascii_digit() {
                Some((tens - b'0') * 10 + (units - b'0'))
            } else {
                None
            }
        };

        match (field(0), field(3), field(6)) {
            (Some(hour), Some(minute), Some(second)) => {
                ClockTime::new(hour, minute, second).map_err(|_| invalid())
            }
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}
