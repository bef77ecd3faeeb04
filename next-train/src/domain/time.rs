//! Time remaining until a departure.
//!
//! The MBTA reports departures as RFC 3339 timestamps in Boston local time,
//! e.g. `2021-06-01T14:23:45-04:00`. We only ever compare the time of day
//! against "now" in the same offset, so a departure shortly before
//! midnight looks like it has already left when queried just after
//! midnight. Lookups are same-day only.

use chrono::{DateTime, FixedOffset, Timelike, Utc};
use std::fmt;

/// A non-negative hours/minutes/seconds delta until a departure.
///
/// # Examples
///
/// ```
/// use chrono::{DateTime, Utc};
/// use next_train::domain::Countdown;
///
/// let now: DateTime<Utc> = "2021-06-01T18:23:02Z".parse().unwrap();
/// let departure = DateTime::parse_from_rfc3339("2021-06-01T14:23:45-04:00").unwrap();
///
/// let countdown = Countdown::until(now, departure).unwrap();
/// assert_eq!(countdown.minutes(), 0);
/// assert_eq!(countdown.seconds(), 43);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Countdown {
    hours: u32,
    minutes: u32,
    seconds: u32,
}

impl Countdown {
    /// Split a number of seconds into hours, minutes and seconds.
    pub fn from_seconds(total: u32) -> Self {
        Self {
            hours: total / 3600,
            minutes: total % 3600 / 60,
            seconds: total % 60,
        }
    }

    /// Time from `now` until `departure`, or `None` if it has departed.
    ///
    /// Both sides are reduced to a time of day in the departure's offset
    /// and subtracted field by field, borrowing seconds from minutes and
    /// minutes from hours. A negative hour after borrowing means departed;
    /// there is no wrap to the next day.
    pub fn until(now: DateTime<Utc>, departure: DateTime<FixedOffset>) -> Option<Self> {
        let now = now.with_timezone(departure.offset()).time();
        let departure = departure.time();

        let mut hours = departure.hour() as i64 - now.hour() as i64;
        let mut minutes = departure.minute() as i64 - now.minute() as i64;
        let mut seconds = departure.second() as i64 - now.second() as i64;

        if seconds < 0 {
            seconds += 60;
            minutes -= 1;
        }
        if minutes < 0 {
            minutes += 60;
            hours -= 1;
        }
        if hours < 0 {
            return None;
        }

        Some(Self {
            hours: hours as u32,
            minutes: minutes as u32,
            seconds: seconds as u32,
        })
    }

    pub fn hours(&self) -> u32 {
        self.hours
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    /// Total length in seconds.
    pub fn total_seconds(&self) -> u32 {
        self.hours * 3600 + self.minutes * 60 + self.seconds
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.hours {
            0 => {}
            1 => write!(f, "1 hour, ")?,
            h => write!(f, "{h} hours, ")?,
        }
        write!(f, "{} minutes and {} seconds", self.minutes, self.seconds)
    }
}
