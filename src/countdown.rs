// src/countdown.rs
//! Deadline arithmetic shared by the detail view and the recommendation filter

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::fmt;

const MS_PER_DAY: i64 = 86_400_000;
const MS_PER_HOUR: i64 = 3_600_000;
const MS_PER_MINUTE: i64 = 60_000;
const MS_PER_SECOND: i64 = 1_000;

/// Source of the current wall-clock time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a given instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeLeft {
    Remaining {
        days: i64,
        hours: i64,
        minutes: i64,
        seconds: i64,
    },
    Expired,
}

impl TimeLeft {
    pub fn until(deadline: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let delta = (deadline - now).num_milliseconds();
        if delta <= 0 {
            return TimeLeft::Expired;
        }

        TimeLeft::Remaining {
            days: delta / MS_PER_DAY,
            hours: (delta / MS_PER_HOUR) % 24,
            minutes: (delta / MS_PER_MINUTE) % 60,
            seconds: (delta / MS_PER_SECOND) % 60,
        }
    }

    pub fn is_expired(&self) -> bool {
        matches!(self, TimeLeft::Expired)
    }
}

impl fmt::Display for TimeLeft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeLeft::Remaining {
                days,
                hours,
                minutes,
                seconds,
            } => f.pad(&format!("{}d {}h {}m {}s", days, hours, minutes, seconds)),
            TimeLeft::Expired => f.pad("Expired"),
        }
    }
}

impl Serialize for TimeLeft {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// True once no time is left before `deadline`.
pub fn deadline_elapsed(deadline: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    TimeLeft::until(deadline, now).is_expired()
}

/// Long-form deadline date, e.g. "May 1, 2025".
pub fn format_deadline_date(deadline: DateTime<Utc>) -> String {
    deadline.format("%B %-d, %Y").to_string()
}
