//! Day and time-of-day primitives for the weekly grid.
//!
//! Times are minutes since midnight wrapped in [`TimeOfDay`]. The string
//! form is zero-padded `HH:MM`, so numeric ordering and lexical ordering
//! of the serialized form agree.
//!
//! # Reference
//! Schaerf (1999), "A Survey of Automated Timetabling"

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Weekday of a slot.
///
/// Saturday is representable for break times and availability windows
/// even though the canonical grid stops at Friday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Day {
    /// The five days covered by the canonical grid, in grid order.
    pub const WEEKDAYS: [Day; 5] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
    ];
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
        };
        f.write_str(name)
    }
}

/// Time of day stored as minutes since midnight.
///
/// Parsed from `"HH:MM"`; malformed strings are the one input defect
/// that surfaces as an error rather than a constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

/// Error raised when a time string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeOfDayParseError {
    /// The string is not in `HH:MM` form.
    #[error("malformed time string '{0}': expected HH:MM")]
    Malformed(String),
    /// Hour or minute component is out of range.
    #[error("time '{0}' out of range: hour must be 0-23, minute 0-59")]
    OutOfRange(String),
}

impl TimeOfDay {
    /// Creates a time of day from hour and minute.
    ///
    /// # Panics
    /// Panics if `hour > 23` or `minute > 59`.
    pub fn hm(hour: u16, minute: u16) -> Self {
        assert!(hour < 24 && minute < 60, "invalid time {hour}:{minute}");
        Self(hour * 60 + minute)
    }

    /// Minutes since midnight.
    #[inline]
    pub fn minutes(self) -> u16 {
        self.0
    }

    /// Hour component (0-23).
    #[inline]
    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    /// Minute component (0-59).
    #[inline]
    pub fn minute(self) -> u16 {
        self.0 % 60
    }

    /// Whether two times are exactly one hour apart.
    ///
    /// This is the grid's notion of adjacency: a lunch or break gap
    /// between two slots breaks the chain because the difference
    /// exceeds 60 minutes.
    #[inline]
    pub fn is_consecutive_with(self, other: TimeOfDay) -> bool {
        self.0.abs_diff(other.0) == 60
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeOfDayParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (h, m) = s
            .split_once(':')
            .ok_or_else(|| TimeOfDayParseError::Malformed(s.to_string()))?;
        let hour: u16 = h
            .parse()
            .map_err(|_| TimeOfDayParseError::Malformed(s.to_string()))?;
        let minute: u16 = m
            .parse()
            .map_err(|_| TimeOfDayParseError::Malformed(s.to_string()))?;
        if hour > 23 || minute > 59 {
            return Err(TimeOfDayParseError::OutOfRange(s.to_string()));
        }
        Ok(Self(hour * 60 + minute))
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// A time interval on a weekday.
///
/// Grid slots are one hour long; teacher availability windows may span
/// several hours. Equality and hashing consider only `(day, start)` —
/// that pair identifies a slot in every conflict check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Day of the week.
    pub day: Day,
    /// Interval start.
    pub start: TimeOfDay,
    /// Interval end.
    pub end: TimeOfDay,
}

impl TimeSlot {
    /// Creates a new time slot.
    pub fn new(day: Day, start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { day, start, end }
    }
}

impl PartialEq for TimeSlot {
    fn eq(&self, other: &Self) -> bool {
        self.day == other.day && self.start == other.start
    }
}

impl Eq for TimeSlot {}

impl Hash for TimeSlot {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.day.hash(state);
        self.start.hash(state);
    }
}
