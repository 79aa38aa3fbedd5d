//! The timespan value type.
//!
//! A [`Timespan`] is an ordered pair of instants `(start, end)` with
//! `start <= end`, closed on both ends. It is produced by
//! [`get_timespan`](crate::extract::get_timespan) and consumed by
//! [`in_timespan`](crate::filter::in_timespan).

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::error::Error;

/// A closed interval of time.
///
/// The ordering invariant `start <= end` is established at construction and
/// holds for the life of the value. `Deserialize` is deliberately not derived
/// since it would admit reversed endpoints without the constructor check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Timespan {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl Timespan {
    /// Creates a timespan from its two endpoints.
    ///
    /// # Parameters
    ///
    /// - `start`: the first instant of the interval
    /// - `end`: the last instant of the interval, at or after `start`
    ///
    /// # Returns
    ///
    /// - `Ok(Timespan)`: the interval `[start, end]`
    /// - `Err(Error::InvalidTimespan)`: if `start > end`
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Timespan, Error> {
        if start > end {
            return Err(Error::InvalidTimespan { start, end });
        }
        Ok(Timespan { start, end })
    }

    /// Returns the first instant of the interval.
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Returns the last instant of the interval.
    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Checks whether an instant falls within the interval.
    ///
    /// Both boundaries are inclusive: `contains(start)` and `contains(end)`
    /// are always true.
    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        self.start <= timestamp && timestamp <= self.end
    }

    /// Returns the length of the interval.
    ///
    /// A single-instant timespan (`start == end`) has zero duration.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

impl fmt::Display for Timespan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start.to_rfc3339(), self.end.to_rfc3339())
    }
}
