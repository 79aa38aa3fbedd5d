//! Error types for the tweetlens library.
//!
//! This module defines the single error enum returned by fallible operations
//! in the crate: timespan computation over an empty tweet list, timespan
//! construction with reversed endpoints, and tweet payload parsing.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors produced by tweetlens operations.
///
/// Most functions in this crate are total and return empty results rather than
/// errors; the variants here cover the few contracts that are genuine
/// invalid-argument failures plus the payload-parsing constructors.
#[derive(Debug, Error)]
pub enum Error {
    /// `get_timespan` was called with an empty list of tweets.
    ///
    /// There is no meaningful minimum-length interval covering zero
    /// timestamps, so the operation fails instead of inventing one.
    #[error("list of tweets cannot be empty")]
    EmptyTweetList,

    /// A `Timespan` was constructed with its start after its end.
    #[error("timespan start {start} is after end {end}")]
    InvalidTimespan {
        /// The offending start instant
        start: DateTime<Utc>,
        /// The offending end instant
        end: DateTime<Utc>,
    },

    /// A tweet object in an API payload was missing a required field.
    #[error("tweet payload is missing required field `{0}`")]
    MissingField(&'static str),

    /// A tweet's `created_at` value could not be parsed as an RFC 3339
    /// timestamp.
    #[error("failed to parse tweet timestamp '{value}'")]
    InvalidTimestamp {
        /// The raw timestamp string from the payload
        value: String,
        /// The underlying chrono parse failure
        #[source]
        source: chrono::ParseError,
    },
}
