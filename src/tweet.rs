//! The tweet data model.
//!
//! This module contains the immutable [`Tweet`] value type consumed by the
//! extract and filter operations, along with constructors for building tweets
//! from Twitter/X API v2 JSON payloads.

use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A single tweet: id, author, text, and timestamp.
///
/// Tweets are immutable values. Within any list passed to the functions in
/// this crate, ids are expected to be distinct; no function mutates a tweet
/// or the list containing it.
///
/// # Fields
///
/// - `id`: unique within any list this tweet appears in
/// - `author`: Twitter username, letters/digits/underscore only,
///   case-insensitive identity
/// - `text`: arbitrary tweet text
/// - `timestamp`: the instant the tweet was sent, in UTC
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tweet {
    id: u64,
    author: String,
    text: String,
    timestamp: DateTime<Utc>,
}

impl Tweet {
    /// Creates a new tweet from its four components.
    ///
    /// # Parameters
    ///
    /// - `id`: unique tweet id
    /// - `author`: the author's username (not validated here; see the field
    ///   documentation for the expected alphabet)
    /// - `text`: the tweet text
    /// - `timestamp`: when the tweet was sent
    pub fn new(
        id: u64,
        author: impl Into<String>,
        text: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Tweet {
            id,
            author: author.into(),
            text: text.into(),
            timestamp,
        }
    }

    /// Returns the unique id of this tweet.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the author's username.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the tweet text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the instant this tweet was sent.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Builds a tweet from a single tweet object in a Twitter API v2 payload.
    ///
    /// The object must carry `id`, `author`, `text`, and an RFC 3339
    /// `created_at` field. The `id` field is accepted either as a JSON string
    /// (as the v2 API sends it) or as a number.
    ///
    /// # Parameters
    ///
    /// - `value`: one tweet object, e.g. an element of the `data` array of a
    ///   search response
    ///
    /// # Returns
    ///
    /// - `Ok(Tweet)`: the parsed tweet
    /// - `Err(Error::MissingField)`: a required field was absent or had the
    ///   wrong JSON type
    /// - `Err(Error::InvalidTimestamp)`: `created_at` was not valid RFC 3339
    pub fn from_api_json(value: &serde_json::Value) -> Result<Tweet, Error> {
        // The v2 API sends ids as strings to avoid 53-bit precision loss in
        // JavaScript clients; accept a plain number as well.
        let id = match value.get("id") {
            Some(id) => id
                .as_u64()
                .or_else(|| id.as_str().and_then(|s| s.parse().ok()))
                .ok_or(Error::MissingField("id"))?,
            None => return Err(Error::MissingField("id")),
        };

        let author = value
            .get("author")
            .and_then(|v| v.as_str())
            .ok_or(Error::MissingField("author"))?;

        let text = value
            .get("text")
            .and_then(|v| v.as_str())
            .ok_or(Error::MissingField("text"))?;

        let created_at = value
            .get("created_at")
            .and_then(|v| v.as_str())
            .ok_or(Error::MissingField("created_at"))?;

        // Parse ISO 8601 timestamp from the Twitter API and normalize to UTC
        let timestamp = DateTime::parse_from_rfc3339(created_at)
            .map_err(|e| Error::InvalidTimestamp {
                value: created_at.to_string(),
                source: e,
            })?
            .with_timezone(&Utc);

        Ok(Tweet::new(id, author, text, timestamp))
    }
}

/// Extracts the tweets from the `data` array of a Twitter API v2 search
/// response payload.
///
/// # Parameters
///
/// - `response`: the full JSON response body of a v2 search request
///
/// # Returns
///
/// - `Ok(Vec<Tweet>)`: all tweets in the `data` array, in payload order; an
///   absent `data` field (the API's encoding of zero results) yields an empty
///   vector
/// - `Err(...)`: the first tweet object that failed to parse
pub fn tweets_from_search_response(response: &serde_json::Value) -> Result<Vec<Tweet>, Error> {
    let Some(data) = response.get("data").and_then(|d| d.as_array()) else {
        debug!("search response has no data array, returning no tweets");
        return Ok(Vec::new());
    };

    let mut tweets = Vec::with_capacity(data.len());
    for entry in data {
        tweets.push(Tweet::from_api_json(entry)?);
    }
    debug!("parsed {} tweets from search response", tweets.len());
    Ok(tweets)
}
