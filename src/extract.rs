//! Aggregate analysis over a list of tweets.
//!
//! This module contains functions that derive collective properties from a
//! list of tweets: the minimum-length time interval covering every tweet's
//! timestamp, and the set of distinct usernames mentioned in the tweets'
//! text.

use std::collections::HashSet;
use std::sync::OnceLock;

use log::debug;
use regex::Regex;

use crate::error::Error;
use crate::timespan::Timespan;
use crate::tweet::Tweet;

static MENTION_REGEX: OnceLock<Regex> = OnceLock::new();

/// Returns the compiled regex matching `@` followed by a maximal run of
/// username-alphabet characters.
///
/// Boundary conditions are not part of the pattern: the `regex` crate has no
/// lookaround, so the character preceding the `@` is checked separately in
/// [`get_mentioned_users`]. The character after the run is guaranteed not to
/// be in the username alphabet because the `+` match is maximal.
fn mention_regex() -> &'static Regex {
    MENTION_REGEX.get_or_init(|| {
        Regex::new(r"@[a-zA-Z0-9_]+").expect("mention regex pattern is valid")
    })
}

/// Checks whether a byte is valid in a Twitter username.
///
/// The username alphabet is ASCII letters, digits, and underscore. Byte
/// inspection is sound here even in UTF-8 text: every continuation or lead
/// byte of a multi-byte character is >= 0x80 and therefore outside the
/// alphabet.
fn is_username_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Gets the time period spanned by a list of tweets.
///
/// # Parameters
///
/// - `tweets`: a list of tweets with distinct ids, not modified by this
///   function
///
/// # Returns
///
/// - `Ok(Timespan)`: the minimum-length closed interval that contains the
///   timestamp of every tweet in the list; for a single tweet the interval
///   has `start == end`
/// - `Err(Error::EmptyTweetList)`: if the list is empty
pub fn get_timespan(tweets: &[Tweet]) -> Result<Timespan, Error> {
    // There is no meaningful timespan for zero tweets.
    let Some(first) = tweets.first() else {
        return Err(Error::EmptyTweetList);
    };

    // Track the earliest and latest timestamps in a single pass.
    let mut earliest = first.timestamp();
    let mut latest = first.timestamp();
    for tweet in tweets {
        let timestamp = tweet.timestamp();
        if timestamp < earliest {
            earliest = timestamp;
        }
        if timestamp > latest {
            latest = timestamp;
        }
    }

    debug!(
        "timespan over {} tweets runs from {} to {}",
        tweets.len(),
        earliest,
        latest
    );

    // earliest <= latest by construction, so this cannot fail.
    Timespan::new(earliest, latest)
}

/// Gets the usernames mentioned in a list of tweets.
///
/// A mention is `@` followed by one or more username-alphabet characters
/// (ASCII letters, digits, underscore), where the character immediately
/// before the `@` (if any) is not itself in the username alphabet. That
/// boundary rule is what keeps email addresses out: in `bitdiddle@mit.edu`
/// the `@` is preceded by `e`, so no mention of `mit` is extracted. Any
/// non-alphabet character terminates a mention, so `@alyssa!` mentions
/// `alyssa`.
///
/// Usernames are case-insensitive: results are lowercased, and mixed-case
/// spellings of the same username collapse to a single set entry.
///
/// # Parameters
///
/// - `tweets`: a list of tweets with distinct ids, not modified by this
///   function
///
/// # Returns
///
/// The set of distinct lowercased usernames mentioned in the text of the
/// tweets. An empty list, or tweets with no mentions, yield an empty set.
pub fn get_mentioned_users(tweets: &[Tweet]) -> HashSet<String> {
    let regex = mention_regex();
    let mut mentioned = HashSet::new();

    for tweet in tweets {
        let text = tweet.text();
        let bytes = text.as_bytes();

        for found in regex.find_iter(text) {
            // The character before the '@' must not be a username character,
            // otherwise this is the tail of an email address or similar.
            if found.start() > 0 && is_username_byte(bytes[found.start() - 1]) {
                continue;
            }

            // Strip the leading '@' and lowercase before inserting so case
            // variants collapse to one entry.
            let username = &text[found.start() + 1..found.end()];
            mentioned.insert(username.to_lowercase());
        }
    }

    debug!(
        "extracted {} distinct mentioned users from {} tweets",
        mentioned.len(),
        tweets.len()
    );

    mentioned
}
