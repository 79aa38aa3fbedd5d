//! Predicate-based filtering of tweet lists.
//!
//! This module contains functions that derive sub-lists of tweets matching a
//! predicate: authored by a given user, sent within a given timespan, or
//! containing at least one of a given set of words. Every function preserves
//! the original relative order of the matching tweets and never mutates its
//! input.

use log::debug;

use crate::timespan::Timespan;
use crate::tweet::Tweet;

/// Finds tweets written by a particular user.
///
/// Author comparison is case-insensitive, so `written_by(tweets, "alyssa")`
/// and `written_by(tweets, "ALYSSA")` return the same result. The username is
/// assumed to be well-formed (letters/digits/underscore) but is not
/// validated; an arbitrary string simply matches nothing.
///
/// # Parameters
///
/// - `tweets`: a list of tweets with distinct ids, not modified by this
///   function
/// - `username`: the Twitter username to match
///
/// # Returns
///
/// All and only the tweets in the list whose author is `username`, in the
/// same order as in the input list. No match yields an empty vector, never an
/// error.
pub fn written_by(tweets: &[Tweet], username: &str) -> Vec<Tweet> {
    let matching: Vec<Tweet> = tweets
        .iter()
        // Usernames are ASCII-only, so ASCII case folding is exact here.
        .filter(|tweet| tweet.author().eq_ignore_ascii_case(username))
        .cloned()
        .collect();

    debug!(
        "{} of {} tweets written by '{}'",
        matching.len(),
        tweets.len(),
        username
    );
    matching
}

/// Finds tweets that were sent during a particular timespan.
///
/// Both boundaries are inclusive: a tweet timestamped exactly at the
/// timespan's start or end is part of the result.
///
/// # Parameters
///
/// - `tweets`: a list of tweets with distinct ids, not modified by this
///   function
/// - `timespan`: the closed interval to test against
///
/// # Returns
///
/// All and only the tweets in the list that were sent during the timespan, in
/// the same order as in the input list.
pub fn in_timespan(tweets: &[Tweet], timespan: &Timespan) -> Vec<Tweet> {
    let matching: Vec<Tweet> = tweets
        .iter()
        .filter(|tweet| timespan.contains(tweet.timestamp()))
        .cloned()
        .collect();

    debug!(
        "{} of {} tweets sent during {}",
        matching.len(),
        tweets.len(),
        timespan
    );
    matching
}

/// Finds tweets that contain certain words.
///
/// A word is a non-empty sequence of non-space characters. Matching is
/// case-insensitive substring containment, not whole-word tokenization: the
/// word `hype` matches a tweet ending in `#hype`.
///
/// # Parameters
///
/// - `tweets`: a list of tweets with distinct ids, not modified by this
///   function
/// - `words`: the words to search for
///
/// # Returns
///
/// All and only the tweets in the list whose text contains at least one of
/// the words, in the same order as in the input list. An empty word list or
/// an empty tweet list yields an empty vector, never an error.
pub fn containing(tweets: &[Tweet], words: &[&str]) -> Vec<Tweet> {
    // Lowercase the search words once, outside the per-tweet loop.
    let lowercase_words: Vec<String> = words.iter().map(|word| word.to_lowercase()).collect();

    let matching: Vec<Tweet> = tweets
        .iter()
        .filter(|tweet| {
            let text = tweet.text().to_lowercase();
            lowercase_words.iter().any(|word| text.contains(word))
        })
        .cloned()
        .collect();

    debug!(
        "{} of {} tweets contain at least one of {} words",
        matching.len(),
        tweets.len(),
        words.len()
    );
    matching
}
