//! # Tweetlens Library
//!
//! A Rust library for analyzing and filtering collections of tweets. Every
//! operation is a pure function over an immutable list of tweets: inputs are
//! never mutated, and each call returns a fresh derived value.
//!
//! ## Features
//!
//! - Timespan computation: the minimum-length closed interval covering every
//!   tweet's timestamp
//! - Mention extraction: the set of distinct `@username` mentions across all
//!   tweets, with boundary rules that exclude email addresses
//! - Order-preserving filters: by author, by time window, by keyword
//! - Tweet construction from Twitter/X API v2 JSON payloads
//! - Structured logging via the `log` facade
//!
//! ## Example
//!
//! ```rust
//! use chrono::Utc;
//! use tweetlens::{get_mentioned_users, get_timespan, written_by, Tweet};
//!
//! let tweets = vec![
//!     Tweet::new(1, "alyssa", "talk to @bbitdiddle about rivest", Utc::now()),
//!     Tweet::new(2, "bbitdiddle", "rivest talk in 30 minutes #hype", Utc::now()),
//! ];
//!
//! let timespan = get_timespan(&tweets).expect("list is non-empty");
//! assert!(timespan.start() <= timespan.end());
//!
//! let mentioned = get_mentioned_users(&tweets);
//! assert!(mentioned.contains("bbitdiddle"));
//!
//! let by_alyssa = written_by(&tweets, "ALYSSA");
//! assert_eq!(by_alyssa.len(), 1);
//! ```

pub mod error;
pub mod extract;
pub mod filter;
pub mod timespan;
pub mod tweet;

// Re-export commonly used types and functions
pub use error::Error;
pub use extract::{get_mentioned_users, get_timespan};
pub use filter::{containing, in_timespan, written_by};
pub use timespan::Timespan;
pub use tweet::{tweets_from_search_response, Tweet};
