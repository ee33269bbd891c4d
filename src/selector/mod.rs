//! Daily Selection Module
//!
//! Pure mapping from a UTC calendar date to one record of the collection.
//!
//! ## Core Concepts
//! - **Determinism**: the pick for a given date and collection size is a
//!   fixed function of the date string. Repeated calls, restarts, and other
//!   hosts all agree.
//! - **Digest**: the date string is hashed with SHA-256 and the first 16
//!   digest bytes are read as a big-endian unsigned integer, then reduced
//!   modulo the collection size. The digest choice is pinned; changing it
//!   changes every future pick.
//! - **Resizes**: no stability is promised across collection size changes.

pub mod daily;

pub use daily::{daily_index, pick_for_date, today_utc_key};
