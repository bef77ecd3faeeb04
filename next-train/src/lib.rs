//! Next MBTA subway departure.
//!
//! A command-line tool that answers: "When does the next train leave this
//! stop, going this way?" Route and stop metadata are fetched once per run
//! and every API request is throttled against the MBTA's rate limit.

pub mod cache;
pub mod cli;
pub mod clock;
pub mod departure;
pub mod domain;
pub mod mbta;
pub mod session;
