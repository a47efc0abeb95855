//! Pure analytics over a user's mood history.
//!
//! Both engines operate on immutable snapshots already fetched from the
//! database and take "today" as an explicit parameter, so results are
//! deterministic and testable without a clock.

pub mod streak;
pub mod trend;
