//! Log ingestion.
//!
//! Turns a list of NDJSON files into an ordered sequence of [`LogRecord`]s and
//! optionally narrows it down to a single calendar day.
//!
//! Failures here never abort a run: bad lines are dropped, unreadable files
//! are logged and skipped.
//!
//! [`LogRecord`]: crate::record::LogRecord

mod error;
mod filter;
mod read;
#[cfg(test)]
mod tests;

pub use error::*;
pub use filter::*;
pub use read::*;
