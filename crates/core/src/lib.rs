//! Commit Daily Core - Domain entities, services, and traits.
//!
//! This crate contains the discipline-tracking logic: daily entries, streak
//! transitions, goal and spending aggregates, and their narration into
//! insights. It is storage-agnostic and defines repository traits that the
//! host application implements.

pub mod config;
pub mod constants;
pub mod entries;
pub mod errors;
pub mod expenses;
pub mod goals;
pub mod insights;
pub mod motivation;
pub mod profile;
pub mod streaks;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
