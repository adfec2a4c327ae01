//! Daily entry repository and service traits.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::entries_model::{CommitOutcome, DailyEntry, NewDailyEntry};
use crate::errors::Result;
use crate::streaks::StreakRecord;

/// Trait defining the contract for daily entry persistence.
///
/// Implementations must enforce one entry per (user, date); a second
/// `insert_entry` for the same day fails with
/// `DatabaseError::UniqueViolation`.
#[async_trait]
pub trait EntryRepositoryTrait: Send + Sync {
    fn get_entry_by_date(&self, user_id: &str, date: NaiveDate) -> Result<Option<DailyEntry>>;

    /// All entries for the user, oldest first.
    fn list_entries(&self, user_id: &str) -> Result<Vec<DailyEntry>>;

    /// The most recent `limit` entries, newest first.
    fn list_recent_entries(&self, user_id: &str, limit: usize) -> Result<Vec<DailyEntry>>;

    async fn insert_entry(&self, entry: DailyEntry) -> Result<DailyEntry>;

    async fn update_entry(&self, entry: DailyEntry) -> Result<DailyEntry>;
}

/// Trait defining the contract for daily entry service operations.
#[async_trait]
pub trait EntryServiceTrait: Send + Sync {
    /// Validates and stores the day, then advances streaks for a new day.
    async fn commit_daily_entry(&self, user_id: &str, new_entry: NewDailyEntry)
        -> Result<CommitOutcome>;

    fn get_today_entry(&self, user_id: &str) -> Result<Option<DailyEntry>>;

    fn list_entries(&self, user_id: &str, limit: Option<usize>) -> Result<Vec<DailyEntry>>;

    fn get_streaks(&self, user_id: &str) -> Result<Vec<StreakRecord>>;
}
