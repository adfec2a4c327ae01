use async_trait::async_trait;

use super::streaks_model::StreakRecord;
use crate::errors::Result;

/// Trait for streak record persistence, keyed by (user, goal id or "overall").
#[async_trait]
pub trait StreakRepositoryTrait: Send + Sync {
    fn get_streak(&self, user_id: &str, goal_id: &str) -> Result<Option<StreakRecord>>;
    fn list_streaks(&self, user_id: &str) -> Result<Vec<StreakRecord>>;
    /// Inserts or replaces the record for its (user, goal id) key.
    async fn upsert_streak(&self, record: StreakRecord) -> Result<StreakRecord>;
}
