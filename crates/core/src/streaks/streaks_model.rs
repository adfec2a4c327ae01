//! Streak domain models.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::constants::{OVERALL_STREAK_ID, OVERALL_SUCCESS_RATING};
use crate::entries::DailyEntry;
use crate::goals::Goal;

/// Continuity counters for one tracked entity of one user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StreakRecord {
    pub user_id: String,
    /// A goal id, or `"overall"` for the rating-based streak
    pub goal_id: String,
    pub current_streak: u32,
    pub best_streak: u32,
    pub last_broken_date: Option<NaiveDate>,
    /// Most recent day whose outcome has been applied
    #[serde(default)]
    pub last_applied_date: Option<NaiveDate>,
    pub updated_at: NaiveDateTime,
}

impl StreakRecord {
    /// Zero-state record used when an entity has never been tracked.
    pub fn zero(user_id: impl Into<String>, goal_id: impl Into<String>, at: NaiveDateTime) -> Self {
        Self {
            user_id: user_id.into(),
            goal_id: goal_id.into(),
            current_streak: 0,
            best_streak: 0,
            last_broken_date: None,
            last_applied_date: None,
            updated_at: at,
        }
    }

    /// Whether the given day has already been applied to this record.
    pub fn has_applied(&self, date: NaiveDate) -> bool {
        self.last_applied_date == Some(date)
    }

    pub fn is_overall(&self) -> bool {
        self.goal_id == OVERALL_STREAK_ID
    }
}

/// Something a streak can be tracked for.
#[derive(Debug, Clone, Copy)]
pub enum StreakEntity<'a> {
    /// The day as a whole, judged by its rating
    Overall,
    Goal(&'a Goal),
}

impl StreakEntity<'_> {
    /// Key the entity's record is stored under.
    pub fn key(&self) -> &str {
        match self {
            StreakEntity::Overall => OVERALL_STREAK_ID,
            StreakEntity::Goal(goal) => goal.id.as_str(),
        }
    }

    /// Whether the entry counts as a successful day for this entity.
    pub fn is_success(&self, entry: &DailyEntry) -> bool {
        match self {
            StreakEntity::Overall => entry.rating >= OVERALL_SUCCESS_RATING,
            StreakEntity::Goal(goal) => entry.goal_status.is_completed(goal),
        }
    }
}
