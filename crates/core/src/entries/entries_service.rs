use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use log::{debug, warn};
use uuid::Uuid;

use super::entries_model::{suggest_rating, CommitOutcome, DailyEntry, NewDailyEntry};
use super::entries_traits::{EntryRepositoryTrait, EntryServiceTrait};
use crate::constants::{DEFAULT_ENTRY_LIST_LIMIT, MAX_RATING, MIN_RATING, OVERALL_STREAK_ID};
use crate::errors::{Error, Result};
use crate::goals::{Goal, GoalRepositoryTrait};
use crate::streaks::{apply_streak_transition, StreakEntity, StreakRecord, StreakRepositoryTrait};
use crate::utils::Calendar;

/// Service for committing and reading daily entries.
///
/// This is the write boundary: malformed days are rejected here so the
/// aggregate engines can assume well-formed input.
pub struct EntryService {
    entry_repo: Arc<dyn EntryRepositoryTrait>,
    goal_repo: Arc<dyn GoalRepositoryTrait>,
    streak_repo: Arc<dyn StreakRepositoryTrait>,
    calendar: Calendar,
}

impl EntryService {
    pub fn new(
        entry_repo: Arc<dyn EntryRepositoryTrait>,
        goal_repo: Arc<dyn GoalRepositoryTrait>,
        streak_repo: Arc<dyn StreakRepositoryTrait>,
        calendar: Calendar,
    ) -> Self {
        Self {
            entry_repo,
            goal_repo,
            streak_repo,
            calendar,
        }
    }

    fn validate(&self, new_entry: &NewDailyEntry) -> Result<()> {
        if new_entry.notes.trim().is_empty() {
            return Err(Error::missing_field("notes"));
        }

        if let Some(rating) = new_entry.rating {
            if !(MIN_RATING..=MAX_RATING).contains(&rating) {
                return Err(Error::invalid_input(format!(
                    "Rating must be between {} and {}, got {}",
                    MIN_RATING, MAX_RATING, rating
                )));
            }
        }

        let today = self.calendar.today();
        if new_entry.date > today {
            return Err(Error::invalid_input(format!(
                "Cannot commit {} before it happens (today is {})",
                new_entry.date, today
            )));
        }

        Ok(())
    }

    /// Applies an entry's day to the overall streak and every active goal's
    /// streak.
    ///
    /// Records that have already seen the day are skipped, so a retry after
    /// a partial failure only advances what is still behind. The overall
    /// record is written last and marks the day as fully applied.
    async fn advance_streaks(&self, entry: &DailyEntry, active_goals: &[Goal]) -> Result<()> {
        let yesterday = self
            .entry_repo
            .get_entry_by_date(&entry.user_id, entry.date - Duration::days(1))?;

        let entities = active_goals
            .iter()
            .map(StreakEntity::Goal)
            .chain(std::iter::once(StreakEntity::Overall));

        for entity in entities {
            let existing = self.streak_repo.get_streak(&entry.user_id, entity.key())?;
            if existing.as_ref().is_some_and(|r| r.has_applied(entry.date)) {
                debug!(
                    "Streak '{}' for {} already covers {}",
                    entity.key(),
                    entry.user_id,
                    entry.date
                );
                continue;
            }

            let updated =
                apply_streak_transition(entity, entry, yesterday.as_ref(), existing.as_ref());
            debug!(
                "Streak '{}' for {} on {}: {} (best {})",
                entity.key(),
                entry.user_id,
                entry.date,
                updated.current_streak,
                updated.best_streak
            );
            self.streak_repo.upsert_streak(updated).await?;
        }

        Ok(())
    }

    /// Whether the overall streak still lacks the given day, meaning an
    /// earlier commit of that day stopped before finishing its transitions.
    fn is_unapplied(&self, user_id: &str, date: NaiveDate) -> Result<bool> {
        let overall = self.streak_repo.get_streak(user_id, OVERALL_STREAK_ID)?;
        Ok(overall
            .and_then(|r| r.last_applied_date)
            .map_or(true, |applied| applied < date))
    }
}

#[async_trait]
impl EntryServiceTrait for EntryService {
    async fn commit_daily_entry(
        &self,
        user_id: &str,
        new_entry: NewDailyEntry,
    ) -> Result<CommitOutcome> {
        self.validate(&new_entry)?;

        let active_goals: Vec<Goal> = self
            .goal_repo
            .load_goals(user_id)?
            .into_iter()
            .filter(|g| g.is_active)
            .collect();

        let suggested = suggest_rating(&new_entry.goal_status, &active_goals);
        let rating = new_entry.rating.unwrap_or(suggested);
        let now = self.calendar.now();

        if let Some(mut existing) = self.entry_repo.get_entry_by_date(user_id, new_entry.date)? {
            existing.goal_status = new_entry.goal_status;
            existing.rating = rating;
            existing.suggested_rating = Some(suggested);
            existing.notes = new_entry.notes;
            existing.updated_at = now;

            let entry = self.entry_repo.update_entry(existing).await?;

            // Transitions run once per day, edits never reapply them
            if self.is_unapplied(user_id, entry.date)? {
                warn!(
                    "Entry for {} on {} was stored without its streaks; applying them now",
                    user_id, entry.date
                );
                self.advance_streaks(&entry, &active_goals).await?;
            } else {
                warn!(
                    "Entry for {} on {} was edited; streaks are left unchanged",
                    user_id, entry.date
                );
            }

            return Ok(CommitOutcome {
                entry,
                created: false,
            });
        }

        let entry = DailyEntry {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            date: new_entry.date,
            goal_status: new_entry.goal_status,
            rating,
            suggested_rating: Some(suggested),
            notes: new_entry.notes,
            created_at: now,
            updated_at: now,
        };

        let entry = self.entry_repo.insert_entry(entry).await?;
        self.advance_streaks(&entry, &active_goals).await?;

        Ok(CommitOutcome {
            entry,
            created: true,
        })
    }

    fn get_today_entry(&self, user_id: &str) -> Result<Option<DailyEntry>> {
        self.entry_repo
            .get_entry_by_date(user_id, self.calendar.today())
    }

    fn list_entries(&self, user_id: &str, limit: Option<usize>) -> Result<Vec<DailyEntry>> {
        self.entry_repo
            .list_recent_entries(user_id, limit.unwrap_or(DEFAULT_ENTRY_LIST_LIMIT))
    }

    fn get_streaks(&self, user_id: &str) -> Result<Vec<StreakRecord>> {
        self.streak_repo.list_streaks(user_id)
    }
}
