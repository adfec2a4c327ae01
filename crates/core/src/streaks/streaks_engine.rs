//! Write-time streak transitions.
//!
//! Each commit of a new day advances every tracked entity exactly once:
//!
//! - success after a successful yesterday, or from a zero streak: `current + 1`
//! - success after a failed or missing yesterday while a streak was running:
//!   the new day starts a fresh streak of 1
//! - failure: `current = 0` and the day is remembered as `last_broken_date`
//!
//! `best_streak` only ever grows. The transition is not idempotent; callers
//! must apply it once per committed day, using `last_applied_date` to tell
//! whether a record has already seen that day.

use chrono::Duration;
use log::debug;

use super::streaks_model::{StreakEntity, StreakRecord};
use crate::entries::DailyEntry;

/// Applies one day's outcome to an entity's streak record.
///
/// `yesterday_entry` only counts when it is dated exactly one day before
/// `today_entry`. A missing `existing` record is treated as a zero streak.
/// `last_applied_date` never moves backwards when an older day is applied.
pub fn apply_streak_transition(
    entity: StreakEntity<'_>,
    today_entry: &DailyEntry,
    yesterday_entry: Option<&DailyEntry>,
    existing: Option<&StreakRecord>,
) -> StreakRecord {
    let mut record = existing.cloned().unwrap_or_else(|| {
        StreakRecord::zero(&today_entry.user_id, entity.key(), today_entry.updated_at)
    });

    let expected_yesterday = today_entry.date - Duration::days(1);
    let yesterday = yesterday_entry.filter(|e| e.date == expected_yesterday);
    if yesterday_entry.is_some() && yesterday.is_none() {
        debug!(
            "Ignoring non-adjacent previous entry for streak '{}' on {}",
            entity.key(),
            today_entry.date
        );
    }

    if entity.is_success(today_entry) {
        let continues = yesterday.map(|e| entity.is_success(e)).unwrap_or(false);
        if continues || record.current_streak == 0 {
            record.current_streak += 1;
        } else {
            record.current_streak = 1;
        }
        record.best_streak = record.best_streak.max(record.current_streak);
    } else {
        record.current_streak = 0;
        record.last_broken_date = Some(today_entry.date);
    }

    record.last_applied_date = record.last_applied_date.max(Some(today_entry.date));
    record.updated_at = today_entry.updated_at;
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entries::{GoalStatusMap, GoalStatusValue};
    use crate::goals::{Goal, GoalCategory, GoalKind};
    use chrono::{NaiveDate, NaiveDateTime};

    fn ts() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    fn entry(day: u32, rating: u8, statuses: &[(&str, GoalStatusValue)]) -> DailyEntry {
        DailyEntry {
            id: format!("e{}", day),
            user_id: "u1".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
            goal_status: statuses
                .iter()
                .map(|(id, v)| (id.to_string(), *v))
                .collect::<GoalStatusMap>(),
            rating,
            suggested_rating: None,
            notes: "logged".to_string(),
            created_at: ts(),
            updated_at: ts(),
        }
    }

    fn record(current: u32, best: u32) -> StreakRecord {
        StreakRecord {
            current_streak: current,
            best_streak: best,
            ..StreakRecord::zero("u1", "overall", ts())
        }
    }

    fn numeric_goal(target: f64) -> Goal {
        Goal {
            id: "water".to_string(),
            user_id: "u1".to_string(),
            name: "Water".to_string(),
            kind: GoalKind::Numeric,
            target_value: Some(target),
            unit: "l".to_string(),
            category: GoalCategory::Health,
            icon: "💧".to_string(),
            is_active: true,
            created_at: ts(),
        }
    }

    #[test]
    fn test_first_success_starts_streak() {
        let today = entry(10, 4, &[]);
        let result = apply_streak_transition(StreakEntity::Overall, &today, None, None);

        assert_eq!(result.goal_id, "overall");
        assert_eq!(result.current_streak, 1);
        assert_eq!(result.best_streak, 1);
        assert_eq!(result.last_broken_date, None);
        assert!(result.has_applied(today.date));
        assert!(!result.has_applied(today.date.pred_opt().unwrap()));
    }

    #[test]
    fn test_success_after_success_increments() {
        let yesterday = entry(9, 3, &[]);
        let today = entry(10, 5, &[]);
        let existing = record(4, 6);

        let result =
            apply_streak_transition(StreakEntity::Overall, &today, Some(&yesterday), Some(&existing));

        assert_eq!(result.current_streak, 5);
        assert_eq!(result.best_streak, 6);
    }

    #[test]
    fn test_success_after_failed_yesterday_resets_to_one() {
        let yesterday = entry(9, 2, &[]);
        let today = entry(10, 4, &[]);
        let existing = record(3, 3);

        let result =
            apply_streak_transition(StreakEntity::Overall, &today, Some(&yesterday), Some(&existing));

        assert_eq!(result.current_streak, 1);
        assert_eq!(result.best_streak, 3);
    }

    #[test]
    fn test_success_after_gap_resets_to_one() {
        let today = entry(10, 4, &[]);
        let existing = record(3, 3);

        let result = apply_streak_transition(StreakEntity::Overall, &today, None, Some(&existing));
        assert_eq!(result.current_streak, 1);
    }

    #[test]
    fn test_non_adjacent_previous_entry_is_ignored() {
        let two_days_ago = entry(8, 5, &[]);
        let today = entry(10, 4, &[]);
        let existing = record(3, 3);

        let result = apply_streak_transition(
            StreakEntity::Overall,
            &today,
            Some(&two_days_ago),
            Some(&existing),
        );
        assert_eq!(result.current_streak, 1);
    }

    #[test]
    fn test_failure_after_long_streak() {
        let yesterday = entry(9, 4, &[]);
        let today = entry(10, 2, &[]);
        let existing = record(5, 5);

        let result =
            apply_streak_transition(StreakEntity::Overall, &today, Some(&yesterday), Some(&existing));

        assert_eq!(result.current_streak, 0);
        assert_eq!(result.best_streak, 5);
        assert_eq!(result.last_broken_date, NaiveDate::from_ymd_opt(2024, 3, 10));
    }

    #[test]
    fn test_new_best_streak_recorded() {
        let yesterday = entry(9, 5, &[]);
        let today = entry(10, 5, &[]);
        let existing = record(7, 7);

        let result =
            apply_streak_transition(StreakEntity::Overall, &today, Some(&yesterday), Some(&existing));
        assert_eq!(result.current_streak, 8);
        assert_eq!(result.best_streak, 8);
    }

    #[test]
    fn test_numeric_goal_streak_uses_target() {
        let goal = numeric_goal(3.0);
        let yesterday = entry(9, 3, &[("water", GoalStatusValue::Numeric(3.0))]);
        let today = entry(10, 3, &[("water", GoalStatusValue::Numeric(4.5))]);
        let existing = StreakRecord {
            current_streak: 2,
            best_streak: 2,
            ..StreakRecord::zero("u1", "water", ts())
        };

        let result = apply_streak_transition(
            StreakEntity::Goal(&goal),
            &today,
            Some(&yesterday),
            Some(&existing),
        );
        assert_eq!(result.goal_id, "water");
        assert_eq!(result.current_streak, 3);
        assert_eq!(result.best_streak, 3);
    }

    #[test]
    fn test_goal_not_attempted_breaks_streak() {
        let goal = numeric_goal(3.0);
        let today = entry(10, 5, &[]);
        let existing = StreakRecord {
            current_streak: 4,
            best_streak: 9,
            ..StreakRecord::zero("u1", "water", ts())
        };

        let result =
            apply_streak_transition(StreakEntity::Goal(&goal), &today, None, Some(&existing));
        assert_eq!(result.current_streak, 0);
        assert_eq!(result.best_streak, 9);
        assert_eq!(result.last_broken_date, Some(today.date));
    }
}
