//! Goal aggregates engine.
//!
//! Turns a user's goal definitions, full entry history and streak records into
//! completion rates, 7-day series, a calendar-month rollup and a coarse trend.
//! Pure and synchronous; `today` is supplied by the caller.

use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::{Datelike, NaiveDate};

use super::aggregates_model::{
    DailyCompletion, DailyGoalCount, DisciplineTrend, GoalAggregateReport, GoalDayProgress,
    GoalWeeklyProgress, GoalWiseStat, MonthlyStats,
};
use crate::constants::TRAILING_WINDOW_DAYS;
use crate::entries::DailyEntry;
use crate::goals::Goal;
use crate::streaks::StreakRecord;
use crate::utils::{percent_of, round_to_tenth, trailing_days};

#[derive(Default)]
struct GoalTally {
    attempts: u32,
    completed: u32,
    /// Completion flag per entry date
    by_date: HashMap<NaiveDate, bool>,
}

#[derive(Clone, Copy)]
struct DayTally {
    completed: u32,
    attempted: u32,
}

/// Attempted and completed counts of the active goals for one entry.
fn tally_entry(entry: &DailyEntry, active_goals: &[&Goal]) -> DayTally {
    let mut day = DayTally {
        completed: 0,
        attempted: 0,
    };
    for goal in active_goals {
        if let Some(value) = entry.goal_status.status(&goal.id) {
            day.attempted += 1;
            if goal.is_completed_by(value) {
                day.completed += 1;
            }
        }
    }
    day
}

/// Endpoint comparison over the last three per-day percentages.
fn classify_trend(series: &[u32]) -> DisciplineTrend {
    if series.len() < 3 {
        return DisciplineTrend::Stable;
    }
    let recent = &series[series.len() - 3..];
    if recent[2] > recent[0] {
        DisciplineTrend::Improving
    } else if recent[2] < recent[0] {
        DisciplineTrend::Declining
    } else {
        DisciplineTrend::Stable
    }
}

fn monthly_stats(entries: &[&DailyEntry], active_goals: &[&Goal], today: NaiveDate) -> MonthlyStats {
    let mut stats = MonthlyStats::default();

    for entry in entries
        .iter()
        .filter(|e| e.date.year() == today.year() && e.date.month() == today.month())
    {
        let day = tally_entry(entry, active_goals);
        stats.total_days += 1;
        stats.goals_completed += day.completed;
        stats.goals_attempted += day.attempted;
        if day.attempted > 0 && day.completed == day.attempted {
            stats.perfect_days += 1;
        }
    }

    stats.monthly_completion_rate = percent_of(stats.goals_completed, stats.goals_attempted);
    stats.average_goals_per_day = if stats.total_days > 0 {
        round_to_tenth(stats.goals_completed as f64 / stats.total_days as f64)
    } else {
        0.0
    };
    stats
}

/// Computes the goal aggregate report.
///
/// Inactive goals are ignored, and statuses or streak records that reference
/// no active goal are skipped. With no active goals the fixed empty report
/// is returned regardless of entries and streaks.
pub fn compute_goal_aggregates(
    goals: &[Goal],
    entries: &[DailyEntry],
    streaks: &[StreakRecord],
    today: NaiveDate,
) -> GoalAggregateReport {
    let active_goals: Vec<&Goal> = goals.iter().filter(|g| g.is_active).collect();
    if active_goals.is_empty() {
        return GoalAggregateReport::empty();
    }

    let mut chronological: Vec<&DailyEntry> = entries.iter().collect();
    chronological.sort_by_key(|e| e.date);

    let mut tallies: HashMap<&str, GoalTally> = active_goals
        .iter()
        .map(|g| (g.id.as_str(), GoalTally::default()))
        .collect();
    let mut daily: BTreeMap<NaiveDate, DayTally> = BTreeMap::new();
    let mut completed_count = 0u32;
    let mut possible_count = 0u32;

    for entry in &chronological {
        for goal in &active_goals {
            let status = entry.goal_status.status(&goal.id);
            let completed = status.map(|v| goal.is_completed_by(v)).unwrap_or(false);

            if let Some(tally) = tallies.get_mut(goal.id.as_str()) {
                if status.is_some() {
                    tally.attempts += 1;
                }
                if completed {
                    tally.completed += 1;
                }
                tally.by_date.insert(entry.date, completed);
            }
        }

        let day = tally_entry(entry, &active_goals);
        possible_count += day.attempted;
        completed_count += day.completed;
        if day.attempted > 0 {
            daily.insert(entry.date, day);
        }
    }

    let completion_rate = percent_of(completed_count, possible_count);

    let active_ids: HashSet<&str> = active_goals.iter().map(|g| g.id.as_str()).collect();
    let goal_streaks: Vec<&StreakRecord> = streaks
        .iter()
        .filter(|s| !s.is_overall() && active_ids.contains(s.goal_id.as_str()))
        .collect();

    // First-encountered record wins ties in both directions
    let longest_streak_goal = goal_streaks
        .iter()
        .copied()
        .reduce(|best, s| if s.best_streak > best.best_streak { s } else { best })
        .cloned();
    let weakest_streak_goal = goal_streaks
        .iter()
        .copied()
        .min_by_key(|s| s.current_streak)
        .cloned();

    let window = trailing_days(today, TRAILING_WINDOW_DAYS);

    let last7_days_completion = window
        .iter()
        .map(|date| DailyCompletion {
            date: *date,
            completion: daily
                .get(date)
                .map(|d| percent_of(d.completed, d.attempted))
                .unwrap_or(0),
        })
        .collect();

    let daily_goals_completed = window
        .iter()
        .map(|date| DailyGoalCount {
            date: *date,
            count: daily.get(date).map(|d| d.completed).unwrap_or(0),
        })
        .collect();

    let last7_days_goal_progress = active_goals
        .iter()
        .map(|goal| {
            let by_date = tallies.get(goal.id.as_str()).map(|t| &t.by_date);
            let progress_data: Vec<GoalDayProgress> = window
                .iter()
                .map(|date| GoalDayProgress {
                    date: *date,
                    completed: by_date
                        .and_then(|m| m.get(date))
                        .map(|done| u8::from(*done))
                        .unwrap_or(0),
                })
                .collect();
            let completed_in_week = progress_data.iter().filter(|p| p.completed == 1).count();

            GoalWeeklyProgress {
                goal_id: goal.id.clone(),
                goal_name: goal.name.clone(),
                goal_emoji: goal.icon.clone(),
                progress_data,
                weekly_completion: percent_of(completed_in_week as u32, TRAILING_WINDOW_DAYS),
            }
        })
        .collect();

    let goal_wise_stats = active_goals
        .iter()
        .map(|goal| {
            let (attempts, completed) = tallies
                .get(goal.id.as_str())
                .map(|t| (t.attempts, t.completed))
                .unwrap_or((0, 0));
            let streak = goal_streaks.iter().find(|s| s.goal_id == goal.id);

            GoalWiseStat {
                goal_id: goal.id.clone(),
                goal_name: goal.name.clone(),
                goal_emoji: goal.icon.clone(),
                completion_rate: percent_of(completed, attempts),
                completed,
                attempts,
                current_streak: streak.map(|s| s.current_streak).unwrap_or(0),
                best_streak: streak.map(|s| s.best_streak).unwrap_or(0),
            }
        })
        .collect();

    let series: Vec<u32> = daily
        .values()
        .map(|d| percent_of(d.completed, d.attempted))
        .collect();

    GoalAggregateReport {
        total_goals: active_goals.len() as u32,
        active_goals: active_goals.len() as u32,
        completion_rate,
        longest_streak_goal,
        weakest_streak_goal,
        last7_days_completion,
        last7_days_goal_progress,
        discipline_trend: classify_trend(&series),
        goal_wise_stats,
        monthly_stats: monthly_stats(&chronological, &active_goals, today),
        daily_goals_completed,
    }
}
