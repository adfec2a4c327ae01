//! Rating analytics over the most recent entries.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::{ANALYTICS_ENTRY_LIMIT, MAX_RATING, MIN_RATING};
use crate::entries::DailyEntry;
use crate::goals::Goal;
use crate::utils::{round_to_hundredth, round_to_tenth};

/// Days shown in the recent-entries strip.
const RECENT_STRIP_DAYS: usize = 30;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalCompletionRate {
    pub name: String,
    pub icon: String,
    /// Percentage with one decimal
    pub rate: f64,
    /// Entries that carry a status for the goal
    pub total: u32,
    pub completed: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsOverview {
    pub total_days: u32,
    /// Mean rating with two decimals, 0 without entries
    pub avg_rating: f64,
    pub five_star_days: u32,
    pub one_star_days: u32,
    /// Count per rating, every rating from 1 to 5 present
    pub rating_distribution: BTreeMap<u8, u32>,
    /// Up to 30 most recent entries, oldest first
    pub last30_days: Vec<DailyEntry>,
    /// Keyed by goal id, inactive goals included
    pub goal_completion_rates: BTreeMap<String, GoalCompletionRate>,
}

/// Summarises ratings and per-goal completion over the most recent 90
/// entries.
pub fn compute_analytics_overview(entries: &[DailyEntry], goals: &[Goal]) -> AnalyticsOverview {
    let mut recent: Vec<&DailyEntry> = entries.iter().collect();
    recent.sort_by(|a, b| b.date.cmp(&a.date));
    recent.truncate(ANALYTICS_ENTRY_LIMIT);

    let mut rating_distribution: BTreeMap<u8, u32> =
        (MIN_RATING..=MAX_RATING).map(|r| (r, 0)).collect();
    for entry in &recent {
        if let Some(count) = rating_distribution.get_mut(&entry.rating) {
            *count += 1;
        }
    }

    let avg_rating = if recent.is_empty() {
        0.0
    } else {
        let sum: u32 = recent.iter().map(|e| e.rating as u32).sum();
        round_to_hundredth(sum as f64 / recent.len() as f64)
    };

    let last30_days = recent
        .iter()
        .take(RECENT_STRIP_DAYS)
        .rev()
        .map(|e| (*e).clone())
        .collect();

    let goal_completion_rates = goals
        .iter()
        .map(|goal| {
            let mut total = 0u32;
            let mut completed = 0u32;
            for status in recent.iter().filter_map(|e| e.goal_status.status(&goal.id)) {
                total += 1;
                if goal.is_completed_by(status) {
                    completed += 1;
                }
            }
            let rate = if total > 0 {
                round_to_tenth(completed as f64 * 100.0 / total as f64)
            } else {
                0.0
            };

            (
                goal.id.clone(),
                GoalCompletionRate {
                    name: goal.name.clone(),
                    icon: goal.icon.clone(),
                    rate,
                    total,
                    completed,
                },
            )
        })
        .collect();

    AnalyticsOverview {
        total_days: recent.len() as u32,
        avg_rating,
        five_star_days: rating_distribution.get(&MAX_RATING).copied().unwrap_or(0),
        one_star_days: rating_distribution.get(&MIN_RATING).copied().unwrap_or(0),
        rating_distribution,
        last30_days,
        goal_completion_rates,
    }
}
