//! Daily entry domain models.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::goals::Goal;

/// A recorded status for one goal on one day.
///
/// Serialized untagged, so JSON `true` is a boolean status and `3` or `2.5`
/// a numeric one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GoalStatusValue {
    Boolean(bool),
    Numeric(f64),
}

/// Per-goal statuses for a day, keyed by goal id.
///
/// A goal with no entry in the map was not attempted that day. JSON `null`
/// values are read as "not attempted" too.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "HashMap<String, Option<GoalStatusValue>>")]
pub struct GoalStatusMap(HashMap<String, GoalStatusValue>);

impl GoalStatusMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Status recorded for the goal, or `None` when it was not attempted.
    pub fn status(&self, goal_id: &str) -> Option<GoalStatusValue> {
        self.0.get(goal_id).copied()
    }

    pub fn is_attempted(&self, goal_id: &str) -> bool {
        self.0.contains_key(goal_id)
    }

    /// Whether the goal has a status that meets it.
    pub fn is_completed(&self, goal: &Goal) -> bool {
        self.status(&goal.id)
            .map(|value| goal.is_completed_by(value))
            .unwrap_or(false)
    }

    pub fn insert(&mut self, goal_id: impl Into<String>, value: GoalStatusValue) {
        self.0.insert(goal_id.into(), value);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &GoalStatusValue)> {
        self.0.iter()
    }
}

impl From<HashMap<String, Option<GoalStatusValue>>> for GoalStatusMap {
    fn from(raw: HashMap<String, Option<GoalStatusValue>>) -> Self {
        GoalStatusMap(
            raw.into_iter()
                .filter_map(|(goal_id, value)| value.map(|v| (goal_id, v)))
                .collect(),
        )
    }
}

impl FromIterator<(String, GoalStatusValue)> for GoalStatusMap {
    fn from_iter<I: IntoIterator<Item = (String, GoalStatusValue)>>(iter: I) -> Self {
        GoalStatusMap(iter.into_iter().collect())
    }
}

/// Domain model for one user's log of one calendar day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyEntry {
    pub id: String,
    pub user_id: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub goal_status: GoalStatusMap,
    pub rating: u8,
    pub suggested_rating: Option<u8>,
    pub notes: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for committing a day
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewDailyEntry {
    pub date: NaiveDate,
    #[serde(default)]
    pub goal_status: GoalStatusMap,
    /// When absent the suggested rating is used
    pub rating: Option<u8>,
    pub notes: String,
}

/// Outcome of committing a day.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitOutcome {
    pub entry: DailyEntry,
    /// False when an existing entry for the date was overwritten
    pub created: bool,
}

/// Rating suggested from the share of active goals completed.
///
/// 3 when there are no active goals; otherwise >= 90% -> 5, >= 70% -> 4,
/// >= 50% -> 3, >= 30% -> 2, else 1.
pub fn suggest_rating(goal_status: &GoalStatusMap, active_goals: &[Goal]) -> u8 {
    if active_goals.is_empty() {
        return 3;
    }

    let completed = active_goals
        .iter()
        .filter(|goal| goal_status.is_completed(goal))
        .count();
    let rate = completed as f64 / active_goals.len() as f64;

    if rate >= 0.9 {
        5
    } else if rate >= 0.7 {
        4
    } else if rate >= 0.5 {
        3
    } else if rate >= 0.3 {
        2
    } else {
        1
    }
}
