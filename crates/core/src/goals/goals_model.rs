//! Goals domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::entries::GoalStatusValue;

/// How a goal's daily status is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalKind {
    /// Done / not done
    Boolean,
    /// A measured quantity compared against `target_value`
    Numeric,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum GoalCategory {
    Fitness,
    Study,
    Health,
    #[default]
    Discipline,
    Work,
    Social,
}

pub const DEFAULT_GOAL_ICON: &str = "🎯";

/// Domain model representing a tracked goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub user_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: GoalKind,
    pub target_value: Option<f64>,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub category: GoalCategory,
    pub icon: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

impl Goal {
    /// Whether a recorded status meets this goal.
    ///
    /// Boolean goals need exactly `true`; numeric goals need a value at or
    /// above the target (a missing target counts as 0). A value of the wrong
    /// kind never completes the goal.
    pub fn is_completed_by(&self, value: GoalStatusValue) -> bool {
        match (self.kind, value) {
            (GoalKind::Boolean, GoalStatusValue::Boolean(done)) => done,
            (GoalKind::Numeric, GoalStatusValue::Numeric(amount)) => {
                amount >= self.target_value.unwrap_or(0.0)
            }
            _ => false,
        }
    }
}

/// Input model for creating a new goal
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: GoalKind,
    pub target_value: Option<f64>,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub category: GoalCategory,
    pub icon: Option<String>,
}

/// Input model for updating a goal
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct GoalUpdate {
    pub name: Option<String>,
    pub target_value: Option<f64>,
    pub unit: Option<String>,
    pub category: Option<GoalCategory>,
    pub icon: Option<String>,
    pub is_active: Option<bool>,
}
