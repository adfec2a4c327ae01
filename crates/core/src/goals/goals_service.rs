use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use uuid::Uuid;

use super::goals_model::{Goal, GoalKind, GoalUpdate, NewGoal, DEFAULT_GOAL_ICON};
use super::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
use crate::errors::{DatabaseError, Error, Result};
use crate::utils::Calendar;

pub struct GoalService {
    goal_repo: Arc<dyn GoalRepositoryTrait>,
    calendar: Calendar,
}

impl GoalService {
    pub fn new(goal_repo: Arc<dyn GoalRepositoryTrait>, calendar: Calendar) -> Self {
        GoalService {
            goal_repo,
            calendar,
        }
    }

    fn validate_name(name: &str) -> Result<String> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(Error::missing_field("name"));
        }
        Ok(trimmed.to_string())
    }

    fn validate_target(kind: GoalKind, target_value: Option<f64>) -> Result<()> {
        if kind == GoalKind::Numeric {
            match target_value {
                Some(target) if target.is_finite() && target > 0.0 => {}
                Some(target) => {
                    return Err(Error::invalid_input(format!(
                        "Numeric goal target must be a positive number, got {}",
                        target
                    )))
                }
                None => return Err(Error::missing_field("targetValue")),
            }
        }
        Ok(())
    }

    fn require_goal(&self, user_id: &str, goal_id: &str) -> Result<Goal> {
        self.goal_repo
            .get_goal(user_id, goal_id)?
            .ok_or_else(|| Error::Database(DatabaseError::NotFound(format!("Goal {}", goal_id))))
    }
}

#[async_trait]
impl GoalServiceTrait for GoalService {
    fn get_goals(&self, user_id: &str) -> Result<Vec<Goal>> {
        self.goal_repo.load_goals(user_id)
    }

    fn get_active_goals(&self, user_id: &str) -> Result<Vec<Goal>> {
        Ok(self
            .goal_repo
            .load_goals(user_id)?
            .into_iter()
            .filter(|g| g.is_active)
            .collect())
    }

    async fn create_goal(&self, user_id: &str, new_goal: NewGoal) -> Result<Goal> {
        let name = Self::validate_name(&new_goal.name)?;
        Self::validate_target(new_goal.kind, new_goal.target_value)?;

        let goal = Goal {
            id: new_goal.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            user_id: user_id.to_string(),
            name,
            kind: new_goal.kind,
            // Boolean goals never carry a target
            target_value: match new_goal.kind {
                GoalKind::Numeric => new_goal.target_value,
                GoalKind::Boolean => None,
            },
            unit: new_goal.unit.trim().to_string(),
            category: new_goal.category,
            icon: new_goal
                .icon
                .filter(|icon| !icon.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_GOAL_ICON.to_string()),
            is_active: true,
            created_at: self.calendar.now(),
        };

        debug!("Creating goal '{}' for user {}", goal.name, user_id);
        self.goal_repo.insert_goal(goal).await
    }

    async fn update_goal(&self, user_id: &str, goal_id: &str, update: GoalUpdate) -> Result<Goal> {
        let mut goal = self.require_goal(user_id, goal_id)?;

        if let Some(name) = update.name {
            goal.name = Self::validate_name(&name)?;
        }
        if update.target_value.is_some() {
            Self::validate_target(goal.kind, update.target_value)?;
            if goal.kind == GoalKind::Numeric {
                goal.target_value = update.target_value;
            }
        }
        if let Some(unit) = update.unit {
            goal.unit = unit.trim().to_string();
        }
        if let Some(category) = update.category {
            goal.category = category;
        }
        if let Some(icon) = update.icon.filter(|i| !i.trim().is_empty()) {
            goal.icon = icon;
        }
        if let Some(is_active) = update.is_active {
            goal.is_active = is_active;
        }

        self.goal_repo.update_goal(goal).await
    }

    async fn deactivate_goal(&self, user_id: &str, goal_id: &str) -> Result<Goal> {
        let mut goal = self.require_goal(user_id, goal_id)?;
        goal.is_active = false;
        self.goal_repo.update_goal(goal).await
    }

    async fn delete_goal(&self, user_id: &str, goal_id: &str) -> Result<usize> {
        // Entries and streak records keep the id; aggregation skips it from now on
        self.goal_repo.delete_goal(user_id, goal_id).await
    }
}
