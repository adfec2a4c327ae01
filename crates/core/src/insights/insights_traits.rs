use super::analytics::AnalyticsOverview;
use super::insights_model::{GoalInsightsResponse, MoneyInsightsResponse};
use crate::errors::Result;

/// Read-side orchestration: fetch a user's records, aggregate, narrate.
pub trait InsightsServiceTrait: Send + Sync {
    fn get_goal_insights(&self, user_id: &str) -> Result<GoalInsightsResponse>;

    /// Fails with a validation error when no pocket money day is configured.
    fn get_money_insights(&self, user_id: &str) -> Result<MoneyInsightsResponse>;

    fn get_analytics_overview(&self, user_id: &str) -> Result<AnalyticsOverview>;
}
