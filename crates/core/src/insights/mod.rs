//! Insights module - aggregate engines, narration and read orchestration.

mod aggregates_model;
mod analytics;
mod goal_aggregates;
mod goal_insights;
mod insights_model;
mod insights_service;
mod insights_traits;
mod money_aggregates;
mod money_insights;

#[cfg(test)]
mod goal_aggregates_tests;
#[cfg(test)]
mod money_aggregates_tests;

pub use aggregates_model::{
    BudgetInsights, BudgetOptions, CategorySpend, DailyCompletion, DailyGoalCount,
    DisciplineTrend, GoalAggregateReport, GoalDayProgress, GoalWeeklyProgress, GoalWiseStat,
    MoneyAggregateReport, MonthlyStats, SilentSpends, SpendHeatCell, SpendProjection,
};
pub use analytics::{compute_analytics_overview, AnalyticsOverview, GoalCompletionRate};
pub use goal_aggregates::compute_goal_aggregates;
pub use goal_insights::{
    generate_goal_insights, BEAST_MODE_RATE, CHAMPION_STREAK, STRONG_RATE, WARNING_RATE,
    WEAK_STREAK,
};
pub use insights_model::{
    Confidence, GoalCharts, GoalInsightsMeta, GoalInsightsResponse, Insight, InsightBuilder,
    InsightDomain, InsightPeriod, InsightSeverity, InsightType, MoneyCharts, MoneyInsightsMeta,
    MoneyInsightsResponse,
};
pub use insights_service::{InsightsRepositories, InsightsService};
pub use insights_traits::InsightsServiceTrait;
pub use money_aggregates::compute_money_aggregates;
pub use money_insights::{
    generate_money_insights, BUDGET_WARNING_PERCENT, CATEGORY_DOMINANCE_PERCENT,
};
