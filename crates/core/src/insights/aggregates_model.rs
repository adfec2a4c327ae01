//! Aggregate reports consumed by the narration layer and returned as chart
//! data.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::expenses::{DailySpend, ExpenseCategory};
use crate::streaks::StreakRecord;

// =============================================================================
// Goals
// =============================================================================

/// Coarse direction of the per-day completion series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DisciplineTrend {
    Improving,
    Declining,
    #[default]
    Stable,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyCompletion {
    pub date: NaiveDate,
    /// Percentage of attempted goals completed that day
    pub completion: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyGoalCount {
    pub date: NaiveDate,
    pub count: u32,
}

/// One goal's outcome on one day: 1 when completed, 0 otherwise.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalDayProgress {
    pub date: NaiveDate,
    pub completed: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalWeeklyProgress {
    pub goal_id: String,
    pub goal_name: String,
    pub goal_emoji: String,
    pub progress_data: Vec<GoalDayProgress>,
    pub weekly_completion: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalWiseStat {
    pub goal_id: String,
    pub goal_name: String,
    pub goal_emoji: String,
    pub completion_rate: u32,
    pub completed: u32,
    pub attempts: u32,
    pub current_streak: u32,
    pub best_streak: u32,
}

/// Rollup over the current calendar month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyStats {
    pub total_days: u32,
    pub goals_completed: u32,
    pub goals_attempted: u32,
    pub perfect_days: u32,
    /// Rounded to one decimal
    pub average_goals_per_day: f64,
    pub monthly_completion_rate: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct GoalAggregateReport {
    pub total_goals: u32,
    pub active_goals: u32,
    pub completion_rate: u32,
    /// Goal streak with the highest best streak
    pub longest_streak_goal: Option<StreakRecord>,
    /// Goal streak with the lowest current streak
    pub weakest_streak_goal: Option<StreakRecord>,
    pub last7_days_completion: Vec<DailyCompletion>,
    pub last7_days_goal_progress: Vec<GoalWeeklyProgress>,
    pub discipline_trend: DisciplineTrend,
    pub goal_wise_stats: Vec<GoalWiseStat>,
    pub monthly_stats: MonthlyStats,
    pub daily_goals_completed: Vec<DailyGoalCount>,
}

impl GoalAggregateReport {
    /// The fixed report returned when a user has no active goals.
    pub fn empty() -> Self {
        Self::default()
    }
}

// =============================================================================
// Money
// =============================================================================

/// Spend cycle parameters taken from the user's profile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct BudgetOptions {
    pub monthly_budget: Option<Decimal>,
    pub pocket_money_day: Option<u32>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategorySpend {
    pub category: ExpenseCategory,
    pub amount: Decimal,
    /// Share of the total, rounded
    pub percent: i64,
}

/// Spend intensity of a day relative to the average daily spend (1-3).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SpendHeatCell {
    pub date: NaiveDate,
    pub total: Decimal,
    pub intensity: u8,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SilentSpends {
    pub count: u32,
    pub total_amount: Decimal,
}

/// Flat 30-day extrapolation of the average daily spend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SpendProjection {
    pub base_amount: Decimal,
    pub projected_amount: Decimal,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetInsights {
    pub monthly_budget: Decimal,
    pub total_spent: Decimal,
    pub cycle_start: NaiveDate,
    pub days_passed: i64,
    pub remaining_days: i64,
    /// Signed; negative once the budget is exceeded
    pub remaining_budget: Decimal,
    pub budget_used_percent: i64,
    pub safe_daily_spend: Decimal,
    pub is_over_budget: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MoneyAggregateReport {
    pub total_spent: Decimal,
    pub avg_daily_spend: Decimal,
    pub max_daily_spend: Decimal,
    pub min_daily_spend: Decimal,
    pub max_single_expense: Decimal,
    pub total_transactions: u32,
    /// Fraction (0-1) of expenses carrying a note
    pub note_usage_rate: f64,
    /// Largest amount first
    pub category_breakdown: Vec<CategorySpend>,
    pub last7_days_trend: Vec<DailySpend>,
    pub top_category: Option<CategorySpend>,
    pub silent_spends: SilentSpends,
    pub projection_spend: SpendProjection,
    /// Days with spend, oldest first
    pub spend_heatmap: Vec<SpendHeatCell>,
    pub budget_insights: Option<BudgetInsights>,
}
