//! Insight records produced by the narration layer.

use chrono::NaiveDate;
use log::warn;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::aggregates_model::{
    BudgetInsights, CategorySpend, DailyCompletion, DailyGoalCount, DisciplineTrend,
    GoalWeeklyProgress, GoalWiseStat, MonthlyStats, SilentSpends, SpendHeatCell, SpendProjection,
};
use crate::expenses::DailySpend;

/// Which part of the application an insight talks about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightDomain {
    Goals,
    Money,
}

/// How an insight is presented. Stats lead, visuals close the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightType {
    Stat,
    Alert,
    Reflection,
    Projection,
    Visual,
}

/// Tone of an insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightSeverity {
    Positive,
    Neutral,
    Warning,
    Negative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    #[default]
    High,
    Medium,
    Low,
}

/// A typed, human-readable statement about a user's aggregates.
///
/// The position of an insight in its list is meaningful to consumers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    /// Stable identifier, e.g. `total_spent` or `goal_stat_<goal id>`
    pub id: String,
    pub domain: InsightDomain,
    #[serde(rename = "type")]
    pub kind: InsightType,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<InsightSeverity>,
    pub confidence: Confidence,
    /// Chart payload for visual insights
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl Insight {
    /// Starts an insight with its required fields; confidence defaults to high.
    pub fn builder(
        domain: InsightDomain,
        kind: InsightType,
        id: impl Into<String>,
        title: impl Into<String>,
    ) -> InsightBuilder {
        InsightBuilder {
            insight: Insight {
                id: id.into(),
                domain,
                kind,
                title: title.into(),
                value: None,
                context: None,
                severity: None,
                confidence: Confidence::default(),
                data: None,
            },
        }
    }
}

/// Builder for constructing Insight instances.
#[derive(Debug)]
pub struct InsightBuilder {
    insight: Insight,
}

impl InsightBuilder {
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.insight.value = Some(value.into());
        self
    }

    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.insight.context = Some(context.into());
        self
    }

    pub fn severity(mut self, severity: InsightSeverity) -> Self {
        self.insight.severity = Some(severity);
        self
    }

    pub fn confidence(mut self, confidence: Confidence) -> Self {
        self.insight.confidence = confidence;
        self
    }

    /// Attaches a serialized chart payload. A payload that fails to
    /// serialize is dropped with a warning.
    pub fn data<T: Serialize + ?Sized>(mut self, data: &T) -> Self {
        match serde_json::to_value(data) {
            Ok(value) => self.insight.data = Some(value),
            Err(e) => warn!("Dropping chart data for insight '{}': {}", self.insight.id, e),
        }
        self
    }

    pub fn build(self) -> Insight {
        self.insight
    }
}

// =============================================================================
// Responses
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalCharts {
    pub last7_days_completion: Vec<DailyCompletion>,
    pub daily_goals_completed: Vec<DailyGoalCount>,
    pub last7_days_goal_progress: Vec<GoalWeeklyProgress>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalInsightsMeta {
    pub total_goals: u32,
    pub active_goals: u32,
    pub completion_rate: u32,
    pub discipline_trend: DisciplineTrend,
    pub monthly_stats: MonthlyStats,
}

/// Goal insights together with the chart series and headline numbers
/// they were narrated from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalInsightsResponse {
    pub insights: Vec<Insight>,
    pub charts: GoalCharts,
    pub meta: GoalInsightsMeta,
    pub goal_wise_stats: Vec<GoalWiseStat>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MoneyCharts {
    pub category_breakdown: Vec<CategorySpend>,
    pub last7_days_trend: Vec<DailySpend>,
    pub spend_heatmap: Vec<SpendHeatCell>,
}

/// Inclusive date range the money insights cover.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InsightPeriod {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MoneyInsightsMeta {
    pub period: InsightPeriod,
    pub pocket_money_day: u32,
    pub monthly_budget: Option<Decimal>,
    pub budget_insights: Option<BudgetInsights>,
    pub total_spent: Decimal,
    /// Rounded to a whole amount
    pub avg_daily_spend: Decimal,
    pub projection: SpendProjection,
    pub silent_spends: SilentSpends,
    pub total_transactions: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MoneyInsightsResponse {
    pub insights: Vec<Insight>,
    pub charts: MoneyCharts,
    pub meta: MoneyInsightsMeta,
}
