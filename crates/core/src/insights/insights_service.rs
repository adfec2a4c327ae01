use std::sync::Arc;

use log::debug;

use super::aggregates_model::BudgetOptions;
use super::analytics::{compute_analytics_overview, AnalyticsOverview};
use super::goal_aggregates::compute_goal_aggregates;
use super::goal_insights::generate_goal_insights;
use super::insights_model::{
    GoalCharts, GoalInsightsMeta, GoalInsightsResponse, InsightPeriod, MoneyCharts,
    MoneyInsightsMeta, MoneyInsightsResponse,
};
use super::insights_traits::InsightsServiceTrait;
use super::money_aggregates::compute_money_aggregates;
use super::money_insights::generate_money_insights;
use crate::constants::ANALYTICS_ENTRY_LIMIT;
use crate::entries::EntryRepositoryTrait;
use crate::errors::{Error, Result};
use crate::expenses::ExpenseRepositoryTrait;
use crate::goals::GoalRepositoryTrait;
use crate::profile::ProfileRepositoryTrait;
use crate::streaks::StreakRepositoryTrait;
use crate::utils::{cycle_start, round_amount, Calendar};

/// Repositories the insights service reads from.
#[derive(Clone)]
pub struct InsightsRepositories {
    pub goals: Arc<dyn GoalRepositoryTrait>,
    pub entries: Arc<dyn EntryRepositoryTrait>,
    pub streaks: Arc<dyn StreakRepositoryTrait>,
    pub expenses: Arc<dyn ExpenseRepositoryTrait>,
    pub profiles: Arc<dyn ProfileRepositoryTrait>,
}

pub struct InsightsService {
    repos: InsightsRepositories,
    calendar: Calendar,
    currency_symbol: String,
}

impl InsightsService {
    pub fn new(
        repos: InsightsRepositories,
        calendar: Calendar,
        currency_symbol: impl Into<String>,
    ) -> Self {
        Self {
            repos,
            calendar,
            currency_symbol: currency_symbol.into(),
        }
    }
}

impl InsightsServiceTrait for InsightsService {
    fn get_goal_insights(&self, user_id: &str) -> Result<GoalInsightsResponse> {
        let goals = self.repos.goals.load_goals(user_id)?;
        let entries = self.repos.entries.list_entries(user_id)?;
        let streaks = self.repos.streaks.list_streaks(user_id)?;
        debug!(
            "Goal insights for {}: {} goals, {} entries, {} streaks",
            user_id,
            goals.len(),
            entries.len(),
            streaks.len()
        );

        let report = compute_goal_aggregates(&goals, &entries, &streaks, self.calendar.today());
        let insights = generate_goal_insights(&report, &goals);

        Ok(GoalInsightsResponse {
            insights,
            charts: GoalCharts {
                last7_days_completion: report.last7_days_completion,
                daily_goals_completed: report.daily_goals_completed,
                last7_days_goal_progress: report.last7_days_goal_progress,
            },
            meta: GoalInsightsMeta {
                total_goals: report.total_goals,
                active_goals: report.active_goals,
                completion_rate: report.completion_rate,
                discipline_trend: report.discipline_trend,
                monthly_stats: report.monthly_stats,
            },
            goal_wise_stats: report.goal_wise_stats,
        })
    }

    fn get_money_insights(&self, user_id: &str) -> Result<MoneyInsightsResponse> {
        let profile = self.repos.profiles.get_profile(user_id)?;
        let pocket_money_day = profile
            .as_ref()
            .and_then(|p| p.pocket_money_day)
            .ok_or_else(|| Error::invalid_input("Pocket money day not set"))?;
        let monthly_budget = profile.and_then(|p| p.monthly_budget);

        let today = self.calendar.today();
        let period = InsightPeriod {
            from: cycle_start(pocket_money_day, today),
            to: today,
        };
        let expenses =
            self.repos
                .expenses
                .list_expenses_between(user_id, period.from, period.to)?;
        debug!(
            "Money insights for {} over {}..={}: {} expenses",
            user_id,
            period.from,
            period.to,
            expenses.len()
        );

        let options = BudgetOptions {
            monthly_budget,
            pocket_money_day: Some(pocket_money_day),
        };
        let report = compute_money_aggregates(&expenses, Some(&options), today);
        let insights = generate_money_insights(&report, &self.currency_symbol);

        Ok(MoneyInsightsResponse {
            insights,
            meta: MoneyInsightsMeta {
                period,
                pocket_money_day,
                monthly_budget,
                budget_insights: report.budget_insights,
                total_spent: report.total_spent,
                avg_daily_spend: round_amount(report.avg_daily_spend),
                projection: report.projection_spend,
                silent_spends: report.silent_spends,
                total_transactions: report.total_transactions,
            },
            charts: MoneyCharts {
                category_breakdown: report.category_breakdown,
                last7_days_trend: report.last7_days_trend,
                spend_heatmap: report.spend_heatmap,
            },
        })
    }

    fn get_analytics_overview(&self, user_id: &str) -> Result<AnalyticsOverview> {
        let entries = self
            .repos
            .entries
            .list_recent_entries(user_id, ANALYTICS_ENTRY_LIMIT)?;
        let goals = self.repos.goals.load_goals(user_id)?;
        Ok(compute_analytics_overview(&entries, &goals))
    }
}
