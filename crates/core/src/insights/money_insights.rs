//! Narration of money aggregates into an ordered list of insights.

use rust_decimal::Decimal;

use super::aggregates_model::{BudgetInsights, MoneyAggregateReport};
use super::insights_model::{
    Confidence, Insight, InsightBuilder, InsightDomain, InsightSeverity, InsightType,
};
use crate::utils::round_amount;

/// Share of total spend (inclusive) at which one category dominates.
pub const CATEGORY_DOMINANCE_PERCENT: i64 = 60;
/// Budget usage (inclusive) that triggers the approaching-limit warning.
pub const BUDGET_WARNING_PERCENT: i64 = 80;
/// Budget usage (inclusive) treated as over budget.
pub const BUDGET_EXCEEDED_PERCENT: i64 = 100;

fn insight(kind: InsightType, id: &str, title: &str) -> InsightBuilder {
    Insight::builder(InsightDomain::Money, kind, id, title)
}

/// Formats an amount with the currency symbol, without trailing zeros.
fn money(symbol: &str, amount: Decimal) -> String {
    format!("{}{}", symbol, amount.normalize())
}

fn budget_block(budget: &BudgetInsights, symbol: &str) -> Vec<Insight> {
    let mut insights = vec![
        insight(InsightType::Stat, "budget_usage", "Budget used")
            .value(format!("{}%", budget.budget_used_percent))
            .context(format!(
                "{} of {}",
                money(symbol, budget.total_spent),
                money(symbol, budget.monthly_budget)
            ))
            .build(),
        insight(InsightType::Stat, "remaining_budget", "Remaining budget")
            .value(money(symbol, budget.remaining_budget))
            .context(format!("{} days left", budget.remaining_days))
            .build(),
        insight(InsightType::Reflection, "safe_daily_spend", "Safe daily spend")
            .value(money(symbol, budget.safe_daily_spend))
            .context("To stay within budget")
            .confidence(Confidence::Medium)
            .build(),
    ];

    if budget.is_over_budget || budget.budget_used_percent >= BUDGET_EXCEEDED_PERCENT {
        let context = if budget.is_over_budget {
            format!(
                "Exceeded budget by {}",
                money(symbol, budget.remaining_budget.abs())
            )
        } else {
            "The whole budget is used up".to_string()
        };
        insights.push(
            insight(InsightType::Alert, "over_budget_alert", "You are over budget")
                .context(context)
                .severity(InsightSeverity::Negative)
                .build(),
        );
    } else if budget.budget_used_percent >= BUDGET_WARNING_PERCENT {
        insights.push(
            insight(InsightType::Alert, "budget_warning", "Approaching budget limit")
                .context(format!(
                    "{}% of budget used with {} days remaining",
                    budget.budget_used_percent, budget.remaining_days
                ))
                .severity(InsightSeverity::Warning)
                .build(),
        );
    }

    insights
}

/// Maps a money aggregate report to insights: headline stats, category
/// reflections, the budget block when configured, projection, silent
/// spending, then chart visuals.
pub fn generate_money_insights(report: &MoneyAggregateReport, currency_symbol: &str) -> Vec<Insight> {
    let symbol = currency_symbol;
    let mut insights = vec![
        insight(InsightType::Stat, "total_spent", "Total spent")
            .value(money(symbol, report.total_spent))
            .context("Current cycle")
            .build(),
        insight(InsightType::Stat, "avg_daily_spend", "Average daily spend")
            .value(money(symbol, round_amount(report.avg_daily_spend)))
            .build(),
    ];

    if let Some(top) = &report.top_category {
        insights.push(
            insight(InsightType::Reflection, "top_category", "Top spending category")
                .value(top.category.as_str())
                .context(format!("{} ({}%)", money(symbol, top.amount), top.percent))
                .build(),
        );

        if top.percent >= CATEGORY_DOMINANCE_PERCENT {
            insights.push(
                insight(
                    InsightType::Alert,
                    "category_dominance",
                    "One category dominates your spending",
                )
                .context(format!(
                    "{} accounts for {}% of expenses",
                    top.category, top.percent
                ))
                .severity(InsightSeverity::Negative)
                .build(),
            );
        }
    }

    if let Some(budget) = &report.budget_insights {
        insights.extend(budget_block(budget, symbol));
    }

    let projection = &report.projection_spend;
    insights.push(
        insight(InsightType::Projection, "projection_spend", "Projected monthly spend")
            .value(money(symbol, projection.projected_amount))
            .context(format!("Based on {}/day", money(symbol, projection.base_amount)))
            .confidence(Confidence::Medium)
            .build(),
    );

    let silent = &report.silent_spends;
    if silent.count > 0 {
        insights.push(
            insight(InsightType::Reflection, "silent_spends", "Silent spending detected")
                .context(format!(
                    "{} expenses without notes totaling {}",
                    silent.count,
                    money(symbol, silent.total_amount)
                ))
                .severity(InsightSeverity::Neutral)
                .confidence(Confidence::Medium)
                .build(),
        );
    }

    insights.push(
        insight(InsightType::Visual, "spend_heatmap", "Spending intensity by day")
            .data(&report.spend_heatmap)
            .build(),
    );
    insights.push(
        insight(InsightType::Visual, "category_breakdown", "Category-wise spending")
            .data(&report.category_breakdown)
            .build(),
    );
    insights.push(
        insight(InsightType::Visual, "last_7_days_trend", "Last 7 days spending trend")
            .data(&report.last7_days_trend)
            .build(),
    );

    insights
}
