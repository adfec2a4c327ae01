//! Finance aggregates engine.
//!
//! Scans the expenses of one spend period into totals, category breakdown,
//! a 7-day trend, a spend-intensity heatmap, a flat 30-day projection and,
//! when the user configured both a budget and a pocket money day, budget
//! cycle insights.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::aggregates_model::{
    BudgetInsights, BudgetOptions, CategorySpend, MoneyAggregateReport, SilentSpends,
    SpendHeatCell, SpendProjection,
};
use crate::constants::{LOGICAL_CYCLE_DAYS, PROJECTION_DAYS, TRAILING_WINDOW_DAYS};
use crate::expenses::{DailySpend, Expense, ExpenseCategory};
use crate::utils::{amount_percent, cycle_start, days_between, round_amount, trailing_days};

/// Budget and anchor day, only when both are configured.
fn cycle_parameters(options: Option<&BudgetOptions>) -> Option<(Decimal, u32)> {
    let options = options?;
    Some((options.monthly_budget?, options.pocket_money_day?))
}

fn heat_intensity(total: Decimal, average: Decimal) -> u8 {
    if total > average * dec!(1.5) {
        3
    } else if total > average {
        2
    } else {
        1
    }
}

fn budget_insights(
    monthly_budget: Decimal,
    anchor_day: u32,
    total_spent: Decimal,
    today: NaiveDate,
) -> BudgetInsights {
    let start = cycle_start(anchor_day, today);
    let days_passed = days_between(start, today);
    let remaining_days = (LOGICAL_CYCLE_DAYS - days_passed).max(0);
    let remaining_budget = monthly_budget - total_spent;

    let safe_daily_spend = if remaining_days > 0 {
        round_amount(remaining_budget / Decimal::from(remaining_days))
    } else {
        Decimal::ZERO
    };

    BudgetInsights {
        monthly_budget,
        total_spent,
        cycle_start: start,
        days_passed,
        remaining_days,
        remaining_budget,
        budget_used_percent: amount_percent(total_spent, monthly_budget),
        safe_daily_spend,
        is_over_budget: remaining_budget < Decimal::ZERO,
    }
}

/// Computes the money aggregate report for the given expenses.
///
/// Without cycle options the average daily spend divides by the number of
/// days that had spending. With both a budget and a pocket money day it
/// divides by the full elapsed cycle length instead, so quiet days pull the
/// average down.
pub fn compute_money_aggregates(
    expenses: &[Expense],
    options: Option<&BudgetOptions>,
    today: NaiveDate,
) -> MoneyAggregateReport {
    let mut total_spent = Decimal::ZERO;
    let mut max_single_expense = Decimal::ZERO;
    let mut note_count = 0u32;
    let mut silent_spends = SilentSpends::default();
    let mut daily: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    // Insertion order keeps ties stable after sorting
    let mut by_category: Vec<(ExpenseCategory, Decimal)> = Vec::new();

    for expense in expenses {
        total_spent += expense.amount;
        max_single_expense = max_single_expense.max(expense.amount);
        *daily.entry(expense.date).or_default() += expense.amount;

        match by_category.iter_mut().find(|(c, _)| *c == expense.category) {
            Some((_, amount)) => *amount += expense.amount,
            None => by_category.push((expense.category, expense.amount)),
        }

        if expense.has_note() {
            note_count += 1;
        } else {
            silent_spends.count += 1;
            silent_spends.total_amount += expense.amount;
        }
    }

    let cycle = cycle_parameters(options);

    let avg_daily_spend = match cycle {
        Some((_, anchor_day)) => {
            let elapsed = days_between(cycle_start(anchor_day, today), today);
            total_spent / Decimal::from(elapsed)
        }
        None if !daily.is_empty() => total_spent / Decimal::from(daily.len()),
        None => Decimal::ZERO,
    };

    let max_daily_spend = daily.values().copied().max().unwrap_or(Decimal::ZERO);
    let min_daily_spend = daily.values().copied().min().unwrap_or(Decimal::ZERO);

    let mut category_breakdown: Vec<CategorySpend> = by_category
        .into_iter()
        .map(|(category, amount)| CategorySpend {
            category,
            amount,
            percent: amount_percent(amount, total_spent),
        })
        .collect();
    category_breakdown.sort_by(|a, b| b.amount.cmp(&a.amount));
    let top_category = category_breakdown.first().copied();

    let last7_days_trend = trailing_days(today, TRAILING_WINDOW_DAYS)
        .into_iter()
        .map(|date| DailySpend {
            date,
            amount: daily.get(&date).copied().unwrap_or(Decimal::ZERO),
        })
        .collect();

    let spend_heatmap = daily
        .iter()
        .map(|(date, total)| SpendHeatCell {
            date: *date,
            total: *total,
            intensity: heat_intensity(*total, avg_daily_spend),
        })
        .collect();

    let projection_spend = SpendProjection {
        base_amount: round_amount(avg_daily_spend),
        projected_amount: round_amount(avg_daily_spend * Decimal::from(PROJECTION_DAYS)),
    };

    let note_usage_rate = if expenses.is_empty() {
        0.0
    } else {
        note_count as f64 / expenses.len() as f64
    };

    MoneyAggregateReport {
        total_spent,
        avg_daily_spend,
        max_daily_spend,
        min_daily_spend,
        max_single_expense,
        total_transactions: expenses.len() as u32,
        note_usage_rate,
        category_breakdown,
        last7_days_trend,
        top_category,
        silent_spends,
        projection_spend,
        spend_heatmap,
        budget_insights: cycle
            .map(|(budget, anchor_day)| budget_insights(budget, anchor_day, total_spent, today)),
    }
}
