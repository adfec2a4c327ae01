//! Expense domain models.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum ExpenseCategory {
    Food,
    Transport,
    Entertainment,
    Essentials,
    Health,
    Shopping,
    #[default]
    Other,
}

impl ExpenseCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::Food => "Food",
            ExpenseCategory::Transport => "Transport",
            ExpenseCategory::Entertainment => "Entertainment",
            ExpenseCategory::Essentials => "Essentials",
            ExpenseCategory::Health => "Health",
            ExpenseCategory::Shopping => "Shopping",
            ExpenseCategory::Other => "Other",
        }
    }
}

impl std::fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Domain model representing a single spend transaction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    #[serde(default)]
    pub category: ExpenseCategory,
    pub note: Option<String>,
    pub created_at: NaiveDateTime,
}

impl Expense {
    /// Whether the expense carries a non-blank note. Expenses without one
    /// are "silent spends".
    pub fn has_note(&self) -> bool {
        self.note
            .as_deref()
            .map(|n| !n.trim().is_empty())
            .unwrap_or(false)
    }
}

/// Input model for recording an expense
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    pub name: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    #[serde(default)]
    pub category: ExpenseCategory,
    pub note: Option<String>,
}

/// Total spent on one civil date.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailySpend {
    pub date: NaiveDate,
    pub amount: Decimal,
}

/// Calendar-month spending rollup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySpendSummary {
    pub total_spent: Decimal,
    /// Averaged over days that had any spend
    pub avg_daily_spend: Decimal,
    pub by_category: BTreeMap<ExpenseCategory, Decimal>,
    /// Oldest first
    pub daily: Vec<DailySpend>,
}

/// Spend recorded on the current civil date.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TodaySpend {
    pub date: NaiveDate,
    pub total_spent: Decimal,
}
