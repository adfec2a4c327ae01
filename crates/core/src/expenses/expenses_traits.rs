use async_trait::async_trait;
use chrono::NaiveDate;

use super::expenses_model::{Expense, MonthlySpendSummary, NewExpense, TodaySpend};
use crate::errors::Result;

/// Trait defining the contract for expense persistence.
#[async_trait]
pub trait ExpenseRepositoryTrait: Send + Sync {
    /// Expenses dated within `[start, end]`, both ends inclusive.
    fn list_expenses_between(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Expense>>;

    async fn insert_expense(&self, expense: Expense) -> Result<Expense>;

    /// Returns the number of deleted rows.
    async fn delete_expense(&self, user_id: &str, expense_id: &str) -> Result<usize>;
}

/// Trait defining the contract for expense service operations.
#[async_trait]
pub trait ExpenseServiceTrait: Send + Sync {
    async fn add_expense(&self, user_id: &str, new_expense: NewExpense) -> Result<Expense>;

    /// Newest first.
    fn list_expenses(&self, user_id: &str, start: NaiveDate, end: NaiveDate)
        -> Result<Vec<Expense>>;

    fn get_today_total(&self, user_id: &str) -> Result<TodaySpend>;

    fn get_monthly_summary(&self, user_id: &str, year: i32, month: u32)
        -> Result<MonthlySpendSummary>;

    async fn delete_expense(&self, user_id: &str, expense_id: &str) -> Result<()>;
}
