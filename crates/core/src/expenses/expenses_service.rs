use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::{debug, info};
use rust_decimal::Decimal;
use uuid::Uuid;

use super::expenses_model::{
    DailySpend, Expense, ExpenseCategory, MonthlySpendSummary, NewExpense, TodaySpend,
};
use super::expenses_traits::{ExpenseRepositoryTrait, ExpenseServiceTrait};
use crate::errors::{DatabaseError, Error, Result};
use crate::utils::{month_bounds, Calendar};

/// Service for recording and summarising expenses.
pub struct ExpenseService {
    expense_repo: Arc<dyn ExpenseRepositoryTrait>,
    calendar: Calendar,
}

impl ExpenseService {
    pub fn new(expense_repo: Arc<dyn ExpenseRepositoryTrait>, calendar: Calendar) -> Self {
        Self {
            expense_repo,
            calendar,
        }
    }
}

#[async_trait]
impl ExpenseServiceTrait for ExpenseService {
    async fn add_expense(&self, user_id: &str, new_expense: NewExpense) -> Result<Expense> {
        let name = new_expense.name.trim();
        if name.is_empty() {
            return Err(Error::missing_field("name"));
        }
        if new_expense.amount <= Decimal::ZERO {
            return Err(Error::invalid_input("Amount must be greater than 0"));
        }

        let note = new_expense
            .note
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());

        let expense = Expense {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            name: name.to_string(),
            amount: new_expense.amount,
            date: new_expense.date,
            category: new_expense.category,
            note,
            created_at: self.calendar.now(),
        };

        debug!(
            "Recording {} expense of {} on {} for {}",
            expense.category, expense.amount, expense.date, user_id
        );
        self.expense_repo.insert_expense(expense).await
    }

    fn list_expenses(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Expense>> {
        if start > end {
            return Err(Error::invalid_input(format!(
                "Start date {} is after end date {}",
                start, end
            )));
        }

        let mut expenses = self.expense_repo.list_expenses_between(user_id, start, end)?;
        expenses.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(expenses)
    }

    fn get_today_total(&self, user_id: &str) -> Result<TodaySpend> {
        let today = self.calendar.today();
        let total_spent = self
            .expense_repo
            .list_expenses_between(user_id, today, today)?
            .iter()
            .map(|e| e.amount)
            .sum();

        Ok(TodaySpend {
            date: today,
            total_spent,
        })
    }

    fn get_monthly_summary(
        &self,
        user_id: &str,
        year: i32,
        month: u32,
    ) -> Result<MonthlySpendSummary> {
        let (start, end) = month_bounds(year, month).ok_or_else(|| {
            Error::invalid_input(format!("Invalid month {}-{:02}", year, month))
        })?;

        let expenses = self.expense_repo.list_expenses_between(user_id, start, end)?;

        let mut total_spent = Decimal::ZERO;
        let mut by_category: BTreeMap<ExpenseCategory, Decimal> = BTreeMap::new();
        let mut daily: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();

        for expense in &expenses {
            total_spent += expense.amount;
            *by_category.entry(expense.category).or_default() += expense.amount;
            *daily.entry(expense.date).or_default() += expense.amount;
        }

        let avg_daily_spend = if daily.is_empty() {
            Decimal::ZERO
        } else {
            total_spent / Decimal::from(daily.len())
        };

        Ok(MonthlySpendSummary {
            total_spent,
            avg_daily_spend,
            by_category,
            daily: daily
                .into_iter()
                .map(|(date, amount)| DailySpend { date, amount })
                .collect(),
        })
    }

    async fn delete_expense(&self, user_id: &str, expense_id: &str) -> Result<()> {
        let deleted = self.expense_repo.delete_expense(user_id, expense_id).await?;
        if deleted == 0 {
            return Err(DatabaseError::NotFound(format!("Expense {}", expense_id)).into());
        }
        info!("Deleted expense {} for {}", expense_id, user_id);
        Ok(())
    }
}
