//! Expenses module - spend transactions and calendar-month rollups.

mod expenses_model;
mod expenses_service;
mod expenses_traits;


pub use expenses_model::{
    DailySpend, Expense, ExpenseCategory, MonthlySpendSummary, NewExpense, TodaySpend,
};
pub use expenses_service::ExpenseService;
pub use expenses_traits::{ExpenseRepositoryTrait, ExpenseServiceTrait};
