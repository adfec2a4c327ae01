#[cfg(test)]
mod tests {
    use crate::expenses::{Expense, ExpenseCategory};
    use crate::insights::{compute_money_aggregates, BudgetOptions};
    use chrono::{NaiveDate, NaiveDateTime};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn ts() -> NaiveDateTime {
        d(2024, 1, 1).and_hms_opt(0, 0, 0).unwrap()
    }

    fn expense(
        date: NaiveDate,
        amount: Decimal,
        category: ExpenseCategory,
        note: Option<&str>,
    ) -> Expense {
        Expense {
            id: format!("x-{}-{}", date, amount),
            user_id: "u1".to_string(),
            name: "spend".to_string(),
            amount,
            date,
            category,
            note: note.map(str::to_string),
            created_at: ts(),
        }
    }

    fn budget(amount: Decimal, day: u32) -> BudgetOptions {
        BudgetOptions {
            monthly_budget: Some(amount),
            pocket_money_day: Some(day),
        }
    }

    #[test]
    fn test_empty_expenses() {
        let report = compute_money_aggregates(&[], None, d(2024, 1, 10));

        assert_eq!(report.total_spent, Decimal::ZERO);
        assert_eq!(report.avg_daily_spend, Decimal::ZERO);
        assert_eq!(report.max_daily_spend, Decimal::ZERO);
        assert_eq!(report.min_daily_spend, Decimal::ZERO);
        assert_eq!(report.total_transactions, 0);
        assert_eq!(report.note_usage_rate, 0.0);
        assert!(report.top_category.is_none());
        assert!(report.category_breakdown.is_empty());
        assert!(report.spend_heatmap.is_empty());
        assert_eq!(report.last7_days_trend.len(), 7);
        assert!(report.budget_insights.is_none());
    }

    #[test]
    fn test_silent_spends_and_note_usage() {
        let day = d(2024, 1, 1);
        let expenses = vec![
            expense(day, dec!(100), ExpenseCategory::Food, Some("")),
            expense(day, dec!(50), ExpenseCategory::Food, Some("lunch")),
        ];

        let report = compute_money_aggregates(&expenses, None, d(2024, 1, 3));

        assert_eq!(report.total_spent, dec!(150));
        assert_eq!(report.silent_spends.count, 1);
        assert_eq!(report.silent_spends.total_amount, dec!(100));
        assert_eq!(report.note_usage_rate, 0.5);
        assert_eq!(report.max_single_expense, dec!(100));
        assert_eq!(report.total_transactions, 2);
    }

    #[test]
    fn test_average_over_days_with_spend_without_cycle() {
        let expenses = vec![
            expense(d(2024, 1, 1), dec!(100), ExpenseCategory::Food, None),
            expense(d(2024, 1, 1), dec!(20), ExpenseCategory::Food, None),
            expense(d(2024, 1, 5), dec!(60), ExpenseCategory::Transport, None),
        ];

        let report = compute_money_aggregates(&expenses, None, d(2024, 1, 7));

        assert_eq!(report.avg_daily_spend, dec!(90));
        assert_eq!(report.max_daily_spend, dec!(120));
        assert_eq!(report.min_daily_spend, dec!(60));
        assert_eq!(report.projection_spend.base_amount, dec!(90));
        assert_eq!(report.projection_spend.projected_amount, dec!(2700));
    }

    #[test]
    fn test_budget_only_option_keeps_spend_day_average() {
        let expenses = vec![expense(d(2024, 1, 9), dec!(100), ExpenseCategory::Food, None)];
        let options = BudgetOptions {
            monthly_budget: Some(dec!(3000)),
            pocket_money_day: None,
        };

        let report = compute_money_aggregates(&expenses, Some(&options), d(2024, 1, 10));
        assert!(report.budget_insights.is_none());
        assert_eq!(report.avg_daily_spend, dec!(100));

        let day_only = BudgetOptions {
            monthly_budget: None,
            pocket_money_day: Some(5),
        };
        let report = compute_money_aggregates(&expenses, Some(&day_only), d(2024, 1, 10));
        assert!(report.budget_insights.is_none());
    }

    #[test]
    fn test_budget_cycle_scenario() {
        let expenses = vec![
            expense(d(2024, 3, 5), dec!(400), ExpenseCategory::Essentials, Some("rent share")),
            expense(d(2024, 3, 8), dec!(600), ExpenseCategory::Food, None),
        ];

        let report =
            compute_money_aggregates(&expenses, Some(&budget(dec!(3000), 5)), d(2024, 3, 10));
        let b = report.budget_insights.unwrap();

        assert_eq!(b.cycle_start, d(2024, 3, 5));
        assert_eq!(b.days_passed, 6);
        assert_eq!(b.remaining_days, 24);
        assert_eq!(b.remaining_budget, dec!(2000));
        assert_eq!(b.budget_used_percent, 33);
        assert_eq!(b.safe_daily_spend, dec!(83));
        assert!(!b.is_over_budget);

        // Averaged over the whole elapsed cycle, quiet days included
        assert_eq!(report.projection_spend.base_amount, dec!(167));
        assert_eq!(report.projection_spend.projected_amount, dec!(5000));
    }

    #[test]
    fn test_over_budget_is_signed() {
        let expenses = vec![expense(d(2024, 3, 6), dec!(3500), ExpenseCategory::Shopping, None)];

        let report =
            compute_money_aggregates(&expenses, Some(&budget(dec!(3000), 5)), d(2024, 3, 10));
        let b = report.budget_insights.unwrap();

        assert_eq!(b.remaining_budget, dec!(-500));
        assert_eq!(b.remaining_budget, b.monthly_budget - report.total_spent);
        assert!(b.is_over_budget);
        assert_eq!(b.budget_used_percent, 117);
    }

    #[test]
    fn test_safe_daily_spend_zero_when_cycle_exhausted() {
        let expenses = vec![expense(d(2024, 1, 20), dec!(100), ExpenseCategory::Food, None)];

        // Jan 1 -> Jan 31 is 31 days, beyond the 30-day logical cycle
        let report =
            compute_money_aggregates(&expenses, Some(&budget(dec!(3000), 1)), d(2024, 1, 31));
        let b = report.budget_insights.unwrap();

        assert_eq!(b.days_passed, 31);
        assert_eq!(b.remaining_days, 0);
        assert_eq!(b.safe_daily_spend, Decimal::ZERO);
    }

    #[test]
    fn test_category_breakdown_sorted_with_stable_ties() {
        let day = d(2024, 1, 2);
        let expenses = vec![
            expense(day, dec!(50), ExpenseCategory::Transport, None),
            expense(day, dec!(50), ExpenseCategory::Health, None),
            expense(day, dec!(100), ExpenseCategory::Food, None),
        ];

        let report = compute_money_aggregates(&expenses, None, day);
        let order: Vec<ExpenseCategory> = report
            .category_breakdown
            .iter()
            .map(|c| c.category)
            .collect();

        assert_eq!(
            order,
            vec![ExpenseCategory::Food, ExpenseCategory::Transport, ExpenseCategory::Health]
        );
        assert_eq!(report.category_breakdown[0].percent, 50);
        assert_eq!(report.category_breakdown[1].percent, 25);
        assert_eq!(report.top_category.unwrap().category, ExpenseCategory::Food);
    }

    #[test]
    fn test_heatmap_in_date_order_relative_to_average() {
        let expenses = vec![
            expense(d(2024, 1, 3), dec!(200), ExpenseCategory::Food, None),
            expense(d(2024, 1, 1), dec!(40), ExpenseCategory::Food, None),
            expense(d(2024, 1, 2), dec!(60), ExpenseCategory::Food, None),
        ];

        // average 100 per spend day
        let report = compute_money_aggregates(&expenses, None, d(2024, 1, 3));
        let cells: Vec<(NaiveDate, u8)> = report
            .spend_heatmap
            .iter()
            .map(|c| (c.date, c.intensity))
            .collect();

        assert_eq!(
            cells,
            vec![(d(2024, 1, 1), 1), (d(2024, 1, 2), 1), (d(2024, 1, 3), 3)]
        );
    }

    #[test]
    fn test_last_seven_days_trend_zero_filled() {
        let today = d(2024, 3, 1);
        let expenses = vec![
            expense(d(2024, 2, 24), dec!(999), ExpenseCategory::Other, None),
            expense(d(2024, 2, 25), dec!(10), ExpenseCategory::Other, None),
            expense(today, dec!(30), ExpenseCategory::Other, None),
        ];

        let report = compute_money_aggregates(&expenses, None, today);
        let amounts: Vec<Decimal> = report.last7_days_trend.iter().map(|t| t.amount).collect();

        assert_eq!(report.last7_days_trend[0].date, d(2024, 2, 24));
        assert_eq!(
            amounts,
            vec![dec!(999), dec!(10), dec!(0), dec!(0), dec!(0), dec!(0), dec!(30)]
        );
    }
}
