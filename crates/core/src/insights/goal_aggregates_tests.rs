#[cfg(test)]
mod tests {
    use crate::entries::{DailyEntry, GoalStatusMap, GoalStatusValue};
    use crate::goals::{Goal, GoalCategory, GoalKind};
    use crate::insights::{compute_goal_aggregates, DisciplineTrend, GoalAggregateReport};
    use crate::streaks::StreakRecord;
    use chrono::{Duration, NaiveDate, NaiveDateTime};

    use GoalStatusValue::{Boolean, Numeric};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn ts() -> NaiveDateTime {
        d(2024, 1, 1).and_hms_opt(0, 0, 0).unwrap()
    }

    fn goal(id: &str, kind: GoalKind, target: Option<f64>) -> Goal {
        Goal {
            id: id.to_string(),
            user_id: "u1".to_string(),
            name: format!("Goal {}", id),
            kind,
            target_value: target,
            unit: String::new(),
            category: GoalCategory::Fitness,
            icon: "🏃".to_string(),
            is_active: true,
            created_at: ts(),
        }
    }

    fn entry(date: NaiveDate, statuses: &[(&str, GoalStatusValue)]) -> DailyEntry {
        DailyEntry {
            id: format!("e-{}", date),
            user_id: "u1".to_string(),
            date,
            goal_status: statuses
                .iter()
                .map(|(id, v)| (id.to_string(), *v))
                .collect::<GoalStatusMap>(),
            rating: 3,
            suggested_rating: None,
            notes: "done".to_string(),
            created_at: ts(),
            updated_at: ts(),
        }
    }

    fn streak(goal_id: &str, current: u32, best: u32) -> StreakRecord {
        StreakRecord {
            current_streak: current,
            best_streak: best,
            ..StreakRecord::zero("u1", goal_id, ts())
        }
    }

    fn three_goals() -> Vec<Goal> {
        vec![
            goal("gym", GoalKind::Boolean, None),
            goal("read", GoalKind::Boolean, None),
            goal("water", GoalKind::Numeric, Some(3.0)),
        ]
    }

    #[test]
    fn test_no_active_goals_yields_empty_report() {
        let mut inactive = goal("gym", GoalKind::Boolean, None);
        inactive.is_active = false;
        let today = d(2024, 3, 10);
        let entries = vec![entry(today, &[("gym", Boolean(true))])];
        let streaks = vec![streak("gym", 3, 3), streak("overall", 3, 3)];

        for goals in [vec![], vec![inactive]] {
            let report = compute_goal_aggregates(&goals, &entries, &streaks, today);
            assert_eq!(report, GoalAggregateReport::empty());
            assert_eq!(report.discipline_trend, DisciplineTrend::Stable);
            assert!(report.last7_days_completion.is_empty());
            assert!(report.longest_streak_goal.is_none());
        }
    }

    #[test]
    fn test_week_of_fully_met_goals() {
        let goals = three_goals();
        let today = d(2024, 3, 7);
        let entries: Vec<DailyEntry> = (1..=7)
            .map(|day| {
                entry(
                    d(2024, 3, day),
                    &[("gym", Boolean(true)), ("read", Boolean(true)), ("water", Numeric(3.0))],
                )
            })
            .collect();

        let report = compute_goal_aggregates(&goals, &entries, &[], today);

        assert_eq!(report.completion_rate, 100);
        assert_eq!(report.discipline_trend, DisciplineTrend::Stable);
        assert_eq!(report.monthly_stats.perfect_days, 7);
        assert_eq!(report.monthly_stats.total_days, 7);
        assert_eq!(report.monthly_stats.goals_completed, 21);
        assert_eq!(report.monthly_stats.monthly_completion_rate, 100);
        assert_eq!(report.monthly_stats.average_goals_per_day, 3.0);
        assert!(report.last7_days_completion.iter().all(|d| d.completion == 100));
        assert!(report.daily_goals_completed.iter().all(|d| d.count == 3));
        assert!(report
            .last7_days_goal_progress
            .iter()
            .all(|g| g.weekly_completion == 100));
    }

    #[test]
    fn test_unattempted_and_mismatched_statuses() {
        let goals = three_goals();
        let today = d(2024, 3, 10);
        let entries = vec![entry(
            today,
            &[
                ("gym", Boolean(true)),
                // wrong kind: attempted, never completed
                ("water", Boolean(true)),
                // references no goal
                ("ghost", Boolean(true)),
            ],
        )];

        let report = compute_goal_aggregates(&goals, &entries, &[], today);

        assert_eq!(report.completion_rate, 50);
        let water = report
            .goal_wise_stats
            .iter()
            .find(|s| s.goal_id == "water")
            .unwrap();
        assert_eq!(water.attempts, 1);
        assert_eq!(water.completed, 0);
        let read = report
            .goal_wise_stats
            .iter()
            .find(|s| s.goal_id == "read")
            .unwrap();
        assert_eq!(read.attempts, 0);
        assert_eq!(read.completion_rate, 0);
        assert_eq!(report.monthly_stats.goals_attempted, 2);
    }

    #[test]
    fn test_numeric_goal_without_target_uses_zero() {
        let goals = vec![goal("steps", GoalKind::Numeric, None)];
        let today = d(2024, 3, 10);
        let entries = vec![entry(today, &[("steps", Numeric(0.0))])];

        let report = compute_goal_aggregates(&goals, &entries, &[], today);
        assert_eq!(report.completion_rate, 100);
    }

    #[test]
    fn test_completion_rate_zero_without_attempts() {
        let goals = three_goals();
        let today = d(2024, 3, 10);
        let entries = vec![entry(today, &[]), entry(d(2024, 3, 9), &[])];

        let report = compute_goal_aggregates(&goals, &entries, &[], today);
        assert_eq!(report.completion_rate, 0);
        assert_eq!(report.monthly_stats.total_days, 2);
        assert_eq!(report.monthly_stats.perfect_days, 0);
        assert_eq!(report.monthly_stats.monthly_completion_rate, 0);
        assert_eq!(report.discipline_trend, DisciplineTrend::Stable);
    }

    #[test]
    fn test_perfect_days_require_every_attempt_completed() {
        let goals = three_goals();
        let today = d(2024, 3, 10);
        let entries = vec![
            // only one goal attempted, and met
            entry(d(2024, 3, 8), &[("gym", Boolean(true))]),
            // one of two attempts missed
            entry(d(2024, 3, 9), &[("gym", Boolean(true)), ("read", Boolean(false))]),
            // nothing attempted
            entry(today, &[]),
        ];

        let report = compute_goal_aggregates(&goals, &entries, &[], today);
        assert_eq!(report.monthly_stats.perfect_days, 1);
        assert_eq!(report.monthly_stats.total_days, 3);
        assert_eq!(report.monthly_stats.goals_completed, 2);
        // 2 completed over 3 logged days
        assert_eq!(report.monthly_stats.average_goals_per_day, 0.7);
    }

    #[test]
    fn test_monthly_stats_only_cover_current_month() {
        let goals = three_goals();
        let today = d(2024, 3, 2);
        let entries = vec![
            entry(d(2024, 2, 28), &[("gym", Boolean(true))]),
            entry(d(2024, 2, 29), &[("gym", Boolean(true))]),
            entry(d(2024, 3, 1), &[("gym", Boolean(false))]),
        ];

        let report = compute_goal_aggregates(&goals, &entries, &[], today);
        assert_eq!(report.monthly_stats.total_days, 1);
        assert_eq!(report.monthly_stats.goals_attempted, 1);
        assert_eq!(report.monthly_stats.goals_completed, 0);
        // Whole history still feeds the overall rate
        assert_eq!(report.completion_rate, 67);
    }

    #[test]
    fn test_trend_compares_last_three_days_in_date_order() {
        let goals = vec![goal("gym", GoalKind::Boolean, None), goal("read", GoalKind::Boolean, None)];
        let today = d(2024, 3, 10);
        // Supplied out of order on purpose
        let improving = vec![
            entry(d(2024, 3, 10), &[("gym", Boolean(true)), ("read", Boolean(true))]),
            entry(d(2024, 3, 8), &[("gym", Boolean(false)), ("read", Boolean(false))]),
            entry(d(2024, 3, 9), &[("gym", Boolean(true)), ("read", Boolean(false))]),
        ];
        let report = compute_goal_aggregates(&goals, &improving, &[], today);
        assert_eq!(report.discipline_trend, DisciplineTrend::Improving);

        let declining = vec![
            entry(d(2024, 3, 7), &[("gym", Boolean(false))]),
            entry(d(2024, 3, 8), &[("gym", Boolean(true))]),
            entry(d(2024, 3, 9), &[("gym", Boolean(true))]),
            entry(d(2024, 3, 10), &[("gym", Boolean(false))]),
        ];
        let report = compute_goal_aggregates(&goals, &declining, &[], today);
        assert_eq!(report.discipline_trend, DisciplineTrend::Declining);

        // Days with nothing attempted are not part of the series
        let two_days = vec![
            entry(d(2024, 3, 8), &[("gym", Boolean(false))]),
            entry(d(2024, 3, 9), &[]),
            entry(d(2024, 3, 10), &[("gym", Boolean(true))]),
        ];
        let report = compute_goal_aggregates(&goals, &two_days, &[], today);
        assert_eq!(report.discipline_trend, DisciplineTrend::Stable);
    }

    #[test]
    fn test_streak_summaries_skip_overall_and_dangling_records() {
        let goals = three_goals();
        let today = d(2024, 3, 10);
        let streaks = vec![
            streak("overall", 0, 50),
            streak("ghost", 0, 99),
            streak("gym", 4, 9),
            streak("read", 2, 9),
            streak("water", 2, 3),
        ];

        let report = compute_goal_aggregates(&goals, &[], &streaks, today);

        let longest = report.longest_streak_goal.unwrap();
        assert_eq!(longest.goal_id, "gym");
        let weakest = report.weakest_streak_goal.unwrap();
        assert_eq!(weakest.goal_id, "read");

        let gym = &report.goal_wise_stats[0];
        assert_eq!((gym.current_streak, gym.best_streak), (4, 9));
    }

    #[test]
    fn test_no_goal_streaks_means_no_summaries() {
        let goals = three_goals();
        let report = compute_goal_aggregates(&goals, &[], &[streak("overall", 5, 5)], d(2024, 3, 10));
        assert!(report.longest_streak_goal.is_none());
        assert!(report.weakest_streak_goal.is_none());
    }

    #[test]
    fn test_trailing_window_is_zero_filled_and_oldest_first() {
        let goals = vec![goal("gym", GoalKind::Boolean, None), goal("read", GoalKind::Boolean, None)];
        let today = d(2024, 3, 10);
        let entries = vec![
            entry(today - Duration::days(9), &[("gym", Boolean(true))]),
            entry(today - Duration::days(6), &[("gym", Boolean(true)), ("read", Boolean(false))]),
            entry(today - Duration::days(1), &[("gym", Boolean(true))]),
            entry(today, &[("gym", Boolean(true)), ("read", Boolean(true))]),
        ];

        let report = compute_goal_aggregates(&goals, &entries, &[], today);

        let completion: Vec<u32> = report.last7_days_completion.iter().map(|d| d.completion).collect();
        assert_eq!(completion, vec![50, 0, 0, 0, 0, 100, 100]);
        assert_eq!(report.last7_days_completion[0].date, d(2024, 3, 4));
        assert_eq!(report.last7_days_completion[6].date, today);

        let counts: Vec<u32> = report.daily_goals_completed.iter().map(|d| d.count).collect();
        assert_eq!(counts, vec![1, 0, 0, 0, 0, 1, 2]);

        let gym = &report.last7_days_goal_progress[0];
        assert_eq!(gym.goal_id, "gym");
        assert_eq!(gym.progress_data.iter().map(|p| p.completed).collect::<Vec<_>>(), vec![1, 0, 0, 0, 0, 1, 1]);
        // 3 of 7 days
        assert_eq!(gym.weekly_completion, 43);
        assert_eq!(report.last7_days_goal_progress[1].weekly_completion, 14);
    }
}
