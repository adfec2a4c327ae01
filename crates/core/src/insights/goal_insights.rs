//! Narration of goal aggregates into an ordered list of insights.

use super::aggregates_model::{DisciplineTrend, GoalAggregateReport, GoalWiseStat};
use super::insights_model::{
    Confidence, Insight, InsightBuilder, InsightDomain, InsightSeverity, InsightType,
};
use crate::goals::Goal;

/// Completion rate (inclusive) for top-tier praise.
pub const BEAST_MODE_RATE: u32 = 90;
/// Completion rate (inclusive) for positive feedback.
pub const STRONG_RATE: u32 = 75;
/// Completion rate (inclusive) below which feedback turns negative.
pub const WARNING_RATE: u32 = 50;
/// Per-goal completion rate (inclusive) that reads as positive.
pub const SOLID_GOAL_RATE: u32 = 70;
/// Perfect days in a month that earn praise.
pub const PERFECT_DAYS_PRAISE: u32 = 5;
/// Logged days after which zero perfect days is called out.
pub const PERFECT_DAYS_GRACE: u32 = 7;
/// Best streak (inclusive) that makes the strongest habit a champion.
pub const CHAMPION_STREAK: u32 = 7;
/// Current streak below which the weakest habit gets an alert.
pub const WEAK_STREAK: u32 = 3;

fn insight(kind: InsightType, id: impl Into<String>, title: impl Into<String>) -> InsightBuilder {
    Insight::builder(InsightDomain::Goals, kind, id, title)
}

fn goal_name<'a>(goals: &'a [Goal], goal_id: &str) -> &'a str {
    goals
        .iter()
        .find(|g| g.id == goal_id)
        .map(|g| g.name.as_str())
        .unwrap_or("Unknown")
}

fn completion_tier(rate: u32) -> Insight {
    if rate >= BEAST_MODE_RATE {
        insight(InsightType::Reflection, "completion_compliment", "🔥 Absolute beast mode!")
            .context(format!("{}% completion rate. You're crushing it!", rate))
            .severity(InsightSeverity::Positive)
            .build()
    } else if rate >= STRONG_RATE {
        insight(InsightType::Reflection, "completion_compliment", "💪 Strong consistency!")
            .context(format!("{}% completion. Keep this momentum going!", rate))
            .severity(InsightSeverity::Positive)
            .build()
    } else if rate >= WARNING_RATE {
        insight(InsightType::Alert, "completion_warning", "⚠️ You can do better")
            .context(format!("{}% completion. Time to step up your game.", rate))
            .severity(InsightSeverity::Warning)
            .build()
    } else {
        insight(InsightType::Alert, "completion_insult", "😬 This is embarrassing")
            .context(format!("{}% completion rate? Are you even trying?", rate))
            .severity(InsightSeverity::Negative)
            .build()
    }
}

fn trend_insight(trend: DisciplineTrend) -> Insight {
    let builder = match trend {
        DisciplineTrend::Improving => {
            insight(InsightType::Reflection, "discipline_trend", "📈 On the rise!")
                .context("Your consistency is improving. Keep it up!")
                .severity(InsightSeverity::Positive)
        }
        DisciplineTrend::Declining => insight(InsightType::Alert, "discipline_trend", "📉 Slipping away")
            .context("Your discipline is declining. Get back on track!")
            .severity(InsightSeverity::Negative),
        DisciplineTrend::Stable => {
            insight(InsightType::Reflection, "discipline_trend", "➡️ Staying steady")
                .context("Consistency maintained. Can you push harder?")
                .severity(InsightSeverity::Neutral)
        }
    };
    builder.confidence(Confidence::Medium).build()
}

fn goal_stat_insight(stat: &GoalWiseStat) -> Insight {
    let severity = if stat.completion_rate >= SOLID_GOAL_RATE {
        InsightSeverity::Positive
    } else if stat.completion_rate >= WARNING_RATE {
        InsightSeverity::Warning
    } else {
        InsightSeverity::Negative
    };

    insight(
        InsightType::Reflection,
        format!("goal_stat_{}", stat.goal_id),
        format!("{} {}", stat.goal_emoji, stat.goal_name),
    )
    .value(format!("{}%", stat.completion_rate))
    .context(format!(
        "{}/{} completed | {}🔥 streak",
        stat.completed, stat.attempts, stat.current_streak
    ))
    .severity(severity)
    .build()
}

/// Maps a goal aggregate report to insights: headline stats, feedback
/// (completion tier, perfect days, trend, streaks), per-goal reflections,
/// then chart visuals.
pub fn generate_goal_insights(report: &GoalAggregateReport, goals: &[Goal]) -> Vec<Insight> {
    let monthly = &report.monthly_stats;
    let mut insights = vec![
        insight(InsightType::Stat, "goal_completion_rate", "Overall completion rate")
            .value(format!("{}%", report.completion_rate))
            .context("All tracked goals")
            .build(),
        insight(InsightType::Stat, "monthly_completion_rate", "This month's performance")
            .value(format!("{}%", monthly.monthly_completion_rate))
            .context(format!(
                "{}/{} goals completed",
                monthly.goals_completed, monthly.goals_attempted
            ))
            .build(),
        insight(InsightType::Stat, "perfect_days", "Perfect days")
            .value(monthly.perfect_days.to_string())
            .context("All goals completed")
            .build(),
        insight(InsightType::Stat, "average_goals_per_day", "Average goals/day")
            .value(format!("{:.1}", monthly.average_goals_per_day))
            .context("This month")
            .build(),
        completion_tier(report.completion_rate),
    ];

    if monthly.perfect_days >= PERFECT_DAYS_PRAISE {
        insights.push(
            insight(InsightType::Reflection, "perfect_days_compliment", "⭐ Perfectionist vibes")
                .context(format!(
                    "{} perfect days this month! Legendary!",
                    monthly.perfect_days
                ))
                .severity(InsightSeverity::Positive)
                .build(),
        );
    } else if monthly.perfect_days == 0 && monthly.total_days >= PERFECT_DAYS_GRACE {
        insights.push(
            insight(InsightType::Alert, "perfect_days_insult", "😤 Not even one perfect day?")
                .context("Come on, you can do better than this.")
                .severity(InsightSeverity::Negative)
                .build(),
        );
    }

    insights.push(trend_insight(report.discipline_trend));

    if let Some(strongest) = &report.longest_streak_goal {
        let name = goal_name(goals, &strongest.goal_id);
        let strongest_insight = if strongest.best_streak >= CHAMPION_STREAK {
            insight(InsightType::Reflection, "strongest_goal", "🏆 Champion habit")
                .value(name)
                .context(format!(
                    "{} day streak! This is your superpower!",
                    strongest.best_streak
                ))
                .severity(InsightSeverity::Positive)
        } else {
            insight(InsightType::Reflection, "strongest_goal", "💎 Best habit")
                .value(name)
                .context(format!("{} day streak", strongest.best_streak))
        };
        insights.push(strongest_insight.build());
    }

    if let Some(weakest) = report
        .weakest_streak_goal
        .as_ref()
        .filter(|s| s.current_streak < WEAK_STREAK)
    {
        insights.push(
            insight(InsightType::Alert, "weakest_goal", "🚨 Wake up call")
                .value(goal_name(goals, &weakest.goal_id))
                .context(format!(
                    "Only {} day streak. This needs work!",
                    weakest.current_streak
                ))
                .severity(InsightSeverity::Negative)
                .confidence(Confidence::Medium)
                .build(),
        );
    }

    insights.extend(
        report
            .goal_wise_stats
            .iter()
            .filter(|stat| goals.iter().any(|g| g.id == stat.goal_id))
            .map(goal_stat_insight),
    );

    insights.push(
        insight(InsightType::Visual, "last_7_days_goals", "Last 7 days completion %")
            .data(&report.last7_days_completion)
            .build(),
    );
    insights.push(
        insight(InsightType::Visual, "daily_goals_completed", "Daily goals completed")
            .data(&report.daily_goals_completed)
            .build(),
    );
    insights.extend(report.last7_days_goal_progress.iter().map(|progress| {
        insight(
            InsightType::Visual,
            format!("goal_7day_{}", progress.goal_id),
            format!("{} - Last 7 days", progress.goal_name),
        )
        .data(&progress.progress_data)
        .context(format!("{}% this week", progress.weekly_completion))
        .build()
    }));

    insights
}
