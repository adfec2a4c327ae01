use super::motivation_model::QuoteStats;

/// Current streak (inclusive) at which the fallback praises consistency.
pub const CONSISTENCY_STREAK: u32 = 7;

/// Deterministic quote used whenever the generator is unavailable.
pub fn rule_based_quote(stats: &QuoteStats) -> &'static str {
    if stats.current_streak >= CONSISTENCY_STREAK {
        "Consistency is starting to feel natural — that’s progress."
    } else if stats.streak_broken_today {
        "A break doesn’t erase the effort you’ve already made."
    } else {
        "Show up today. That’s enough."
    }
}
