//! Motivation domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::{OVERALL_SUCCESS_RATING, QUOTE_RATING_WINDOW};
use crate::entries::DailyEntry;
use crate::streaks::StreakRecord;
use crate::utils::round_to_tenth;

/// The small set of facts a motivational quote is written from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct QuoteStats {
    pub current_streak: u32,
    pub best_streak: u32,
    /// Today's entry exists and its rating breaks the overall streak
    pub streak_broken_today: bool,
    /// Mean rating of the most recent entries, one decimal
    pub avg_rating_last7_days: f64,
}

impl QuoteStats {
    /// Collects stats from the overall streak record, today's entry and the
    /// most recent entries (newest first). Only the first seven recent
    /// entries are averaged.
    pub fn collect(
        overall: Option<&StreakRecord>,
        today_entry: Option<&DailyEntry>,
        recent: &[DailyEntry],
    ) -> Self {
        let window = &recent[..recent.len().min(QUOTE_RATING_WINDOW)];
        let avg_rating_last7_days = if window.is_empty() {
            0.0
        } else {
            let sum: u32 = window.iter().map(|e| e.rating as u32).sum();
            round_to_tenth(sum as f64 / window.len() as f64)
        };

        Self {
            current_streak: overall.map(|s| s.current_streak).unwrap_or(0),
            best_streak: overall.map(|s| s.best_streak).unwrap_or(0),
            streak_broken_today: today_entry
                .map(|e| e.rating < OVERALL_SUCCESS_RATING)
                .unwrap_or(false),
            avg_rating_last7_days,
        }
    }
}

/// The cached quote of one user; at most one per user, refreshed daily.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserQuote {
    pub user_id: String,
    pub quote: String,
    /// Civil date the quote was generated for
    pub last_updated: NaiveDate,
}

impl UserQuote {
    pub fn is_for(&self, date: NaiveDate) -> bool {
        self.last_updated == date
    }
}
