use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};

use super::motivation_model::{QuoteStats, UserQuote};
use super::motivation_traits::{
    MotivationServiceTrait, QuoteCacheRepositoryTrait, QuoteGeneratorTrait,
};
use super::quote_fallback::rule_based_quote;
use crate::constants::{OVERALL_STREAK_ID, QUOTE_RATING_WINDOW};
use crate::entries::EntryRepositoryTrait;
use crate::errors::{Error, Result};
use crate::streaks::StreakRepositoryTrait;
use crate::utils::Calendar;

/// Produces one motivational quote per user per day.
///
/// The generator call is bounded by `quote_timeout`; any failure or timeout
/// falls back to [`rule_based_quote`], so refreshing never fails because of
/// the generator.
pub struct MotivationService {
    entry_repo: Arc<dyn EntryRepositoryTrait>,
    streak_repo: Arc<dyn StreakRepositoryTrait>,
    quote_repo: Arc<dyn QuoteCacheRepositoryTrait>,
    generator: Arc<dyn QuoteGeneratorTrait>,
    calendar: Calendar,
    quote_timeout: Duration,
}

impl MotivationService {
    pub fn new(
        entry_repo: Arc<dyn EntryRepositoryTrait>,
        streak_repo: Arc<dyn StreakRepositoryTrait>,
        quote_repo: Arc<dyn QuoteCacheRepositoryTrait>,
        generator: Arc<dyn QuoteGeneratorTrait>,
        calendar: Calendar,
        quote_timeout: Duration,
    ) -> Self {
        Self {
            entry_repo,
            streak_repo,
            quote_repo,
            generator,
            calendar,
            quote_timeout,
        }
    }

    async fn write_quote(&self, stats: &QuoteStats) -> String {
        let attempt = tokio::time::timeout(self.quote_timeout, self.generator.generate_quote(stats));
        match attempt.await {
            Ok(Ok(quote)) if !quote.trim().is_empty() => quote.trim().to_string(),
            Ok(Ok(_)) => {
                warn!("Quote generator returned an empty quote, using fallback");
                rule_based_quote(stats).to_string()
            }
            Ok(Err(e)) => {
                warn!("Quote generation failed, using fallback: {}", e);
                rule_based_quote(stats).to_string()
            }
            Err(_) => {
                warn!(
                    "Quote generation timed out after {} ms, using fallback",
                    self.quote_timeout.as_millis()
                );
                rule_based_quote(stats).to_string()
            }
        }
    }
}

#[async_trait]
impl MotivationServiceTrait for MotivationService {
    fn get_quote_stats(&self, user_id: &str) -> Result<QuoteStats> {
        let today = self.calendar.today();
        let overall = self.streak_repo.get_streak(user_id, OVERALL_STREAK_ID)?;
        let today_entry = self.entry_repo.get_entry_by_date(user_id, today)?;
        let recent = self
            .entry_repo
            .list_recent_entries(user_id, QUOTE_RATING_WINDOW)?;

        Ok(QuoteStats::collect(
            overall.as_ref(),
            today_entry.as_ref(),
            &recent,
        ))
    }

    async fn refresh_daily_quote(&self, user_id: &str) -> Result<String> {
        if user_id.trim().is_empty() {
            return Err(Error::missing_field("user_id"));
        }

        let today = self.calendar.today();
        if let Some(cached) = self
            .quote_repo
            .get_quote(user_id)?
            .filter(|q| q.is_for(today))
        {
            debug!("Quote for {} already generated on {}", user_id, today);
            return Ok(cached.quote);
        }

        let stats = self.get_quote_stats(user_id)?;
        let quote = self.write_quote(&stats).await;

        let stored = self
            .quote_repo
            .upsert_quote(UserQuote {
                user_id: user_id.to_string(),
                quote,
                last_updated: today,
            })
            .await?;
        Ok(stored.quote)
    }

    fn get_today_quote(&self, user_id: &str) -> Result<Option<String>> {
        let today = self.calendar.today();
        Ok(self
            .quote_repo
            .get_quote(user_id)?
            .filter(|q| q.is_for(today))
            .map(|q| q.quote))
    }
}
