use async_trait::async_trait;

use super::motivation_model::{QuoteStats, UserQuote};
use crate::errors::Result;

/// External writer of motivational quotes (typically an LLM).
#[async_trait]
pub trait QuoteGeneratorTrait: Send + Sync {
    /// Returns one short sentence written from the given stats.
    async fn generate_quote(&self, stats: &QuoteStats) -> Result<String>;
}

/// Persistence for the per-user daily quote.
#[async_trait]
pub trait QuoteCacheRepositoryTrait: Send + Sync {
    fn get_quote(&self, user_id: &str) -> Result<Option<UserQuote>>;
    /// Inserts or replaces the user's single quote record.
    async fn upsert_quote(&self, quote: UserQuote) -> Result<UserQuote>;
}

#[async_trait]
pub trait MotivationServiceTrait: Send + Sync {
    fn get_quote_stats(&self, user_id: &str) -> Result<QuoteStats>;

    /// Returns today's quote, generating and caching it when missing or stale.
    async fn refresh_daily_quote(&self, user_id: &str) -> Result<String>;

    /// Today's cached quote, if one was generated already.
    fn get_today_quote(&self, user_id: &str) -> Result<Option<String>>;
}
