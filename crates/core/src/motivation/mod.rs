//! Motivation module - quote stats, deterministic fallback and the daily quote cache.

mod motivation_model;
mod motivation_service;
mod motivation_traits;
mod quote_fallback;


pub use motivation_model::{QuoteStats, UserQuote};
pub use motivation_service::MotivationService;
pub use motivation_traits::{
    MotivationServiceTrait, QuoteCacheRepositoryTrait, QuoteGeneratorTrait,
};
pub use quote_fallback::{rule_based_quote, CONSISTENCY_STREAK};
