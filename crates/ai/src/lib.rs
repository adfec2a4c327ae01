//! Commit Daily AI - motivational quote generation.
//!
//! Implements the core `QuoteGeneratorTrait` against an OpenAI-compatible
//! chat completions API. The core `MotivationService` owns timeouts and the
//! rule-based fallback; this crate only produces or rejects a quote.
//!
//! - `quote_generator`: HTTP client, prompt, reply cleanup and a fake generator
//! - `error`: `AiError` and its conversion into the core error type
//!
//! # Example
//!
//! ```ignore
//! use commitdaily_ai::{QuoteGenerator, QuoteGeneratorConfig};
//!
//! let generator = QuoteGenerator::new(QuoteGeneratorConfig::from_env())?;
//! let service = MotivationService::new(
//!     entries, streaks, quotes, Arc::new(generator), calendar, config.quote_timeout(),
//! );
//! let quote = service.refresh_daily_quote(&user_id).await?;
//! ```

pub mod error;
pub mod quote_generator;

pub use error::AiError;
pub use quote_generator::{
    clean_generated_quote, validate_quote, FakeQuoteGenerator, QuoteGenerator,
    QuoteGeneratorConfig,
};
