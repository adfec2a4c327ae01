//! Motivational quote generation over an OpenAI-compatible chat API.
//!
//! One short sentence is requested from the configured model, written from
//! the user's streak facts. The reply is cleaned and rejected when empty or
//! longer than the word limit; callers fall back to a rule-based quote.

use std::time::Duration;

use async_trait::async_trait;
use commitdaily_core::motivation::{QuoteGeneratorTrait, QuoteStats};
use commitdaily_core::Result as CoreResult;
use log::debug;
use reqwest::{header, Client as HttpClient};
use serde::{Deserialize, Serialize};

use crate::error::AiError;

pub const API_KEY_ENV: &str = "HF_TOKEN";
pub const BASE_URL_ENV: &str = "COMMITDAILY_QUOTE_BASE_URL";
pub const MODEL_ENV: &str = "COMMITDAILY_QUOTE_MODEL";

const SYSTEM_PROMPT: &str = "You generate short motivational quotes for a discipline app.

ABSOLUTE RULES (must follow):
- Output EXACTLY ONE sentence.
- Max 15 words.
- No emojis.
- Do not use generic quotes, make it specific to the user's situation.
- Mention the user's current streak and best streak in a positive light.
- No sympathy or comfort language.
- Do NOT mention failure, recovery, restart, or \"getting back on track\"
  UNLESS explicitly told that the streak was broken.
- Do NOT invent problems.
- Do NOT interpret emotions.
- Focus only on the factual state provided.

If rules are violated, the output is invalid.";

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for quote generation.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteGeneratorConfig {
    /// Base URL of the OpenAI-compatible API, without `/chat/completions`.
    pub base_url: String,
    pub model: String,
    pub api_key: Option<String>,
    /// Max tokens to generate for the quote.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f32,
    /// Replies with more words are rejected.
    pub max_words: usize,
    /// HTTP request timeout.
    pub request_timeout_ms: u64,
}

impl Default for QuoteGeneratorConfig {
    fn default() -> Self {
        Self {
            base_url: "https://router.huggingface.co/v1".to_string(),
            model: "meta-llama/Llama-3.2-1B-Instruct:novita".to_string(),
            api_key: None,
            max_tokens: 60,
            temperature: 0.7,
            max_words: 15,
            request_timeout_ms: 10_000,
        }
    }
}

impl QuoteGeneratorConfig {
    /// Defaults overridden by `HF_TOKEN`, `COMMITDAILY_QUOTE_BASE_URL` and
    /// `COMMITDAILY_QUOTE_MODEL`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();
        if let Some(url) = non_blank(BASE_URL_ENV) {
            config.base_url = url.trim().trim_end_matches('/').to_string();
        }
        if let Some(model) = non_blank(MODEL_ENV) {
            config.model = model.trim().to_string();
        }
        config.api_key = non_blank(API_KEY_ENV);
        config
    }
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: MessageResponse,
}

#[derive(Debug, Deserialize)]
struct MessageResponse {
    content: Option<String>,
}

// ============================================================================
// Quote Generator
// ============================================================================

/// Quote generator backed by an OpenAI-compatible `/chat/completions` endpoint.
pub struct QuoteGenerator {
    client: HttpClient,
    config: QuoteGeneratorConfig,
}

impl QuoteGenerator {
    pub fn new(config: QuoteGeneratorConfig) -> Result<Self, AiError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = HttpClient::builder()
            .default_headers(headers)
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|e| AiError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }

    async fn request_quote(&self, stats: &QuoteStats) -> Result<String, AiError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| AiError::MissingApiKey(self.config.base_url.clone()))?;

        let body = ChatRequest {
            model: &self.config.model,
            messages: build_messages(stats),
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        debug!("Requesting quote from model {}", self.config.model);

        let response = self
            .client
            .post(self.chat_completions_url())
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AiError::Timeout(self.config.request_timeout_ms)
                } else {
                    AiError::from(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(AiError::provider(format!("{}: {}", status, detail.trim())));
        }

        let reply: ChatResponse = response.json().await?;
        let raw = reply
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| AiError::invalid_response("no choices in reply"))?;

        validate_quote(&raw, self.config.max_words)
    }
}

#[async_trait]
impl QuoteGeneratorTrait for QuoteGenerator {
    async fn generate_quote(&self, stats: &QuoteStats) -> CoreResult<String> {
        Ok(self.request_quote(stats).await?)
    }
}

// ============================================================================
// Utility Functions
// ============================================================================

/// The system and user messages for one quote request.
fn build_messages(stats: &QuoteStats) -> Vec<ChatMessage> {
    let user = format!(
        "FACTS (do not reinterpret):
- Current streak length: {}
- Best streak length: {}
- Streak broken today: {}
- Average rating (7 days): {:.1}

TASK:
Generate ONE short motivational sentence.
If the streak was not broken today, you MUST NOT mention:
- recovery
- restart
- failure
- fixing anything
- getting back on track
Talk to the user directly about their progress.",
        stats.current_streak,
        stats.best_streak,
        stats.streak_broken_today,
        stats.avg_rating_last7_days
    );

    vec![
        ChatMessage {
            role: "system",
            content: SYSTEM_PROMPT.to_string(),
        },
        ChatMessage {
            role: "user",
            content: user,
        },
    ]
}

/// Strips wrappers models like to add: leading blank lines, a `Quote:`
/// prefix, markdown emphasis and surrounding quotes.
pub fn clean_generated_quote(raw: &str) -> String {
    let mut quote = raw
        .lines()
        .find(|line| !line.trim().is_empty())
        .unwrap_or(raw)
        .trim()
        .to_string();

    if let Some(rest) = quote
        .strip_prefix("Quote:")
        .or_else(|| quote.strip_prefix("quote:"))
    {
        quote = rest.trim().to_string();
    }

    quote = quote
        .trim_matches(|c: char| matches!(c, '*' | '_' | '`' | '"' | '\'' | '“' | '”'))
        .trim()
        .to_string();

    // Collapse whitespace.
    quote.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Cleans a reply and enforces the word limit.
pub fn validate_quote(raw: &str, max_words: usize) -> Result<String, AiError> {
    let quote = clean_generated_quote(raw);
    let words = quote.split_whitespace().count();
    if words == 0 {
        return Err(AiError::invalid_response("empty quote"));
    }
    if words > max_words {
        return Err(AiError::invalid_response(format!(
            "quote has {} words, limit is {}",
            words, max_words
        )));
    }
    Ok(quote)
}

// ============================================================================
// Fake Generator for Testing
// ============================================================================

/// A fake quote generator that returns a fixed quote or always fails.
pub struct FakeQuoteGenerator {
    /// Fixed quote to return, or None to fail every call.
    pub fixed_quote: Option<String>,
}

impl FakeQuoteGenerator {
    pub fn with_quote(quote: &str) -> Self {
        Self {
            fixed_quote: Some(quote.to_string()),
        }
    }

    pub fn failing() -> Self {
        Self { fixed_quote: None }
    }
}

#[async_trait]
impl QuoteGeneratorTrait for FakeQuoteGenerator {
    async fn generate_quote(&self, _stats: &QuoteStats) -> CoreResult<String> {
        match &self.fixed_quote {
            Some(quote) => Ok(quote.clone()),
            None => Err(AiError::provider("fake generator has no quote").into()),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
