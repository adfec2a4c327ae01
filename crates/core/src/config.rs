//! Runtime configuration for the core services.

use std::str::FromStr;
use std::time::Duration;

use chrono_tz::Tz;
use log::warn;

use crate::constants::{DEFAULT_CURRENCY_SYMBOL, DEFAULT_QUOTE_TIMEOUT_MS};
use crate::errors::{Error, Result};
use crate::utils::DEFAULT_CIVIL_TZ;

pub const TIMEZONE_ENV: &str = "COMMITDAILY_TIMEZONE";
pub const CURRENCY_SYMBOL_ENV: &str = "COMMITDAILY_CURRENCY_SYMBOL";
pub const QUOTE_TIMEOUT_ENV: &str = "COMMITDAILY_QUOTE_TIMEOUT_MS";

/// Configuration shared by the services.
#[derive(Debug, Clone, PartialEq)]
pub struct CoreConfig {
    /// Timezone anchoring every civil-date boundary (default: Asia/Kolkata)
    pub timezone: Tz,

    /// Symbol prefixed to amounts in money insights (default: ₹)
    pub currency_symbol: String,

    /// Upper bound on the external quote generator call (default: 4000 ms)
    pub quote_timeout_ms: u64,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_CIVIL_TZ,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            quote_timeout_ms: DEFAULT_QUOTE_TIMEOUT_MS,
        }
    }
}

impl CoreConfig {
    /// Builds the configuration from defaults overridden by environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(tz) = lookup(TIMEZONE_ENV) {
            config.timezone = Tz::from_str(tz.trim()).map_err(|e| {
                Error::InvalidConfigValue(format!("{}='{}': {}", TIMEZONE_ENV, tz, e))
            })?;
        }

        if let Some(symbol) = lookup(CURRENCY_SYMBOL_ENV) {
            config.currency_symbol = symbol;
        }

        if let Some(raw) = lookup(QUOTE_TIMEOUT_ENV) {
            config.quote_timeout_ms = raw.trim().parse().map_err(|_| {
                Error::InvalidConfigValue(format!("{}='{}' is not a number", QUOTE_TIMEOUT_ENV, raw))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.quote_timeout_ms == 0 {
            return Err(Error::InvalidConfigValue(
                "quote timeout must be greater than zero".to_string(),
            ));
        }
        if self.currency_symbol.trim().is_empty() {
            warn!("Currency symbol is blank; money insights will show bare amounts");
        }
        Ok(())
    }

    pub fn quote_timeout(&self) -> Duration {
        Duration::from_millis(self.quote_timeout_ms)
    }
}
