use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-user settings that parameterize the spend cycle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_id: String,
    /// Recurring day-of-month (1-31) the spend cycle starts on
    pub pocket_money_day: Option<u32>,
    pub monthly_budget: Option<Decimal>,
}

impl UserProfile {
    pub fn empty(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            ..Default::default()
        }
    }
}
