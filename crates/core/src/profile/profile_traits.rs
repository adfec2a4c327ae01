use async_trait::async_trait;
use rust_decimal::Decimal;

use super::profile_model::UserProfile;
use crate::errors::Result;

#[async_trait]
pub trait ProfileRepositoryTrait: Send + Sync {
    fn get_profile(&self, user_id: &str) -> Result<Option<UserProfile>>;
    async fn upsert_profile(&self, profile: UserProfile) -> Result<UserProfile>;
}

#[async_trait]
pub trait ProfileServiceTrait: Send + Sync {
    /// The stored profile, or an empty one when nothing was configured yet.
    fn get_profile(&self, user_id: &str) -> Result<UserProfile>;
    async fn set_pocket_money_day(&self, user_id: &str, day: u32) -> Result<UserProfile>;
    async fn set_monthly_budget(&self, user_id: &str, amount: Decimal) -> Result<UserProfile>;
}
