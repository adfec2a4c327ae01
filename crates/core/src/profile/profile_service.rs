use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;

use super::profile_model::UserProfile;
use super::profile_traits::{ProfileRepositoryTrait, ProfileServiceTrait};
use crate::errors::{Error, Result};

pub struct ProfileService {
    profile_repo: Arc<dyn ProfileRepositoryTrait>,
}

impl ProfileService {
    pub fn new(profile_repo: Arc<dyn ProfileRepositoryTrait>) -> Self {
        Self { profile_repo }
    }
}

#[async_trait]
impl ProfileServiceTrait for ProfileService {
    fn get_profile(&self, user_id: &str) -> Result<UserProfile> {
        Ok(self
            .profile_repo
            .get_profile(user_id)?
            .unwrap_or_else(|| UserProfile::empty(user_id)))
    }

    async fn set_pocket_money_day(&self, user_id: &str, day: u32) -> Result<UserProfile> {
        if !(1..=31).contains(&day) {
            return Err(Error::invalid_input(
                "Pocket money day must be between 1 and 31",
            ));
        }

        let mut profile = self.get_profile(user_id)?;
        profile.pocket_money_day = Some(day);
        debug!("Pocket money day for {} set to {}", user_id, day);
        self.profile_repo.upsert_profile(profile).await
    }

    async fn set_monthly_budget(&self, user_id: &str, amount: Decimal) -> Result<UserProfile> {
        if amount <= Decimal::ZERO {
            return Err(Error::invalid_input(
                "Budget amount must be a positive number",
            ));
        }

        let mut profile = self.get_profile(user_id)?;
        profile.monthly_budget = Some(amount);
        self.profile_repo.upsert_profile(profile).await
    }
}
