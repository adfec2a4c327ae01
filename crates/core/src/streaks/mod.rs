//! Streaks module - continuity counters per goal and for the day overall.

mod streaks_engine;
mod streaks_model;
mod streaks_traits;

pub use streaks_engine::apply_streak_transition;
pub use streaks_model::{StreakEntity, StreakRecord};
pub use streaks_traits::StreakRepositoryTrait;
