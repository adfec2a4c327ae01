//! Entries module - one committed log per user per calendar day.

mod entries_model;
mod entries_service;
mod entries_traits;


pub use entries_model::{
    suggest_rating, CommitOutcome, DailyEntry, GoalStatusMap, GoalStatusValue, NewDailyEntry,
};
pub use entries_service::EntryService;
pub use entries_traits::{EntryRepositoryTrait, EntryServiceTrait};
