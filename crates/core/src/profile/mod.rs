//! Profile module - per-user spend cycle settings.

mod profile_model;
mod profile_service;
mod profile_traits;

pub use profile_model::UserProfile;
pub use profile_service::ProfileService;
pub use profile_traits::{ProfileRepositoryTrait, ProfileServiceTrait};
