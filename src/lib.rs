pub mod api;
pub mod auth;
pub mod config;
pub mod constants;
pub mod core;
pub mod infrastructure;
pub mod recommender;

pub use crate::core::errors::SkillPathError;
pub use crate::core::services::SkillPathService;
pub use crate::infrastructure::cache::in_memory::InMemoryCache;
pub use crate::infrastructure::logging::in_memory::InMemoryLogging;
pub use crate::infrastructure::storage::in_memory::InMemoryStorage;
pub use crate::recommender::{Profile, Recommender};

#[cfg(test)]
mod tests; // Include integration tests
