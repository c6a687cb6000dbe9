pub mod cache_keys;
pub mod in_memory;

use crate::core::errors::SkillPathError;
use crate::core::models::skill_map::SkillMap;
use async_trait::async_trait;

/// Read-through cache for the skill-map browse pages. Any skill-map
/// mutation must invalidate both the list and the per-id entries.
#[async_trait]
pub trait Cache: Send + Sync {
    async fn get_skill_map(&self, skill_map_id: &str) -> Result<Option<SkillMap>, SkillPathError>;
    async fn save_skill_map(
        &self,
        skill_map: &SkillMap,
        ttl: std::time::Duration,
    ) -> Result<(), SkillPathError>;
    async fn get_skill_map_list(&self) -> Result<Option<Vec<SkillMap>>, SkillPathError>;
    async fn save_skill_map_list(
        &self,
        skill_maps: &[SkillMap],
        ttl: std::time::Duration,
    ) -> Result<(), SkillPathError>;
    async fn invalidate_skill_maps(&self) -> Result<(), SkillPathError>;
}
