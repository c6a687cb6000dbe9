use crate::core::errors::SkillPathError;
use crate::core::models::skill_map::SkillMap;
use crate::infrastructure::cache::Cache;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct InMemoryCache {
    maps: Arc<RwLock<HashMap<String, (SkillMap, DateTime<Utc>)>>>,
    lists: Arc<RwLock<HashMap<String, (Vec<SkillMap>, DateTime<Utc>)>>>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        InMemoryCache {
            maps: Arc::new(RwLock::new(HashMap::new())),
            lists: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    fn expiry(ttl: std::time::Duration) -> Result<DateTime<Utc>, SkillPathError> {
        Ok(Utc::now()
            + chrono::Duration::from_std(ttl)
                .map_err(|e| SkillPathError::CacheError(format!("Failed to convert TTL: {}", e)))?)
    }
}

impl Default for InMemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Cache for InMemoryCache {
    async fn get_skill_map(&self, skill_map_id: &str) -> Result<Option<SkillMap>, SkillPathError> {
        let maps = self.maps.read().await;
        let key = crate::infrastructure::cache::cache_keys::skill_map_key(skill_map_id);
        Ok(maps.get(&key).and_then(|(skill_map, expiry)| {
            if *expiry > Utc::now() {
                Some(skill_map.clone())
            } else {
                None
            }
        }))
    }

    async fn save_skill_map(
        &self,
        skill_map: &SkillMap,
        ttl: std::time::Duration,
    ) -> Result<(), SkillPathError> {
        let mut maps = self.maps.write().await;
        let key = crate::infrastructure::cache::cache_keys::skill_map_key(&skill_map.id);
        maps.insert(key, (skill_map.clone(), Self::expiry(ttl)?));
        Ok(())
    }

    async fn get_skill_map_list(&self) -> Result<Option<Vec<SkillMap>>, SkillPathError> {
        let lists = self.lists.read().await;
        let key = crate::infrastructure::cache::cache_keys::skill_map_list_key();
        Ok(lists.get(&key).and_then(|(skill_maps, expiry)| {
            if *expiry > Utc::now() {
                Some(skill_maps.clone())
            } else {
                None
            }
        }))
    }

    async fn save_skill_map_list(
        &self,
        skill_maps: &[SkillMap],
        ttl: std::time::Duration,
    ) -> Result<(), SkillPathError> {
        let mut lists = self.lists.write().await;
        let key = crate::infrastructure::cache::cache_keys::skill_map_list_key();
        lists.insert(key, (skill_maps.to_vec(), Self::expiry(ttl)?));
        Ok(())
    }

    async fn invalidate_skill_maps(&self) -> Result<(), SkillPathError> {
        self.maps.write().await.clear();
        self.lists.write().await.clear();
        Ok(())
    }
}
