use crate::core::errors::SkillPathError;
use crate::core::models::{prediction::PredictedSkill, skill::Skill, skill_map::SkillMap, user::User};
use crate::infrastructure::storage::Storage;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

pub struct InMemoryStorage {
    users: Mutex<HashMap<String, User>>,
    emails: Mutex<HashMap<String, String>>, // email -> user_id
    skills: Mutex<HashMap<String, Skill>>,
    skill_maps: Mutex<HashMap<String, SkillMap>>,
    skill_map_names: Mutex<HashMap<String, String>>, // skillName -> skill_map_id
    predicted_skills: Mutex<HashMap<String, PredictedSkill>>, // keyed by user_id
}

impl InMemoryStorage {
    pub fn new() -> Self {
        InMemoryStorage {
            users: Mutex::new(HashMap::new()),
            emails: Mutex::new(HashMap::new()),
            skills: Mutex::new(HashMap::new()),
            skill_maps: Mutex::new(HashMap::new()),
            skill_map_names: Mutex::new(HashMap::new()),
            predicted_skills: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn save_user(&self, user: User) -> Result<(), SkillPathError> {
        let mut emails = self.emails.lock().await;
        if emails.contains_key(&user.email) {
            return Err(SkillPathError::EmailAlreadyInUse(user.email));
        }
        emails.insert(user.email.clone(), user.id.clone());
        let mut users = self.users.lock().await;
        users.insert(user.id.clone(), user);
        Ok(())
    }

    async fn get_user(&self, user_id: &str) -> Result<Option<User>, SkillPathError> {
        Ok(self.users.lock().await.get(user_id).cloned())
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, SkillPathError> {
        // For production: Use database index on email
        let user_id = self.emails.lock().await.get(email).cloned();
        Ok(match user_id {
            Some(id) => self.users.lock().await.get(&id).cloned(),
            None => None,
        })
    }

    async fn save_skill(&self, skill: Skill) -> Result<(), SkillPathError> {
        self.skills.lock().await.insert(skill.id.clone(), skill);
        Ok(())
    }

    async fn get_skill(&self, skill_id: &str) -> Result<Option<Skill>, SkillPathError> {
        Ok(self.skills.lock().await.get(skill_id).cloned())
    }

    async fn list_skills(&self) -> Result<Vec<Skill>, SkillPathError> {
        Ok(self.skills.lock().await.values().cloned().collect())
    }

    async fn delete_skill(&self, skill_id: &str) -> Result<(), SkillPathError> {
        self.skills.lock().await.remove(skill_id);
        Ok(())
    }

    async fn save_skill_map(&self, skill_map: SkillMap) -> Result<(), SkillPathError> {
        let mut skill_maps = self.skill_maps.lock().await;
        let mut names = self.skill_map_names.lock().await;
        // Replacing a map under a new name must drop the old name index entry
        if let Some(existing) = skill_maps.get(&skill_map.id) {
            names.remove(&existing.skill_name);
        }
        names.insert(skill_map.skill_name.clone(), skill_map.id.clone());
        skill_maps.insert(skill_map.id.clone(), skill_map);
        Ok(())
    }

    async fn get_skill_map(&self, skill_map_id: &str) -> Result<Option<SkillMap>, SkillPathError> {
        Ok(self.skill_maps.lock().await.get(skill_map_id).cloned())
    }

    async fn get_skill_map_by_name(&self, skill_name: &str) -> Result<Option<SkillMap>, SkillPathError> {
        // For production: Use database index on skillName
        let skill_map_id = self.skill_map_names.lock().await.get(skill_name).cloned();
        Ok(match skill_map_id {
            Some(id) => self.skill_maps.lock().await.get(&id).cloned(),
            None => None,
        })
    }

    async fn list_skill_maps(&self) -> Result<Vec<SkillMap>, SkillPathError> {
        Ok(self.skill_maps.lock().await.values().cloned().collect())
    }

    async fn delete_skill_map(&self, skill_map_id: &str) -> Result<(), SkillPathError> {
        let mut skill_maps = self.skill_maps.lock().await;
        if let Some(removed) = skill_maps.remove(skill_map_id) {
            self.skill_map_names.lock().await.remove(&removed.skill_name);
        }
        Ok(())
    }

    async fn upsert_predicted_skill(&self, record: PredictedSkill) -> Result<(), SkillPathError> {
        self.predicted_skills
            .lock()
            .await
            .insert(record.user_id.clone(), record);
        Ok(())
    }

    async fn get_predicted_skill(&self, user_id: &str) -> Result<Option<PredictedSkill>, SkillPathError> {
        Ok(self.predicted_skills.lock().await.get(user_id).cloned())
    }
}
