use crate::core::errors::SkillPathError;
use crate::core::models::{prediction::PredictedSkill, skill::Skill, skill_map::SkillMap, user::User};
use async_trait::async_trait;

#[async_trait]
pub trait Storage: Send + Sync {
    async fn save_user(&self, user: User) -> Result<(), SkillPathError>;
    async fn get_user(&self, user_id: &str) -> Result<Option<User>, SkillPathError>;
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, SkillPathError>;

    async fn save_skill(&self, skill: Skill) -> Result<(), SkillPathError>;
    async fn get_skill(&self, skill_id: &str) -> Result<Option<Skill>, SkillPathError>;
    async fn list_skills(&self) -> Result<Vec<Skill>, SkillPathError>;
    async fn delete_skill(&self, skill_id: &str) -> Result<(), SkillPathError>;

    async fn save_skill_map(&self, skill_map: SkillMap) -> Result<(), SkillPathError>;
    async fn get_skill_map(&self, skill_map_id: &str) -> Result<Option<SkillMap>, SkillPathError>;
    async fn get_skill_map_by_name(&self, skill_name: &str) -> Result<Option<SkillMap>, SkillPathError>;
    async fn list_skill_maps(&self) -> Result<Vec<SkillMap>, SkillPathError>;
    async fn delete_skill_map(&self, skill_map_id: &str) -> Result<(), SkillPathError>;

    async fn upsert_predicted_skill(&self, record: PredictedSkill) -> Result<(), SkillPathError>;
    async fn get_predicted_skill(&self, user_id: &str) -> Result<Option<PredictedSkill>, SkillPathError>;
}

pub mod in_memory;
