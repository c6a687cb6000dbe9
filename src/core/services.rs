use crate::auth::jwt::{Claims, JwtService};
use crate::constants::{
    PREDICTION_SAVED, SKILL_CREATED, SKILL_DELETED, SKILL_MAP_CACHE_TTL, SKILL_MAP_CREATED,
    SKILL_MAP_DELETED, SKILL_MAP_UPDATED, USER_LOGGED_IN, USER_REGISTERED,
};
use crate::core::errors::{FieldError, SkillPathError};
use crate::core::models::{
    audit::AppLog,
    prediction::PredictedSkill,
    skill::Skill,
    skill_map::{SkillMap, Topic},
    user::{Role, User},
};
use crate::infrastructure::cache::Cache;
use crate::infrastructure::logging::LoggingService;
use crate::infrastructure::storage::Storage;
use crate::recommender::{Profile, Recommender};
use serde_json::json;
use uuid::Uuid;

pub struct SkillPathService<L: LoggingService, S: Storage, C: Cache> {
    storage: S,
    logging: L,
    cache: C,
    recommender: Recommender,
    jwt_service: JwtService,
    admin_email: Option<String>,
}

impl<L: LoggingService, S: Storage, C: Cache> SkillPathService<L, S, C> {
    pub fn new(
        storage: S,
        logging: L,
        cache: C,
        recommender: Recommender,
        jwt_secret: String,
        admin_email: Option<String>,
    ) -> Self {
        SkillPathService {
            storage,
            logging,
            cache,
            recommender,
            jwt_service: JwtService::new(jwt_secret),
            admin_email,
        }
    }

    pub fn validate_token(&self, token: &str) -> Result<Claims, SkillPathError> {
        self.jwt_service.validate_token(token)
    }

    fn validate_string_input(&self, field: &str, value: &str, max_length: usize) -> Result<(), SkillPathError> {
        if value.trim().is_empty() {
            return Err(SkillPathError::MissingField(field.to_string()));
        }
        if value.len() > max_length {
            return Err(SkillPathError::InvalidInput(
                field.to_string(),
                FieldError {
                    field: field.to_string(),
                    title: format!("{} Too Long", field),
                    description: format!("{} cannot exceed {} characters", field, max_length),
                },
            ));
        }
        Ok(())
    }

    fn validate_id(&self, id: &str) -> Result<(), SkillPathError> {
        Uuid::parse_str(id).map_err(|_| SkillPathError::InvalidObjectId(id.to_string()))?;
        Ok(())
    }

    // AUTH

    pub async fn register_user(&self, name: String, email: String, password: String) -> Result<User, SkillPathError> {
        self.validate_string_input("name", &name, 100)?;
        if email.trim().is_empty() {
            return Err(SkillPathError::MissingField("email".to_string()));
        }
        if !email.contains('@') || !email.contains('.') || email.len() < 5 {
            return Err(SkillPathError::InvalidEmail(email));
        }
        if password.is_empty() {
            return Err(SkillPathError::MissingField("password".to_string()));
        }

        if self.storage.get_user_by_email(&email).await?.is_some() {
            return Err(SkillPathError::EmailAlreadyInUse(email));
        }

        let role = match &self.admin_email {
            Some(admin) if admin.eq_ignore_ascii_case(&email) => Role::Admin,
            _ => Role::User,
        };
        let password_hash = bcrypt::hash(&password, bcrypt::DEFAULT_COST)
            .map_err(|e| SkillPathError::InternalServerError(format!("Password hashing error: {}", e)))?;

        let user = User {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            password: password_hash,
            role,
        };
        self.storage.save_user(user.clone()).await?;

        self.logging
            .log_action(
                USER_REGISTERED,
                json!({ "user_id": user.id, "email": user.email, "role": user.role.to_string() }),
                Some(&user.id),
            )
            .await?;

        Ok(user)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<(User, String), SkillPathError> {
        let user = self
            .storage
            .get_user_by_email(email)
            .await?
            .ok_or_else(|| SkillPathError::UserNotFound(email.to_string()))?;

        if !bcrypt::verify(password, &user.password)
            .map_err(|e| SkillPathError::InternalServerError(format!("Password verification error: {}", e)))?
        {
            return Err(SkillPathError::InvalidCredentials);
        }

        let token = self.jwt_service.generate_token(&user.id, &user.role.to_string())?;

        self.logging
            .log_action(USER_LOGGED_IN, json!({ "user_id": user.id }), Some(&user.id))
            .await?;

        Ok((user, token))
    }

    pub async fn get_user(&self, user_id: &str) -> Result<Option<User>, SkillPathError> {
        self.storage.get_user(user_id).await
    }

    // SKILL CATALOG

    pub async fn create_skill(&self, skill_name: String, description: String) -> Result<Skill, SkillPathError> {
        self.validate_string_input("skillName", &skill_name, 100)?;
        self.validate_string_input("description", &description, 2000)?;

        let skill = Skill {
            id: Uuid::new_v4().to_string(),
            skill_name,
            description,
        };
        self.storage.save_skill(skill.clone()).await?;

        self.logging
            .log_action(
                SKILL_CREATED,
                json!({ "skill_id": skill.id, "skill_name": skill.skill_name }),
                None,
            )
            .await?;

        Ok(skill)
    }

    pub async fn list_skills(&self) -> Result<Vec<Skill>, SkillPathError> {
        self.storage.list_skills().await
    }

    pub async fn delete_skill(&self, skill_id: &str) -> Result<(), SkillPathError> {
        self.validate_id(skill_id)?;
        self.storage
            .get_skill(skill_id)
            .await?
            .ok_or_else(|| SkillPathError::SkillNotFound(skill_id.to_string()))?;
        self.storage.delete_skill(skill_id).await?;

        self.logging
            .log_action(SKILL_DELETED, json!({ "skill_id": skill_id }), None)
            .await?;

        Ok(())
    }

    // SKILL MAPS

    pub async fn create_skill_map(
        &self,
        skill_name: String,
        learning_path: Vec<Topic>,
        course_links: Vec<String>,
        youtube_links: Vec<String>,
    ) -> Result<SkillMap, SkillPathError> {
        self.validate_string_input("skillName", &skill_name, 100)?;
        if learning_path.is_empty() {
            return Err(SkillPathError::MissingField("learningPath".to_string()));
        }
        for topic in &learning_path {
            self.validate_string_input("learningPath.topic.title", &topic.title, 200)?;
        }
        if self.storage.get_skill_map_by_name(&skill_name).await?.is_some() {
            return Err(SkillPathError::DuplicateSkillMap(skill_name));
        }

        let skill_map = SkillMap {
            id: Uuid::new_v4().to_string(),
            skill_name,
            learning_path,
            course_links,
            youtube_links,
        };
        self.storage.save_skill_map(skill_map.clone()).await?;
        self.cache.invalidate_skill_maps().await?;

        self.logging
            .log_action(
                SKILL_MAP_CREATED,
                json!({ "skill_map_id": skill_map.id, "skill_name": skill_map.skill_name }),
                None,
            )
            .await?;

        Ok(skill_map)
    }

    pub async fn get_skill_map(&self, skill_map_id: &str) -> Result<SkillMap, SkillPathError> {
        self.validate_id(skill_map_id)?;

        if let Some(cached) = self.cache.get_skill_map(skill_map_id).await? {
            return Ok(cached);
        }

        let skill_map = self
            .storage
            .get_skill_map(skill_map_id)
            .await?
            .ok_or_else(|| SkillPathError::SkillMapNotFound(skill_map_id.to_string()))?;
        self.cache.save_skill_map(&skill_map, SKILL_MAP_CACHE_TTL).await?;
        Ok(skill_map)
    }

    pub async fn list_skill_maps(&self) -> Result<Vec<SkillMap>, SkillPathError> {
        if let Some(cached) = self.cache.get_skill_map_list().await? {
            return Ok(cached);
        }

        let skill_maps = self.storage.list_skill_maps().await?;
        self.cache.save_skill_map_list(&skill_maps, SKILL_MAP_CACHE_TTL).await?;
        Ok(skill_maps)
    }

    pub async fn update_skill_map(
        &self,
        skill_map_id: &str,
        skill_name: String,
        learning_path: Vec<Topic>,
        course_links: Vec<String>,
        youtube_links: Vec<String>,
    ) -> Result<SkillMap, SkillPathError> {
        self.validate_id(skill_map_id)?;
        self.validate_string_input("skillName", &skill_name, 100)?;
        if learning_path.is_empty() {
            return Err(SkillPathError::MissingField("learningPath".to_string()));
        }
        for topic in &learning_path {
            self.validate_string_input("learningPath.topic.title", &topic.title, 200)?;
        }

        self.storage
            .get_skill_map(skill_map_id)
            .await?
            .ok_or_else(|| SkillPathError::SkillMapNotFound(skill_map_id.to_string()))?;
        if let Some(other) = self.storage.get_skill_map_by_name(&skill_name).await? {
            if other.id != skill_map_id {
                return Err(SkillPathError::DuplicateSkillMap(skill_name));
            }
        }

        let skill_map = SkillMap {
            id: skill_map_id.to_string(),
            skill_name,
            learning_path,
            course_links,
            youtube_links,
        };
        self.storage.save_skill_map(skill_map.clone()).await?;
        self.cache.invalidate_skill_maps().await?;

        self.logging
            .log_action(SKILL_MAP_UPDATED, json!({ "skill_map_id": skill_map.id }), None)
            .await?;

        Ok(skill_map)
    }

    pub async fn delete_skill_map(&self, skill_map_id: &str) -> Result<(), SkillPathError> {
        self.validate_id(skill_map_id)?;
        self.storage
            .get_skill_map(skill_map_id)
            .await?
            .ok_or_else(|| SkillPathError::SkillMapNotFound(skill_map_id.to_string()))?;
        self.storage.delete_skill_map(skill_map_id).await?;
        self.cache.invalidate_skill_maps().await?;

        self.logging
            .log_action(SKILL_MAP_DELETED, json!({ "skill_map_id": skill_map_id }), None)
            .await?;

        Ok(())
    }

    // PREDICTION

    pub fn predict(&self, profile: &Profile) -> Result<String, SkillPathError> {
        self.recommender
            .recommend(profile)
            .ok_or(SkillPathError::NoRecommendation)
    }

    pub async fn save_predicted_skill(&self, user_id: String, skill: String) -> Result<PredictedSkill, SkillPathError> {
        if user_id.trim().is_empty() {
            return Err(SkillPathError::MissingField("userId".to_string()));
        }
        if skill.trim().is_empty() {
            return Err(SkillPathError::MissingField("skill".to_string()));
        }

        let record = PredictedSkill { user_id, skill };
        self.storage.upsert_predicted_skill(record.clone()).await?;

        self.logging
            .log_action(
                PREDICTION_SAVED,
                json!({ "user_id": record.user_id, "skill": record.skill }),
                Some(&record.user_id),
            )
            .await?;

        Ok(record)
    }

    pub async fn get_predicted_skill(&self, user_id: &str) -> Result<PredictedSkill, SkillPathError> {
        self.storage
            .get_predicted_skill(user_id)
            .await?
            .ok_or_else(|| SkillPathError::PredictionNotFound(user_id.to_string()))
    }

    // OBSERVABILITY

    pub async fn get_app_logs(&self) -> Result<Vec<AppLog>, SkillPathError> {
        self.logging.get_logs().await
    }
}
