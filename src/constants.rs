use std::time::Duration;

// Action names recorded in the app log
pub const USER_REGISTERED: &str = "user_registered";
pub const USER_LOGGED_IN: &str = "user_logged_in";
pub const SKILL_CREATED: &str = "skill_created";
pub const SKILL_DELETED: &str = "skill_deleted";
pub const SKILL_MAP_CREATED: &str = "skill_map_created";
pub const SKILL_MAP_UPDATED: &str = "skill_map_updated";
pub const SKILL_MAP_DELETED: &str = "skill_map_deleted";
pub const PREDICTION_SAVED: &str = "prediction_saved";

// Skill maps change rarely relative to how often the browse pages read them
pub const SKILL_MAP_CACHE_TTL: Duration = Duration::from_secs(60);
