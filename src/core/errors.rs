use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: String,
    pub title: String,
    pub description: String,
}

#[derive(Error, Debug, Serialize)]
pub enum SkillPathError {
    #[error("Field `{0}` is required")]
    MissingField(String),

    #[error("Invalid email format: {0}")]
    InvalidEmail(String),

    #[error("Email {0} already in use")]
    EmailAlreadyInUse(String),

    #[error("User {0} not found")]
    UserNotFound(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid id: {0}")]
    InvalidObjectId(String),

    #[error("Skill {0} not found")]
    SkillNotFound(String),

    #[error("Skill map {0} not found")]
    SkillMapNotFound(String),

    #[error("Skill map for {0} already exists")]
    DuplicateSkillMap(String),

    #[error("No predicted skill for user {0}")]
    PredictionNotFound(String),

    /// The dataset has no candidate rows to recommend from
    #[error("No recommendation available")]
    NoRecommendation,

    #[error("Invalid input for field `{0}`: {1:?}")]
    InvalidInput(String, FieldError),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Dataset error: {0}")]
    DatasetError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Logging error: {0}")]
    LoggingError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),
}
