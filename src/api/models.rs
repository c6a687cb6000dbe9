use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::errors::SkillPathError;
use crate::core::models::skill_map::Topic;

// Request structs for JSON payloads. Required fields default to empty so
// absence surfaces as a 400 from the service, not a deserialization error.
#[derive(Deserialize, ToSchema)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

#[derive(Deserialize, ToSchema)]
pub struct PredictRequest {
    #[serde(default)]
    pub age: u32,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub occupation: String,
    #[serde(default)]
    pub interest: String,
    #[serde(default)]
    pub experience: String,
}

#[derive(Serialize, ToSchema)]
pub struct PredictResponse {
    pub skill: String,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SavePredictedSkillRequest {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub skill: String,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSkillRequest {
    #[serde(default)]
    pub skill_name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSkillMapRequest {
    #[serde(default)]
    pub skill_name: String,
    #[serde(default)]
    pub learning_path: Vec<Topic>,
    #[serde(default)]
    pub course_links: Vec<String>,
    #[serde(default)]
    pub youtube_links: Vec<String>,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSkillMapRequest {
    #[serde(default)]
    pub skill_name: String,
    #[serde(default)]
    pub learning_path: Vec<Topic>,
    #[serde(default)]
    pub course_links: Vec<String>,
    #[serde(default)]
    pub youtube_links: Vec<String>,
}

#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

// Error response struct
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

// Newtype wrapper for SkillPathError to implement IntoResponse
pub struct ApiError(pub SkillPathError);

impl From<SkillPathError> for ApiError {
    fn from(err: SkillPathError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_message) = match self.0 {
            SkillPathError::MissingField(field) => {
                (StatusCode::BAD_REQUEST, format!("Field `{}` is required", field))
            }
            SkillPathError::InvalidEmail(email) => (StatusCode::BAD_REQUEST, format!("Invalid email: {}", email)),
            SkillPathError::EmailAlreadyInUse(_) => (StatusCode::BAD_REQUEST, "Email already in use".to_string()),
            SkillPathError::UserNotFound(_) => (StatusCode::BAD_REQUEST, "User not found".to_string()),
            SkillPathError::InvalidCredentials => (StatusCode::BAD_REQUEST, "Invalid credentials".to_string()),
            SkillPathError::InvalidObjectId(id) => (StatusCode::BAD_REQUEST, format!("Invalid id: {}", id)),
            SkillPathError::SkillNotFound(id) => (StatusCode::NOT_FOUND, format!("Skill {} not found", id)),
            SkillPathError::SkillMapNotFound(id) => (StatusCode::NOT_FOUND, format!("Skill map {} not found", id)),
            SkillPathError::DuplicateSkillMap(name) => {
                (StatusCode::BAD_REQUEST, format!("Skill map for {} already exists", name))
            }
            SkillPathError::PredictionNotFound(user_id) => {
                (StatusCode::NOT_FOUND, format!("No predicted skill for user {}", user_id))
            }
            SkillPathError::NoRecommendation => (StatusCode::NOT_FOUND, "No recommendation available".to_string()),
            SkillPathError::InvalidInput(field, detail) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid input for {}: {:?}", field, detail),
            ),
            SkillPathError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            SkillPathError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            SkillPathError::DatasetError(msg)
            | SkillPathError::StorageError(msg)
            | SkillPathError::LoggingError(msg)
            | SkillPathError::CacheError(msg)
            | SkillPathError::InternalServerError(msg) => {
                // Detail stays in the server log, the body stays generic
                tracing::error!("internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
            }
        };
        (status, Json(ErrorResponse { error: error_message })).into_response()
    }
}
