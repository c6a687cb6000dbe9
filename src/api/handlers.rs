use crate::{
    api::models::*,
    auth::jwt::Claims,
    core::{
        errors::SkillPathError,
        models::{audit::AppLog, prediction::PredictedSkill, skill::Skill, skill_map::SkillMap},
        services::SkillPathService,
    },
    infrastructure::{
        cache::in_memory::InMemoryCache, logging::in_memory::InMemoryLogging, storage::in_memory::InMemoryStorage,
    },
    recommender::Profile,
};
use axum::{
    Json, Router,
    extract::{Path, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::IntoResponse,
};
use http::header;

use std::sync::Arc;

// Middleware to validate JWT
async fn auth_middleware(
    State(service): State<Arc<SkillPathService<InMemoryLogging, InMemoryStorage, InMemoryCache>>>,
    mut req: Request<axum::body::Body>,
    next: Next,
) -> Result<impl IntoResponse, ApiError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| SkillPathError::Unauthorized("Missing Authorization header".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| SkillPathError::Unauthorized("Invalid Authorization header".to_string()))?;

    let claims = service.validate_token(token)?;
    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

// Middleware for routes restricted to the admin role; runs after
// auth_middleware has inserted the claims
async fn require_admin(req: Request<axum::body::Body>, next: Next) -> Result<impl IntoResponse, ApiError> {
    let claims = req
        .extensions()
        .get::<Claims>()
        .ok_or_else(|| SkillPathError::Unauthorized("Missing authentication".to_string()))?;
    if claims.role != "ADMIN" {
        return Err(SkillPathError::Forbidden(format!("User {} is not an admin", claims.sub)).into());
    }
    Ok(next.run(req).await)
}

// Define API routes
pub fn api_routes(service: Arc<SkillPathService<InMemoryLogging, InMemoryStorage, InMemoryCache>>) -> Router {
    let admin_routes = Router::new()
        .route("/skills", axum::routing::post(create_skill))
        .route("/skills/{skill_id}", axum::routing::delete(delete_skill))
        .route("/skill-maps", axum::routing::post(create_skill_map))
        .route(
            "/skill-maps/{skill_map_id}",
            axum::routing::put(update_skill_map).delete(delete_skill_map),
        )
        .route("/logs", axum::routing::get(get_app_logs))
        .route_layer(middleware::from_fn(require_admin))
        .route_layer(middleware::from_fn_with_state(service.clone(), auth_middleware));

    let protected_routes = Router::new()
        .route("/ml/predicted-skill", axum::routing::post(save_predicted_skill))
        .route("/ml/predicted-skill/{user_id}", axum::routing::get(get_predicted_skill))
        .route_layer(middleware::from_fn_with_state(service.clone(), auth_middleware));

    Router::new()
        .route("/auth/register", axum::routing::post(register))
        .route("/auth/login", axum::routing::post(login))
        .route("/skills", axum::routing::get(list_skills))
        .route("/skill-maps", axum::routing::get(list_skill_maps))
        .route("/skill-maps/{skill_map_id}", axum::routing::get(get_skill_map))
        .route("/ml/predict", axum::routing::post(predict_skill))
        .merge(protected_routes)
        .merge(admin_routes)
        .with_state(service)
}

#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered successfully", body = MessageResponse),
        (status = 400, description = "Missing field, invalid email or email already in use", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn register(
    State(service): State<Arc<SkillPathService<InMemoryLogging, InMemoryStorage, InMemoryCache>>>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    service.register_user(req.name, req.email, req.password).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User registered successfully".to_string(),
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "User not found or invalid credentials", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn login(
    State(service): State<Arc<SkillPathService<InMemoryLogging, InMemoryStorage, InMemoryCache>>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let (user, token) = service.login(&req.email, &req.password).await?;
    Ok(Json(LoginResponse {
        token,
        user_id: user.id,
        name: user.name,
        email: user.email,
        role: user.role.to_string(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/skills",
    responses(
        (status = 200, description = "Skills retrieved successfully", body = Vec<Skill>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn list_skills(
    State(service): State<Arc<SkillPathService<InMemoryLogging, InMemoryStorage, InMemoryCache>>>,
) -> Result<Json<Vec<Skill>>, ApiError> {
    let skills = service.list_skills().await?;
    Ok(Json(skills))
}

#[utoipa::path(
    post,
    path = "/api/skills",
    request_body = CreateSkillRequest,
    responses(
        (status = 201, description = "Skill created successfully", body = Skill),
        (status = 400, description = "Missing required fields", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Not an admin", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub(crate) async fn create_skill(
    State(service): State<Arc<SkillPathService<InMemoryLogging, InMemoryStorage, InMemoryCache>>>,
    Json(req): Json<CreateSkillRequest>,
) -> Result<(StatusCode, Json<Skill>), ApiError> {
    let skill = service.create_skill(req.skill_name, req.description).await?;
    Ok((StatusCode::CREATED, Json(skill)))
}

#[utoipa::path(
    delete,
    path = "/api/skills/{skill_id}",
    params(
        ("skill_id" = String, Path, description = "ID of the skill to delete")
    ),
    responses(
        (status = 200, description = "Skill deleted successfully", body = MessageResponse),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Not an admin", body = ErrorResponse),
        (status = 404, description = "Skill not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub(crate) async fn delete_skill(
    State(service): State<Arc<SkillPathService<InMemoryLogging, InMemoryStorage, InMemoryCache>>>,
    Path(skill_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    service.delete_skill(&skill_id).await?;
    Ok(Json(MessageResponse {
        message: "Skill deleted".to_string(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/skill-maps",
    responses(
        (status = 200, description = "Skill maps retrieved successfully", body = Vec<SkillMap>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn list_skill_maps(
    State(service): State<Arc<SkillPathService<InMemoryLogging, InMemoryStorage, InMemoryCache>>>,
) -> Result<Json<Vec<SkillMap>>, ApiError> {
    let skill_maps = service.list_skill_maps().await?;
    Ok(Json(skill_maps))
}

#[utoipa::path(
    get,
    path = "/api/skill-maps/{skill_map_id}",
    params(
        ("skill_map_id" = String, Path, description = "ID of the skill map to retrieve")
    ),
    responses(
        (status = 200, description = "Skill map retrieved successfully", body = SkillMap),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Skill map not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn get_skill_map(
    State(service): State<Arc<SkillPathService<InMemoryLogging, InMemoryStorage, InMemoryCache>>>,
    Path(skill_map_id): Path<String>,
) -> Result<Json<SkillMap>, ApiError> {
    let skill_map = service.get_skill_map(&skill_map_id).await?;
    Ok(Json(skill_map))
}

#[utoipa::path(
    post,
    path = "/api/skill-maps",
    request_body = CreateSkillMapRequest,
    responses(
        (status = 201, description = "Skill map created successfully", body = SkillMap),
        (status = 400, description = "Missing skill name or learning path", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Not an admin", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub(crate) async fn create_skill_map(
    State(service): State<Arc<SkillPathService<InMemoryLogging, InMemoryStorage, InMemoryCache>>>,
    Json(req): Json<CreateSkillMapRequest>,
) -> Result<(StatusCode, Json<SkillMap>), ApiError> {
    let skill_map = service
        .create_skill_map(req.skill_name, req.learning_path, req.course_links, req.youtube_links)
        .await?;
    Ok((StatusCode::CREATED, Json(skill_map)))
}

#[utoipa::path(
    put,
    path = "/api/skill-maps/{skill_map_id}",
    request_body = UpdateSkillMapRequest,
    params(
        ("skill_map_id" = String, Path, description = "ID of the skill map to update")
    ),
    responses(
        (status = 200, description = "Skill map updated successfully", body = SkillMap),
        (status = 400, description = "Malformed id or missing fields", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Not an admin", body = ErrorResponse),
        (status = 404, description = "Skill map not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub(crate) async fn update_skill_map(
    State(service): State<Arc<SkillPathService<InMemoryLogging, InMemoryStorage, InMemoryCache>>>,
    Path(skill_map_id): Path<String>,
    Json(req): Json<UpdateSkillMapRequest>,
) -> Result<Json<SkillMap>, ApiError> {
    let skill_map = service
        .update_skill_map(
            &skill_map_id,
            req.skill_name,
            req.learning_path,
            req.course_links,
            req.youtube_links,
        )
        .await?;
    Ok(Json(skill_map))
}

#[utoipa::path(
    delete,
    path = "/api/skill-maps/{skill_map_id}",
    params(
        ("skill_map_id" = String, Path, description = "ID of the skill map to delete")
    ),
    responses(
        (status = 200, description = "Skill map deleted successfully", body = MessageResponse),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Not an admin", body = ErrorResponse),
        (status = 404, description = "Skill map not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub(crate) async fn delete_skill_map(
    State(service): State<Arc<SkillPathService<InMemoryLogging, InMemoryStorage, InMemoryCache>>>,
    Path(skill_map_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    service.delete_skill_map(&skill_map_id).await?;
    Ok(Json(MessageResponse {
        message: "Skill map deleted".to_string(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/ml/predict",
    request_body = PredictRequest,
    responses(
        (status = 200, description = "Skill predicted successfully", body = PredictResponse),
        (status = 404, description = "Dataset has no candidates", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn predict_skill(
    State(service): State<Arc<SkillPathService<InMemoryLogging, InMemoryStorage, InMemoryCache>>>,
    Json(req): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, ApiError> {
    let profile = Profile {
        age: req.age,
        education: req.education,
        occupation: req.occupation,
        interest: req.interest,
        experience: req.experience,
    };
    let skill = service.predict(&profile)?;
    Ok(Json(PredictResponse { skill }))
}

#[utoipa::path(
    post,
    path = "/api/ml/predicted-skill",
    request_body = SavePredictedSkillRequest,
    responses(
        (status = 200, description = "Predicted skill saved", body = PredictedSkill),
        (status = 400, description = "Missing user id or skill", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub(crate) async fn save_predicted_skill(
    State(service): State<Arc<SkillPathService<InMemoryLogging, InMemoryStorage, InMemoryCache>>>,
    Json(req): Json<SavePredictedSkillRequest>,
) -> Result<Json<PredictedSkill>, ApiError> {
    let record = service.save_predicted_skill(req.user_id, req.skill).await?;
    Ok(Json(record))
}

#[utoipa::path(
    get,
    path = "/api/ml/predicted-skill/{user_id}",
    params(
        ("user_id" = String, Path, description = "ID of the user")
    ),
    responses(
        (status = 200, description = "Predicted skill retrieved", body = PredictedSkill),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "No predicted skill for this user", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub(crate) async fn get_predicted_skill(
    State(service): State<Arc<SkillPathService<InMemoryLogging, InMemoryStorage, InMemoryCache>>>,
    Path(user_id): Path<String>,
) -> Result<Json<PredictedSkill>, ApiError> {
    let record = service.get_predicted_skill(&user_id).await?;
    Ok(Json(record))
}

#[utoipa::path(
    get,
    path = "/api/logs",
    responses(
        (status = 200, description = "Application logs retrieved successfully", body = Vec<AppLog>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Not an admin", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub(crate) async fn get_app_logs(
    State(service): State<Arc<SkillPathService<InMemoryLogging, InMemoryStorage, InMemoryCache>>>,
) -> Result<Json<Vec<AppLog>>, ApiError> {
    let logs = service.get_app_logs().await?;
    Ok(Json(logs))
}
