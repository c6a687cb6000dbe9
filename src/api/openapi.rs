use utoipa::OpenApi;

use crate::{
    api::models::{
        CreateSkillMapRequest, CreateSkillRequest, ErrorResponse, LoginRequest, LoginResponse, MessageResponse,
        PredictRequest, PredictResponse, RegisterRequest, SavePredictedSkillRequest, UpdateSkillMapRequest,
    },
    core::models::{
        audit::AppLog,
        prediction::PredictedSkill,
        skill::Skill,
        skill_map::{SkillMap, Subtopic, Topic},
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::register,
        super::handlers::login,
        super::handlers::list_skills,
        super::handlers::create_skill,
        super::handlers::delete_skill,
        super::handlers::list_skill_maps,
        super::handlers::get_skill_map,
        super::handlers::create_skill_map,
        super::handlers::update_skill_map,
        super::handlers::delete_skill_map,
        super::handlers::predict_skill,
        super::handlers::save_predicted_skill,
        super::handlers::get_predicted_skill,
        super::handlers::get_app_logs
    ),
    components(schemas(
        RegisterRequest,
        LoginRequest,
        LoginResponse,
        PredictRequest,
        PredictResponse,
        SavePredictedSkillRequest,
        CreateSkillRequest,
        CreateSkillMapRequest,
        UpdateSkillMapRequest,
        MessageResponse,
        ErrorResponse,
        Skill,
        SkillMap,
        Topic,
        Subtopic,
        PredictedSkill,
        AppLog
    )),
    info(
        title = "SkillPath API",
        description = "API for career-skill recommendations and skill map learning paths",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
