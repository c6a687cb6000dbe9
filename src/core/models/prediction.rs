use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One record per user: the most recently predicted skill, overwritten on
/// each new prediction.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PredictedSkill {
    pub user_id: String,
    pub skill: String,
}
