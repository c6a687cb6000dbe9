use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Flat catalog entry shown on the explore pages, separate from the
/// structured skill maps.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: String,
    pub skill_name: String,
    pub description: String,
}
