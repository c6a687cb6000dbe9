use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Subtopic {
    pub name: String,
    #[serde(default)]
    pub resources: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub title: String,
    pub order: u32,
    #[serde(default)]
    pub subtopics: Vec<Subtopic>,
}

/// A structured learning path for one named skill: ordered topics with
/// subtopics and resource links.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SkillMap {
    pub id: String,
    pub skill_name: String,
    pub learning_path: Vec<Topic>,
    #[serde(default)]
    pub course_links: Vec<String>,
    #[serde(default)]
    pub youtube_links: Vec<String>,
}
