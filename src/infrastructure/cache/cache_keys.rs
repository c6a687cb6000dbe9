pub fn skill_map_key(skill_map_id: &str) -> String {
    format!("skill_map:{}", skill_map_id)
}

pub fn skill_map_list_key() -> String {
    "skill_maps:all".to_string()
}
