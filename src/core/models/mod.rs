pub mod audit;
pub mod prediction;
pub mod skill;
pub mod skill_map;
pub mod user;
