mod recommender_tests;
mod skill_map_tests;
mod user_tests;

use crate::core::services::SkillPathService;
use crate::infrastructure::cache::in_memory::InMemoryCache;
use crate::infrastructure::logging::in_memory::InMemoryLogging;
use crate::infrastructure::storage::in_memory::InMemoryStorage;
use crate::recommender::{DatasetRow, Recommender};

pub fn sample_rows() -> Vec<DatasetRow> {
    vec![
        DatasetRow {
            age: 30,
            education: "Bachelor's".to_string(),
            occupation: "Student".to_string(),
            interest: "AI/ML".to_string(),
            experience: "Beginner".to_string(),
            recommended_skill: "Python Basics".to_string(),
        },
        DatasetRow {
            age: 35,
            education: "Master's".to_string(),
            occupation: "Working Professional".to_string(),
            interest: "AI/ML".to_string(),
            experience: "Advanced".to_string(),
            recommended_skill: "PyTorch".to_string(),
        },
        DatasetRow {
            age: 28,
            education: "Bachelor's".to_string(),
            occupation: "Student".to_string(),
            interest: "Full Stack Development".to_string(),
            experience: "Beginner".to_string(),
            recommended_skill: "JavaScript Fundamentals".to_string(),
        },
    ]
}

pub fn create_test_service_with_rows(
    rows: Vec<DatasetRow>,
) -> SkillPathService<InMemoryLogging, InMemoryStorage, InMemoryCache> {
    let storage = InMemoryStorage::new();
    let logging = InMemoryLogging::new();
    let cache = InMemoryCache::new();
    SkillPathService::new(
        storage,
        logging,
        cache,
        Recommender::new(rows),
        "test-secret".to_string(),
        Some("admin@example.com".to_string()),
    )
}

pub fn create_test_service() -> SkillPathService<InMemoryLogging, InMemoryStorage, InMemoryCache> {
    create_test_service_with_rows(sample_rows())
}
