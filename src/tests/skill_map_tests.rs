use crate::core::errors::SkillPathError;
use crate::core::models::skill_map::{Subtopic, Topic};
use crate::tests::create_test_service;

fn sample_path() -> Vec<Topic> {
    vec![
        Topic {
            title: "Getting Started".to_string(),
            order: 1,
            subtopics: vec![Subtopic {
                name: "Installation".to_string(),
                resources: vec!["https://example.com/install".to_string()],
            }],
        },
        Topic {
            title: "Core Concepts".to_string(),
            order: 2,
            subtopics: Vec::new(),
        },
    ]
}

#[tokio::test]
async fn test_create_and_get_skill_map() {
    let _ = env_logger::try_init();
    let service = create_test_service();

    let created = service
        .create_skill_map(
            "Python Basics".to_string(),
            sample_path(),
            vec!["https://example.com/course".to_string()],
            Vec::new(),
        )
        .await
        .unwrap();

    let fetched = service.get_skill_map(&created.id).await.unwrap();
    assert_eq!(fetched.skill_name, "Python Basics");
    assert_eq!(fetched.learning_path.len(), 2);
    assert_eq!(fetched.learning_path[0].subtopics[0].name, "Installation");

    let all = service.list_skill_maps().await.unwrap();
    assert_eq!(all.len(), 1);
}

#[tokio::test]
async fn test_create_skill_map_requires_name_and_path() {
    let service = create_test_service();

    let result = service
        .create_skill_map(String::new(), sample_path(), Vec::new(), Vec::new())
        .await;
    assert!(matches!(result, Err(SkillPathError::MissingField(field)) if field == "skillName"));

    let result = service
        .create_skill_map("Python Basics".to_string(), Vec::new(), Vec::new(), Vec::new())
        .await;
    assert!(matches!(result, Err(SkillPathError::MissingField(field)) if field == "learningPath"));
}

#[tokio::test]
async fn test_create_skill_map_rejects_duplicate_name() {
    let service = create_test_service();

    service
        .create_skill_map("Python Basics".to_string(), sample_path(), Vec::new(), Vec::new())
        .await
        .unwrap();

    let result = service
        .create_skill_map("Python Basics".to_string(), sample_path(), Vec::new(), Vec::new())
        .await;
    assert!(matches!(result, Err(SkillPathError::DuplicateSkillMap(_))));
}

#[tokio::test]
async fn test_update_skill_map_replaces_contents() {
    let service = create_test_service();

    let created = service
        .create_skill_map("Python Basics".to_string(), sample_path(), Vec::new(), Vec::new())
        .await
        .unwrap();

    let updated = service
        .update_skill_map(
            &created.id,
            "Python Fundamentals".to_string(),
            vec![Topic {
                title: "Rewritten".to_string(),
                order: 1,
                subtopics: Vec::new(),
            }],
            Vec::new(),
            vec!["https://youtube.com/watch?v=abc".to_string()],
        )
        .await
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.skill_name, "Python Fundamentals");
    assert_eq!(updated.learning_path.len(), 1);

    let fetched = service.get_skill_map(&created.id).await.unwrap();
    assert_eq!(fetched.skill_name, "Python Fundamentals");
    assert_eq!(fetched.youtube_links.len(), 1);
}

#[tokio::test]
async fn test_delete_skill_map() {
    let service = create_test_service();

    let created = service
        .create_skill_map("Python Basics".to_string(), sample_path(), Vec::new(), Vec::new())
        .await
        .unwrap();

    service.delete_skill_map(&created.id).await.unwrap();

    let result = service.get_skill_map(&created.id).await;
    assert!(matches!(result, Err(SkillPathError::SkillMapNotFound(_))));
    assert!(service.list_skill_maps().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_skill_map_malformed_id() {
    let service = create_test_service();

    let result = service.get_skill_map("not-a-uuid").await;
    assert!(matches!(result, Err(SkillPathError::InvalidObjectId(_))));
}

#[tokio::test]
async fn test_get_skill_map_missing_id() {
    let service = create_test_service();

    let result = service
        .get_skill_map("00000000-0000-4000-8000-000000000000")
        .await;
    assert!(matches!(result, Err(SkillPathError::SkillMapNotFound(_))));
}

#[tokio::test]
async fn test_skill_catalog_create_list_delete() {
    let service = create_test_service();

    let skill = service
        .create_skill("Python Basics".to_string(), "Introductory Python".to_string())
        .await
        .unwrap();
    assert_eq!(service.list_skills().await.unwrap().len(), 1);

    service.delete_skill(&skill.id).await.unwrap();
    assert!(service.list_skills().await.unwrap().is_empty());

    let result = service.delete_skill(&skill.id).await;
    assert!(matches!(result, Err(SkillPathError::SkillNotFound(_))));
}
