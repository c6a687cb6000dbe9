use crate::recommender::{DatasetRow, Profile, Recommender};

fn row(age: u32, education: &str, occupation: &str, interest: &str, experience: &str, skill: &str) -> DatasetRow {
    DatasetRow {
        age,
        education: education.to_string(),
        occupation: occupation.to_string(),
        interest: interest.to_string(),
        experience: experience.to_string(),
        recommended_skill: skill.to_string(),
    }
}

fn profile(age: u32, education: &str, occupation: &str, interest: &str, experience: &str) -> Profile {
    Profile {
        age,
        education: education.to_string(),
        occupation: occupation.to_string(),
        interest: interest.to_string(),
        experience: experience.to_string(),
    }
}

#[test]
fn test_exact_match_returns_first_row_in_load_order() {
    let _ = env_logger::try_init();
    let recommender = Recommender::new(vec![
        row(30, "Bachelor's", "Student", "AI/ML", "Beginner", "Python Basics"),
        row(32, "Bachelor's", "Student", "AI/ML", "Beginner", "TensorFlow"),
    ]);

    let result = recommender.recommend(&profile(25, "Bachelor's", "Student", "AI/ML", "Beginner"));
    assert_eq!(result.as_deref(), Some("Python Basics"));
}

#[test]
fn test_exact_match_respects_age_bound() {
    let recommender = Recommender::new(vec![
        row(30, "Bachelor's", "Student", "AI/ML", "Beginner", "Python Basics"),
        row(40, "Bachelor's", "Student", "AI/ML", "Beginner", "TensorFlow"),
    ]);

    // 35 exceeds the first row's bound, so the second row is the first exact match
    let result = recommender.recommend(&profile(35, "Bachelor's", "Student", "AI/ML", "Beginner"));
    assert_eq!(result.as_deref(), Some("TensorFlow"));
}

#[test]
fn test_interest_fallback_ignores_other_fields() {
    let recommender = Recommender::new(vec![row(
        30,
        "Bachelor's",
        "Student",
        "AI/ML",
        "Beginner",
        "Python Basics",
    )]);

    // Occupation mismatched, so the exact tier fails and the interest tier matches
    let result = recommender.recommend(&profile(25, "Bachelor's", "Job Seeker", "AI/ML", "Beginner"));
    assert_eq!(result.as_deref(), Some("Python Basics"));
}

#[test]
fn test_mode_fallback_for_unknown_interest() {
    let recommender = Recommender::new(vec![row(
        30,
        "Bachelor's",
        "Student",
        "AI/ML",
        "Beginner",
        "Python Basics",
    )]);

    let result = recommender.recommend(&profile(25, "Bachelor's", "Student", "Blockchain", "Beginner"));
    assert_eq!(result.as_deref(), Some("Python Basics"));
}

#[test]
fn test_mode_fallback_picks_most_frequent_skill() {
    let recommender = Recommender::new(vec![
        row(30, "Bachelor's", "Student", "AI/ML", "Beginner", "Python Basics"),
        row(31, "Master's", "Job Seeker", "Networking", "Beginner", "CCNA"),
        row(32, "Master's", "Job Seeker", "Networking", "Intermediate", "CCNA"),
    ]);

    let result = recommender.recommend(&profile(25, "PhD", "Student", "Blockchain", "Advanced"));
    assert_eq!(result.as_deref(), Some("CCNA"));
}

#[test]
fn test_mode_fallback_tie_keeps_first_encountered_skill() {
    let recommender = Recommender::new(vec![
        row(30, "Bachelor's", "Student", "AI/ML", "Beginner", "Python Basics"),
        row(31, "Master's", "Job Seeker", "Networking", "Beginner", "CCNA"),
        row(32, "Master's", "Job Seeker", "Networking", "Intermediate", "CCNA"),
        row(33, "Bachelor's", "Student", "AI/ML", "Intermediate", "Python Basics"),
    ]);

    // Both skills count 2; the first-encountered one wins
    let result = recommender.recommend(&profile(25, "PhD", "Student", "Blockchain", "Advanced"));
    assert_eq!(result.as_deref(), Some("Python Basics"));
}

#[test]
fn test_mode_fallback_skips_rows_without_interest() {
    let recommender = Recommender::new(vec![
        row(30, "Bachelor's", "Student", "", "Beginner", "Uncategorized Skill"),
        row(31, "Master's", "Job Seeker", "Networking", "Beginner", "CCNA"),
    ]);

    let result = recommender.recommend(&profile(25, "PhD", "Student", "Blockchain", "Advanced"));
    assert_eq!(result.as_deref(), Some("CCNA"));
}

#[test]
fn test_empty_dataset_yields_no_recommendation() {
    let recommender = Recommender::new(Vec::new());
    assert!(recommender.is_empty());

    let result = recommender.recommend(&profile(25, "Bachelor's", "Student", "AI/ML", "Beginner"));
    assert_eq!(result, None);
}

#[test]
fn test_recommendation_is_idempotent() {
    let recommender = Recommender::new(vec![
        row(30, "Bachelor's", "Student", "AI/ML", "Beginner", "Python Basics"),
        row(32, "Bachelor's", "Job Seeker", "AI/ML", "Intermediate", "TensorFlow"),
    ]);
    let input = profile(25, "Bachelor's", "Student", "AI/ML", "Beginner");

    let first = recommender.recommend(&input);
    let second = recommender.recommend(&input);
    assert_eq!(first, second);
}
