use super::*;

#[test]
fn user_decodes_mongo_id_and_camel_case_fields() {
    let user: User = serde_json::from_value(serde_json::json!({
        "_id": "u1",
        "username": "sam",
        "email": "sam@example.com",
        "createdAt": "2024-03-01T00:00:00Z",
        "learningProfile": {
            "subjects": ["Mathematics"],
            "currentLevel": "intermediate",
            "learningGoals": ["Prepare for exams"],
            "preferredLanguage": "fr"
        }
    }))
    .expect("user");

    assert_eq!(user.id.as_deref(), Some("u1"));
    assert_eq!(user.learning_profile.current_level, Level::Intermediate);
    assert_eq!(user.learning_profile.preferred_language, Language::Fr);
    // Fields the server omits fall back to empty.
    assert!(user.learning_profile.strengths.is_empty());
}

#[test]
fn quiz_tolerates_minimal_server_documents() {
    let quiz: Quiz = serde_json::from_value(serde_json::json!({
        "_id": "q1",
        "title": "Algebra Basics",
        "subject": "Mathematics",
        "topic": "Algebra"
    }))
    .expect("quiz");

    assert_eq!(quiz.difficulty, Difficulty::Medium);
    assert!(!quiz.completed);
    assert!(quiz.questions.is_empty());
    assert_eq!(quiz.score, None);
}

#[test]
fn quiz_question_maps_correct_answer_index() {
    let question: QuizQuestion = serde_json::from_value(serde_json::json!({
        "question": "2 + 2?",
        "options": ["3", "4", "5"],
        "correctAnswer": 1,
        "explanation": "Basic addition."
    }))
    .expect("question");

    assert_eq!(question.correct_answer, 1);
    assert_eq!(question.options[question.correct_answer], "4");
}

#[test]
fn language_codes_round_trip() {
    for lang in [Language::En, Language::Es, Language::Fr, Language::De] {
        assert_eq!(Language::from_code(lang.code()), lang);
    }
    assert_eq!(Language::from_code("zz"), Language::En);
}

#[test]
fn register_request_serializes_profile_under_camel_case_key() {
    let request = RegisterRequest {
        username: "sam".to_owned(),
        email: "sam@example.com".to_owned(),
        password: "secret1".to_owned(),
        learning_profile: LearningProfile {
            subjects: vec!["Physics".to_owned()],
            ..LearningProfile::default()
        },
    };
    let value = serde_json::to_value(&request).expect("json");
    assert_eq!(value["learningProfile"]["subjects"], serde_json::json!(["Physics"]));
    assert_eq!(value["learningProfile"]["currentLevel"], "beginner");
    assert_eq!(value["learningProfile"]["preferredLanguage"], "en");
}
