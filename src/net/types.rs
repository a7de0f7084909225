//! Wire DTOs for the EduAgent backend API.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON bodies field-for-field (camelCase,
//! Mongo-style `_id` on documents) so serde round-trips stay lossless and
//! every view reads the same schema the server emits.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by the auth endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier.
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    /// Display/login name.
    pub username: String,
    /// Account email address.
    pub email: String,
    /// ISO 8601 account creation timestamp, if the server sends it.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Learning preferences and self-assessment.
    #[serde(default)]
    pub learning_profile: LearningProfile,
}

/// Learning preferences attached to a user account.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningProfile {
    /// Subjects the user is interested in.
    #[serde(default)]
    pub subjects: Vec<String>,
    /// Self-assessed proficiency level.
    #[serde(default)]
    pub current_level: Level,
    /// Ordered learning goals.
    #[serde(default)]
    pub learning_goals: Vec<String>,
    /// Preferred interface/content language.
    #[serde(default)]
    pub preferred_language: Language,
    /// Self-assessed strengths.
    #[serde(default)]
    pub strengths: Vec<String>,
    /// Self-assessed areas for improvement.
    #[serde(default)]
    pub weaknesses: Vec<String>,
}

/// Proficiency level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    /// Wire code as sent in JSON.
    pub fn code(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }

    /// Parse a wire code, defaulting to `Beginner`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "intermediate" => Self::Intermediate,
            "advanced" => Self::Advanced,
            _ => Self::Beginner,
        }
    }
}

/// Supported content language.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
    Fr,
    De,
}

impl Language {
    /// Language code as sent on the wire.
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::De => "de",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Es => "Spanish",
            Self::Fr => "French",
            Self::De => "German",
        }
    }

    /// Parse a wire code back into a `Language`, defaulting to English.
    pub fn from_code(code: &str) -> Self {
        match code {
            "es" => Self::Es,
            "fr" => Self::Fr,
            "de" => Self::De,
            _ => Self::En,
        }
    }
}

// =============================================================
// Auth payloads
// =============================================================

/// Credentials for `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Signup payload for `POST /api/auth/register`: credentials plus the
/// initial learning-profile selections.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub learning_profile: LearningProfile,
}

/// Successful login/register response: the bearer token plus the user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Opaque bearer token to persist and attach to subsequent requests.
    pub token: String,
    pub user: User,
}

/// Full edited profile for `PUT /api/auth/profile`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub username: String,
    pub email: String,
    pub learning_profile: LearningProfile,
}

// =============================================================
// Learning sessions and assistant chat
// =============================================================

/// Payload for `POST /api/learning/session/start`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartSessionRequest {
    pub subject: String,
    pub topic: String,
    #[serde(default)]
    pub learning_objectives: Vec<String>,
}

/// Response carrying the new learning-session identifier.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartSessionResponse {
    pub session_id: String,
}

/// Payload for `POST /api/learning/chat`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub session_id: Option<String>,
    pub subject: String,
    pub topic: String,
}

/// Assistant reply to a chat message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// The assistant's reply text.
    pub response: String,
}

/// A past learning session as listed by `GET /api/learning/sessions`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningSession {
    #[serde(rename = "_id")]
    pub id: String,
    pub subject: String,
    pub topic: String,
    /// Server-side lifecycle state (e.g. `"active"`, `"ended"`).
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// AI study recommendations shown on the dashboard.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    #[serde(default)]
    pub next_topics: Vec<String>,
    #[serde(default)]
    pub study_methods: Vec<String>,
}

// =============================================================
// Quizzes
// =============================================================

/// Quiz difficulty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Wire/display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// Parse a wire code, defaulting to `Medium`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "easy" => Self::Easy,
            "hard" => Self::Hard,
            _ => Self::Medium,
        }
    }
}

/// A full quiz document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub subject: String,
    pub topic: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub questions: Vec<QuizQuestion>,
    /// Learning gaps this quiz was generated to target.
    #[serde(default)]
    pub learning_gaps: Vec<LearningGap>,
    /// Whether the user has already submitted this quiz.
    #[serde(default)]
    pub completed: bool,
    /// Last score as a percentage, once completed.
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A single multiple-choice question.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    /// Index into `options` of the correct answer.
    pub correct_answer: usize,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
}

/// A learning gap a generated quiz targets.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningGap {
    pub topic: String,
    pub gap_description: String,
}

/// Payload for `POST /api/quizzes/generate`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuizRequest {
    pub subject: String,
    pub topic: String,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub learning_gaps: Vec<LearningGap>,
}

/// Response to quiz generation: the new id plus the full document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuizResponse {
    pub quiz_id: String,
    pub quiz: Quiz,
}

/// Payload for `POST /api/quizzes/:id/submit`. Unanswered slots submit as
/// `null` and are graded incorrect by the server.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubmitQuizRequest {
    pub answers: Vec<Option<usize>>,
}

/// Grading result for a submitted quiz.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResult {
    /// Score as a percentage.
    pub score: f64,
    pub total_questions: usize,
    pub correct_answers: usize,
    /// Per-question review, in question order.
    #[serde(default)]
    pub results: Vec<AnswerReview>,
}

/// Per-question grading detail.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerReview {
    /// The option index the user chose, if any.
    #[serde(default)]
    pub user_answer: Option<usize>,
    pub is_correct: bool,
}

/// Aggregate quiz statistics from `GET /api/quizzes/analytics/overview`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizAnalytics {
    #[serde(default)]
    pub total_quizzes: u32,
    #[serde(default)]
    pub average_score: f64,
    #[serde(default)]
    pub recent_performance: Vec<PerformancePoint>,
}

/// One recent quiz result in the analytics overview.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformancePoint {
    pub subject: String,
    pub topic: String,
    pub score: f64,
    #[serde(default)]
    pub date: Option<String>,
}

// =============================================================
// Translation
// =============================================================

/// Payload for `POST /api/translation/translate`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequest {
    pub text: String,
    pub from_lang: String,
    pub to_lang: String,
}

/// General translation result.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResponse {
    pub translated_text: String,
}

/// Supported languages, keyed by wire code. A `BTreeMap` keeps the select
/// options in a stable order across renders.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LanguagesResponse {
    #[serde(default)]
    pub languages: BTreeMap<String, String>,
}

/// Payload for `POST /api/translation/educational-content`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationalContentRequest {
    pub content: String,
    /// Content kind hint for the translator (e.g. `"text"`, `"lesson"`).
    pub content_type: String,
    pub from_lang: String,
    pub to_lang: String,
}

/// Educational-content translation result.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationalContentResponse {
    pub translated_content: String,
}

/// Payload for `POST /api/translation/quiz-translate`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizTranslateRequest {
    pub questions: Vec<QuizQuestion>,
    pub from_lang: String,
    pub to_lang: String,
}

/// Quiz translation result.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizTranslateResponse {
    pub translated_questions: Vec<QuizQuestion>,
}
