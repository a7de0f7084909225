//! Per-resource request wrappers over the gateway.
//!
//! Each wrapper forwards a method, path, and payload and returns the
//! parsed body or a typed failure; interpretation of error statuses and
//! the 401 policy live in the gateway, never here.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::gateway::ApiGateway;
use super::types::*;

fn quiz_endpoint(quiz_id: &str) -> String {
    format!("/api/quizzes/{quiz_id}")
}

fn quiz_submit_endpoint(quiz_id: &str) -> String {
    format!("/api/quizzes/{quiz_id}/submit")
}

fn session_end_endpoint(session_id: &str) -> String {
    format!("/api/learning/session/{session_id}/end")
}

// =============================================================
// Auth
// =============================================================

impl ApiGateway {
    /// `POST /api/auth/login`
    pub async fn login(&self, credentials: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.post("/api/auth/login", credentials).await
    }

    /// `POST /api/auth/register`
    pub async fn register(&self, signup: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.post("/api/auth/register", signup).await
    }

    /// `GET /api/auth/profile` — the current user for the attached token.
    pub async fn fetch_profile(&self) -> Result<User, ApiError> {
        self.get("/api/auth/profile").await
    }

    /// `PUT /api/auth/profile` — echoes the updated user document.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, ApiError> {
        self.put("/api/auth/profile", update).await
    }
}

// =============================================================
// Learning sessions and assistant chat
// =============================================================

impl ApiGateway {
    /// `POST /api/learning/session/start`
    pub async fn start_session(
        &self,
        session: &StartSessionRequest,
    ) -> Result<StartSessionResponse, ApiError> {
        self.post("/api/learning/session/start", session).await
    }

    /// `GET /api/learning/recommendations`
    pub async fn recommendations(&self) -> Result<Recommendations, ApiError> {
        self.get("/api/learning/recommendations").await
    }

    /// `POST /api/learning/chat`
    pub async fn chat(&self, message: &ChatRequest) -> Result<ChatResponse, ApiError> {
        self.post("/api/learning/chat", message).await
    }

    /// `GET /api/learning/sessions`
    pub async fn sessions(&self) -> Result<Vec<LearningSession>, ApiError> {
        self.get("/api/learning/sessions").await
    }

    /// `PUT /api/learning/session/:id/end`
    pub async fn end_session(&self, session_id: &str) -> Result<serde_json::Value, ApiError> {
        self.put_empty(&session_end_endpoint(session_id)).await
    }
}

// =============================================================
// Quizzes
// =============================================================

impl ApiGateway {
    /// `POST /api/quizzes/generate`
    pub async fn generate_quiz(
        &self,
        request: &GenerateQuizRequest,
    ) -> Result<GenerateQuizResponse, ApiError> {
        self.post("/api/quizzes/generate", request).await
    }

    /// `GET /api/quizzes` — newest first.
    pub async fn quizzes(&self) -> Result<Vec<Quiz>, ApiError> {
        self.get("/api/quizzes").await
    }

    /// `GET /api/quizzes/:id`
    pub async fn quiz(&self, quiz_id: &str) -> Result<Quiz, ApiError> {
        self.get(&quiz_endpoint(quiz_id)).await
    }

    /// `POST /api/quizzes/:id/submit`
    pub async fn submit_quiz(
        &self,
        quiz_id: &str,
        answers: &SubmitQuizRequest,
    ) -> Result<SubmissionResult, ApiError> {
        self.post(&quiz_submit_endpoint(quiz_id), answers).await
    }

    /// `GET /api/quizzes/analytics/overview`
    pub async fn quiz_analytics(&self) -> Result<QuizAnalytics, ApiError> {
        self.get("/api/quizzes/analytics/overview").await
    }
}

// =============================================================
// Translation
// =============================================================

impl ApiGateway {
    /// `POST /api/translation/translate`
    pub async fn translate(&self, request: &TranslateRequest) -> Result<TranslateResponse, ApiError> {
        self.post("/api/translation/translate", request).await
    }

    /// `GET /api/translation/languages`
    pub async fn languages(&self) -> Result<LanguagesResponse, ApiError> {
        self.get("/api/translation/languages").await
    }

    /// `POST /api/translation/educational-content`
    pub async fn translate_educational_content(
        &self,
        request: &EducationalContentRequest,
    ) -> Result<EducationalContentResponse, ApiError> {
        self.post("/api/translation/educational-content", request).await
    }

    /// `POST /api/translation/quiz-translate`
    pub async fn translate_quiz(
        &self,
        request: &QuizTranslateRequest,
    ) -> Result<QuizTranslateResponse, ApiError> {
        self.post("/api/translation/quiz-translate", request).await
    }
}
