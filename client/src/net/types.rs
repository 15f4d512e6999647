//! Wire DTOs for the study-material REST API.
//!
//! DESIGN
//! ======
//! Field names follow the backend's JSON exactly (snake_case) so serde needs
//! no per-field renames, except `User`, whose persisted form is camelCase and
//! must also accept the backend's snake_case spelling.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Signed-in account as stored locally and returned by auth endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default, alias = "first_name", skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, alias = "last_name", skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// Token triple issued on signup, login, and OAuth exchange.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_owned()
}

/// Response body shared by `/auth/signup`, `/auth/login`, and `/auth/callback`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: TokenPair,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct OAuthUrlResponse {
    pub auth_url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OAuthExchangeRequest {
    pub provider: String,
    pub code: String,
    pub redirect_url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PasswordResetRequest {
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PasswordUpdateRequest {
    pub new_password: String,
}

/// Generic `{message}` acknowledgement body.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UploadResponse {
    pub file_id: String,
    #[serde(default)]
    pub message: String,
}

/// Quiz generation request. Zero counts mean "none of this type".
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QuizRequest {
    pub file_id: String,
    pub total_questions: u32,
    pub num_single_correct: u32,
    pub num_multiple_correct: u32,
    pub num_yes_no: u32,
    pub language: String,
    pub quizzes_type: String,
}

/// Question kinds produced by the quiz generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    SingleCorrect,
    MultipleCorrect,
    YesNo,
}

/// A generated question; answers are identified by option text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendQuestion {
    #[serde(rename = "type")]
    pub kind: QuestionType,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answers: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResponse {
    pub file_id: String,
    pub language: String,
    pub total_questions: u32,
    pub questions: Vec<BackendQuestion>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FlashcardRequest {
    pub file_id: String,
    pub total_flashcards: u32,
    pub language: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendFlashcard {
    pub question: String,
    pub answer: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashcardResponse {
    pub file_id: String,
    pub language: String,
    pub total_flashcards: u32,
    pub flashcards: Vec<BackendFlashcard>,
}
