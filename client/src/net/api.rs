//! REST API helpers for the study-material backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: stubs returning
//! [`ApiError::Unavailable`], since these endpoints are only meaningful in
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become [`ApiError::Status`] carrying the backend's
//! `detail` string, or a per-operation fallback when the body has none. The
//! `Display` output is what forms show inline.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use serde::Deserialize;

use super::types::{AuthResponse, FlashcardRequest, FlashcardResponse, LoginRequest, QuizRequest, QuizResponse, SignupRequest};
#[cfg(feature = "hydrate")]
use super::types::{
    MessageResponse, OAuthExchangeRequest, OAuthUrlResponse, PasswordResetRequest, PasswordUpdateRequest,
    UploadResponse,
};

/// Failure of a backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

pub const SIGNUP_FAILED: &str = "Registration failed";
pub const LOGIN_FAILED: &str = "Login failed";
pub const OAUTH_URL_FAILED: &str = "Failed to initialize Google login";
pub const OAUTH_EXCHANGE_FAILED: &str = "OAuth exchange failed";
pub const RESET_FAILED: &str = "Failed to send reset email";
pub const UPDATE_PASSWORD_FAILED: &str = "Failed to update password";
pub const UPLOAD_FAILED: &str = "Failed to upload file";
pub const QUIZ_FAILED: &str = "Failed to generate quiz";
pub const FLASHCARDS_FAILED: &str = "Failed to generate flashcards";
pub const ANKI_FAILED: &str = "Failed to download Anki deck";

pub const OAUTH_PROVIDER: &str = "google";

#[cfg(any(test, feature = "hydrate"))]
#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

/// Human-readable message for a failed response body.
#[cfg(any(test, feature = "hydrate"))]
fn error_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| match b.detail {
            Some(serde_json::Value::String(detail)) if !detail.trim().is_empty() => Some(detail),
            _ => None,
        })
        .unwrap_or_else(|| fallback.to_owned())
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn oauth_url_path(redirect_url: &str) -> String {
    let query = serde_urlencoded::to_string(&[("provider", OAUTH_PROVIDER), ("redirect_url", redirect_url)])
        .unwrap_or_default();
    format!("/auth/google-login?{query}")
}

#[cfg(any(test, feature = "hydrate"))]
fn anki_path(file_id: &str, language: &str) -> String {
    format!("/download-anki/{file_id}/{language}")
}

#[cfg(feature = "hydrate")]
mod transport {
    use gloo_net::http::{Request, RequestBuilder, Response};
    use serde::Serialize;
    use serde::de::DeserializeOwned;

    use super::{ApiError, bearer_header, error_message};
    use crate::config::endpoint;

    fn network(e: gloo_net::Error) -> ApiError {
        ApiError::Network(e.to_string())
    }

    pub fn with_bearer(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        match token {
            Some(token) => builder.header("Authorization", &bearer_header(token)),
            None => builder,
        }
    }

    pub async fn ensure_ok(resp: Response, fallback: &str) -> Result<Response, ApiError> {
        if resp.ok() {
            return Ok(resp);
        }
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Err(ApiError::Status { status, message: error_message(&body, fallback) })
    }

    pub async fn read_json<T: DeserializeOwned>(resp: Response, fallback: &str) -> Result<T, ApiError> {
        let resp = ensure_ok(resp, fallback).await?;
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        path: &str,
        token: Option<&str>,
        body: &B,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let resp = with_bearer(Request::post(&endpoint(path)), token)
            .json(body)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        read_json(resp, fallback).await
    }

    pub async fn get(path: &str, token: Option<&str>, fallback: &str) -> Result<Response, ApiError> {
        let resp = with_bearer(Request::get(&endpoint(path)), token).send().await.map_err(network)?;
        ensure_ok(resp, fallback).await
    }

    pub async fn post_form(
        path: &str,
        token: Option<&str>,
        form: web_sys::FormData,
        fallback: &str,
    ) -> Result<Response, ApiError> {
        let resp = with_bearer(Request::post(&endpoint(path)), token)
            .body(form)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        ensure_ok(resp, fallback).await
    }
}

/// Create an account via `POST /auth/signup`.
///
/// # Errors
///
/// Returns an error if the request fails or the backend rejects the signup.
pub async fn sign_up(request: SignupRequest) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        transport::post_json("/auth/signup", None, &request, SIGNUP_FAILED).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Sign in with email and password via `POST /auth/login`.
///
/// # Errors
///
/// Returns an error if the request fails or the credentials are rejected.
pub async fn sign_in(request: LoginRequest) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        transport::post_json("/auth/login", None, &request, LOGIN_FAILED).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Fetch the Google consent URL via `GET /auth/google-login`.
///
/// # Errors
///
/// Returns an error if the request fails or the response carries no URL.
pub async fn google_oauth_url(redirect_url: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = transport::get(&oauth_url_path(redirect_url), None, OAUTH_URL_FAILED).await?;
        let body: OAuthUrlResponse = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        if body.auth_url.trim().is_empty() {
            return Err(ApiError::Decode("Invalid OAuth URL".to_owned()));
        }
        Ok(body.auth_url)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = redirect_url;
        Err(ApiError::Unavailable)
    }
}

/// Trade a one-time authorization code for a session via `POST /auth/callback`.
///
/// # Errors
///
/// Returns an error if the request fails or the code is rejected.
pub async fn exchange_oauth_code(code: &str, redirect_url: &str) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = OAuthExchangeRequest {
            provider: OAUTH_PROVIDER.to_owned(),
            code: code.to_owned(),
            redirect_url: redirect_url.to_owned(),
        };
        transport::post_json("/auth/callback", None, &request, OAUTH_EXCHANGE_FAILED).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (code, redirect_url);
        Err(ApiError::Unavailable)
    }
}

/// Ask the backend to email a recovery link via `POST /auth/reset-password`.
///
/// # Errors
///
/// Returns an error if the request fails or the backend rejects it.
pub async fn request_password_reset(email: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = PasswordResetRequest { email: email.to_owned() };
        let body: MessageResponse = transport::post_json("/auth/reset-password", None, &request, RESET_FAILED).await?;
        Ok(body.message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err(ApiError::Unavailable)
    }
}

/// Set a new password via `POST /auth/update-password`, authorized by the
/// recovery token from the reset link.
///
/// # Errors
///
/// Returns an error if the request fails or the reset token is expired or
/// invalid.
pub async fn update_password(reset_token: &str, new_password: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = PasswordUpdateRequest { new_password: new_password.to_owned() };
        let body: MessageResponse =
            transport::post_json("/auth/update-password", Some(reset_token), &request, UPDATE_PASSWORD_FAILED)
                .await?;
        Ok(body.message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (reset_token, new_password);
        Err(ApiError::Unavailable)
    }
}

/// Upload a study document via multipart `POST /file/upload`.
///
/// # Errors
///
/// Returns an error if the form cannot be built, the request fails, or the
/// backend rejects the file.
#[cfg(feature = "hydrate")]
pub async fn upload_file(token: Option<&str>, file: &web_sys::File) -> Result<UploadResponse, ApiError> {
    let form = web_sys::FormData::new().map_err(|_| ApiError::Network("could not build upload form".to_owned()))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|_| ApiError::Network("could not attach file".to_owned()))?;
    let resp = transport::post_form("/file/upload", token, form, UPLOAD_FAILED).await?;
    transport::read_json(resp, UPLOAD_FAILED).await
}

/// Generate a quiz from an uploaded document via `POST /quizzes/generate`.
///
/// # Errors
///
/// Returns an error if the request fails or generation fails server-side.
pub async fn generate_quiz(token: Option<&str>, request: &QuizRequest) -> Result<QuizResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        log::debug!("requesting {} quiz questions for {}", request.total_questions, request.file_id);
        transport::post_json("/quizzes/generate", token, request, QUIZ_FAILED).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, request);
        Err(ApiError::Unavailable)
    }
}

/// Generate flashcards from an uploaded document via `POST /generate-flashcards`.
///
/// # Errors
///
/// Returns an error if the request fails or generation fails server-side.
pub async fn generate_flashcards(
    token: Option<&str>,
    request: &FlashcardRequest,
) -> Result<FlashcardResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        log::debug!("requesting {} flashcards for {}", request.total_flashcards, request.file_id);
        transport::post_json("/generate-flashcards", token, request, FLASHCARDS_FAILED).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, request);
        Err(ApiError::Unavailable)
    }
}

/// Download the Anki package for a generated deck.
///
/// # Errors
///
/// Returns an error if the request fails or the deck is not available.
pub async fn download_anki_deck(token: Option<&str>, file_id: &str, language: &str) -> Result<Vec<u8>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = transport::get(&anki_path(file_id, language), token, ANKI_FAILED).await?;
        resp.binary().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, file_id, language);
        Err(ApiError::Unavailable)
    }
}
