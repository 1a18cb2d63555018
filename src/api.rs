use futures::future::{FutureExt, LocalBoxFuture};
use gloo_net::http::Request;
use leptos::logging::{error, log};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

pub const LOGIN_PATH: &str = "/api/v1/auth/login";

#[derive(Serialize, Clone, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

// Keep the password out of logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApiError {
    /// Non-success status; the message is already the best human-readable one available.
    #[error("{message}")]
    Http { status: u16, message: String },
    #[error("Token not found in response")]
    TokenMissing,
    #[error("Network error: {0}")]
    Network(String),
    #[error("Could not encode request: {0}")]
    Encode(String),
}

/// Authentication endpoint.
pub trait AuthApi {
    /// Exchanges credentials for an access token. Does not persist it.
    fn login<'a>(&'a self, credentials: &'a Credentials) -> LocalBoxFuture<'a, Result<String, ApiError>>;
}

/// `AuthApi` over HTTP, talking JSON to the HBnB backend.
#[derive(Debug, Clone)]
pub struct HttpAuthApi {
    base: String,
}

impl HttpAuthApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub fn login_url(&self) -> String {
        format!("{}{}", self.base.trim_end_matches('/'), LOGIN_PATH)
    }

    async fn send_login(&self, credentials: &Credentials) -> Result<String, ApiError> {
        let url = self.login_url();
        log!("[API] POST {} for {}", url, credentials.email);

        let response = Request::post(&url)
            .json(credentials)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| {
                error!("[API] Login request failed: {}", e);
                ApiError::Network(e.to_string())
            })?;

        let status = response.status();
        let status_text = response.status_text();
        // A body we cannot read is treated like an empty one
        let body = response.text().await.unwrap_or_default();
        log!("[API] Login responded with {}", status);

        interpret_login_response(status, &status_text, &body)
    }
}

impl AuthApi for HttpAuthApi {
    fn login<'a>(&'a self, credentials: &'a Credentials) -> LocalBoxFuture<'a, Result<String, ApiError>> {
        self.send_login(credentials).boxed_local()
    }
}

/// Turns a raw login response into a token or an error.
pub fn interpret_login_response(status: u16, status_text: &str, body: &str) -> Result<String, ApiError> {
    // Non-JSON bodies are ignored, same as an empty object
    let data: Value = serde_json::from_str(body).unwrap_or(Value::Null);
    let field = |name: &str| {
        data.get(name)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    if !(200..300).contains(&status) {
        let message = field("message")
            .or_else(|| field("error"))
            .or_else(|| Some(status_text.to_string()).filter(|s| !s.is_empty()))
            .or_else(|| {
                http::StatusCode::from_u16(status)
                    .ok()
                    .and_then(|code| code.canonical_reason())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| "Login failed".to_string());
        return Err(ApiError::Http { status, message });
    }

    field("access_token")
        .or_else(|| field("token"))
        .ok_or(ApiError::TokenMissing)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_prefers_access_token() {
        assert_eq!(
            interpret_login_response(200, "OK", r#"{"access_token":"T","token":"U"}"#),
            Ok("T".to_string())
        );
        assert_eq!(
            interpret_login_response(201, "Created", r#"{"token":"U"}"#),
            Ok("U".to_string())
        );
    }

    #[test]
    fn test_success_without_token() {
        assert_eq!(
            interpret_login_response(200, "OK", r#"{"access_token":""}"#),
            Err(ApiError::TokenMissing)
        );
        assert_eq!(interpret_login_response(200, "OK", "not json"), Err(ApiError::TokenMissing));
    }

    #[test]
    fn test_failure_message_precedence() {
        let message = |status, text: &str, body: &str| match interpret_login_response(status, text, body) {
            Err(ApiError::Http { message, .. }) => message,
            other => panic!("expected http error, got {:?}", other),
        };

        assert_eq!(
            message(401, "UNAUTHORIZED", r#"{"message":"bad credentials","error":"x"}"#),
            "bad credentials"
        );
        assert_eq!(message(401, "UNAUTHORIZED", r#"{"error":"Invalid credentials"}"#), "Invalid credentials");
        assert_eq!(message(500, "INTERNAL SERVER ERROR", "<html>"), "INTERNAL SERVER ERROR");
        assert_eq!(message(401, "", ""), "Unauthorized");
        assert_eq!(message(599, "", ""), "Login failed");
    }

    #[test]
    fn test_login_url() {
        assert_eq!(HttpAuthApi::new("").login_url(), "/api/v1/auth/login");
        assert_eq!(
            HttpAuthApi::new("http://localhost:5000/").login_url(),
            "http://localhost:5000/api/v1/auth/login"
        );
    }

    #[test]
    fn test_credentials_debug_hides_password() {
        let creds = Credentials { email: "a@b.c".into(), password: "hunter2".into() };
        assert!(!format!("{:?}", creds).contains("hunter2"));
    }
}
