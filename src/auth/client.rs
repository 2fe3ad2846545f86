//! Login against the portfolio API.

use std::sync::Arc;

use serde::Serialize;

use super::session::Session;
use crate::error::{AuthError, FolioResult, NetworkError};
use crate::traits::{Headers, HttpClient};

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Client for `POST /api/login`.
#[derive(Clone)]
pub struct SessionClient {
    http: Arc<dyn HttpClient>,
    base_url: String,
}

impl SessionClient {
    pub fn new(http: Arc<dyn HttpClient>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    /// Exchange an email and password for a session.
    pub async fn login(&self, email: &str, password: &str) -> FolioResult<Session> {
        let url = format!("{}/api/login", self.base_url);
        let body = serde_json::to_string(&LoginRequest { email, password })?;

        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        tracing::debug!(email, "logging in");
        let response = self
            .http
            .post_json(&url, &body, &headers)
            .await
            .map_err(|e| NetworkError::from_http(e, &url, "login"))?;

        match response.status {
            200..=299 => {}
            401 => return Err(AuthError::InvalidCredentials.into()),
            status => {
                return Err(NetworkError::HttpStatus {
                    status,
                    message: response.text().unwrap_or_default().trim().to_string(),
                }
                .into())
            }
        }

        let session: Session = response.json()?;
        tracing::info!(user = %session.user.username, admin = session.is_admin(), "logged in");
        Ok(session)
    }
}
