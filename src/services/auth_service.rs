use async_trait::async_trait;

use crate::errors::ApiError;
use crate::models::{LoginCredentials, LoginResponse};

use super::ApiClient;

pub const LOGIN_PATH: &str = "/api/auth/login";

/// Remote authentication endpoint
#[async_trait(?Send)]
pub trait AuthService {
    /// One `POST /api/auth/login`. 2xx bodies are returned as-is, even when
    /// they lack a token; non-2xx statuses come back as `ApiError::Rejected`.
    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginResponse, ApiError>;
}

#[async_trait(?Send)]
impl AuthService for ApiClient {
    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginResponse, ApiError> {
        log::info!("🔐 Logging in as {}", credentials.email);
        let response = self.post_json::<_, LoginResponse>(LOGIN_PATH, credentials).await;
        match &response {
            Ok(body) if body.token.is_some() => log::info!("✅ Login accepted for {}", credentials.email),
            Ok(_) => log::warn!("⚠️ Login answered 2xx without a token"),
            Err(e) => log::error!("❌ Login failed: {}", e),
        }
        response
    }
}
