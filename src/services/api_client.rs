// ============================================================================
// API CLIENT - HTTP only (stateless)
// ============================================================================
// No business logic: builds requests, maps statuses to ApiError
// ============================================================================

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use web_sys::AbortSignal;

use crate::config::CONFIG;
use crate::errors::ApiError;

#[derive(Deserialize)]
struct MessageBody {
    #[serde(default)]
    message: Option<String>,
}

/// Backend client. Clones share nothing but the base URL and signal.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    signal: Option<AbortSignal>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(&CONFIG.backend_url)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            signal: None,
        }
    }

    /// Requests made by this client are cancelled when `signal` aborts
    pub fn with_signal(mut self, signal: Option<AbortSignal>) -> Self {
        self.signal = signal;
        self
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        authorization: Option<&str>,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        let mut request = Request::get(&url)
            .header("Content-Type", "application/json")
            .abort_signal(self.signal.as_ref());
        if let Some(value) = authorization {
            request = request.header("Authorization", value);
        }

        let response = request.send().await?;
        log::debug!("📡 GET {} -> {}", url, response.status());
        read_json(response).await
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        let response = Request::post(&url)
            .abort_signal(self.signal.as_ref())
            .json(body)?
            .send()
            .await?;
        log::debug!("📡 POST {} -> {}", url, response.status());
        read_json(response).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses a 2xx body as `T`; anything else becomes `ApiError::Rejected`
/// carrying the body's `message` when it has one
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if response.ok() {
        return response.json::<T>().await.map_err(ApiError::from);
    }

    let status = response.status();
    let message = response
        .text()
        .await
        .ok()
        .and_then(|body| rejection_message(&body));
    Err(ApiError::Rejected { status, message })
}

pub(crate) fn rejection_message(body: &str) -> Option<String> {
    serde_json::from_str::<MessageBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_join_without_double_slash() {
        let client = ApiClient::with_base_url("https://logigas-backend.onrender.com/");
        assert_eq!(
            client.url("/api/drivers"),
            "https://logigas-backend.onrender.com/api/drivers"
        );
    }

    #[test]
    fn rejection_message_reads_json_message() {
        assert_eq!(
            rejection_message(r#"{"message":"Invalid email or password"}"#).as_deref(),
            Some("Invalid email or password")
        );
        assert_eq!(rejection_message(r#"{"error":"nope"}"#), None);
        assert_eq!(rejection_message("<html>502</html>"), None);
        assert_eq!(rejection_message(r#"{"message":""}"#), None);
    }
}
