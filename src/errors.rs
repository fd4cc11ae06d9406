// ============================================================================
// ERRORS - Failure taxonomy shared by services and view models
// ============================================================================

use thiserror::Error;

use crate::maps::MapError;

pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";

/// Failure of a backend or routing-service request
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// No persisted token; the user has to log in first
    #[error("not logged in")]
    MissingToken,

    #[error("network error: {0}")]
    Network(String),

    /// Non-2xx status, with the server-provided message when there was one
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Rejected { status: u16, message: Option<String> },

    #[error("parse error: {0}")]
    Parse(String),

    /// The owning component went away and cancelled the request
    #[error("request aborted")]
    Aborted,
}

impl ApiError {
    /// Text shown to the user, with `fallback` standing in for rejections
    /// that carried no message of their own
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::MissingToken => "Please log in first".to_string(),
            ApiError::Network(_) => NETWORK_ERROR_MESSAGE.to_string(),
            ApiError::Rejected {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            ApiError::Rejected { .. } | ApiError::Parse(_) | ApiError::Aborted => {
                fallback.to_string()
            }
        }
    }

    pub fn is_aborted(&self) -> bool {
        matches!(self, ApiError::Aborted)
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::JsError(js) if js.name == "AbortError" => ApiError::Aborted,
            gloo_net::Error::JsError(js) => ApiError::Network(js.message),
            gloo_net::Error::SerdeError(e) => ApiError::Parse(e.to_string()),
            gloo_net::Error::GlooError(msg) => ApiError::Network(msg),
        }
    }
}

/// Failure of a step in the route workflow
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    #[error("Please enter a dropoff address!")]
    EmptyAddress,

    #[error("no direct route to optimize")]
    NoDirectRoute,

    #[error("routing service returned no route")]
    NoRouteFound,

    /// A clear happened while the request was in flight
    #[error("route result arrived after the map was cleared")]
    Stale,

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Map(#[from] MapError),
}

impl RouteError {
    /// Results that should be dropped without bothering the user
    pub fn is_silent(&self) -> bool {
        match self {
            RouteError::Stale => true,
            RouteError::Api(api) => api.is_aborted(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_prefers_server_message() {
        let err = ApiError::Rejected {
            status: 401,
            message: Some("Invalid credentials".into()),
        };
        assert_eq!(err.user_message("Login failed"), "Invalid credentials");
        assert_eq!(err.to_string(), "HTTP 401: Invalid credentials");
    }

    #[test]
    fn rejection_without_message_uses_fallback() {
        let blank = ApiError::Rejected {
            status: 500,
            message: Some("  ".into()),
        };
        let missing = ApiError::Rejected {
            status: 502,
            message: None,
        };
        assert_eq!(blank.user_message("Login failed"), "Login failed");
        assert_eq!(missing.user_message("Login failed"), "Login failed");
    }

    #[test]
    fn transport_and_credential_messages() {
        assert_eq!(
            ApiError::Network("dns".into()).user_message("x"),
            NETWORK_ERROR_MESSAGE
        );
        assert_eq!(ApiError::MissingToken.user_message("x"), "Please log in first");
    }

    #[test]
    fn stale_and_aborted_routes_are_silent() {
        assert!(RouteError::Stale.is_silent());
        assert!(RouteError::from(ApiError::Aborted).is_silent());
        assert!(!RouteError::NoRouteFound.is_silent());
        assert_eq!(
            RouteError::EmptyAddress.to_string(),
            "Please enter a dropoff address!"
        );
    }
}
