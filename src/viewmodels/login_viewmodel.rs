// ============================================================================
// LOGIN VIEWMODEL - Form validation and login submission
// ============================================================================
// Returns outcomes; the hook turns them into view state and navigation
// ============================================================================

use regex::Regex;

use crate::errors::ApiError;
use crate::models::{LoginCredentials, Session};
use crate::services::AuthService;
use crate::stores::SessionStore;

pub const LOGIN_FAILED: &str = "Login failed";

lazy_static::lazy_static! {
    static ref EMAIL_PATTERN: Regex =
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern compiles");
}

pub const PASSWORD_MIN_LEN: usize = 6;

/// Per-field validation messages; `None` means the field is valid
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginFormErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl LoginFormErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    LoggedIn(Session),
    Failed(String),
    /// Screen went away before the answer came back
    Cancelled,
}

pub struct LoginViewModel;

impl LoginViewModel {
    /// Client-side checks run before any request is made
    pub fn validate(email: &str, password: &str) -> Result<LoginCredentials, LoginFormErrors> {
        let mut errors = LoginFormErrors::default();

        if email.is_empty() {
            errors.email = Some("Email is required");
        } else if !EMAIL_PATTERN.is_match(email) {
            errors.email = Some("Please enter a valid email");
        }

        if password.is_empty() {
            errors.password = Some("Password is required");
        } else if password.chars().count() < PASSWORD_MIN_LEN {
            errors.password = Some("Password must be at least 6 characters");
        }

        if errors.is_empty() {
            Ok(LoginCredentials {
                email: email.to_string(),
                password: password.to_string(),
            })
        } else {
            Err(errors)
        }
    }

    /// Sends exactly one login request and persists the session on success
    pub async fn submit(
        auth: &dyn AuthService,
        sessions: &SessionStore,
        credentials: &LoginCredentials,
    ) -> LoginOutcome {
        let response = match auth.login(credentials).await {
            Ok(response) => response,
            Err(ApiError::Aborted) => return LoginOutcome::Cancelled,
            Err(e) => return LoginOutcome::Failed(e.user_message(LOGIN_FAILED)),
        };

        let token = match response.token.filter(|t| !t.is_empty()) {
            Some(token) => token,
            None => {
                let message = response
                    .message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| LOGIN_FAILED.to_string());
                return LoginOutcome::Failed(message);
            }
        };
        let user = response.user.unwrap_or_default();

        if let Err(e) = sessions.save(&token, &user) {
            log::error!("❌ Could not persist session: {}", e);
            return LoginOutcome::Failed(LOGIN_FAILED.to_string());
        }

        LoginOutcome::LoggedIn(Session { token, user })
    }
}
