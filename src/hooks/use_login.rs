// ============================================================================
// USE LOGIN HOOK - Login form state
// ============================================================================
// Validation and submission live in LoginViewModel; this hook only owns
// the Yew state and the request's lifetime
// ============================================================================

use yew::prelude::*;

use crate::hooks::{use_abort_handle, use_session_store};
use crate::models::Session;
use crate::services::ApiClient;
use crate::viewmodels::{LoginFormErrors, LoginOutcome, LoginViewModel};

#[derive(Clone, Default, PartialEq)]
pub struct LoginState {
    pub errors: LoginFormErrors,
    /// Message from the last failed attempt
    pub server_error: Option<String>,
    pub submitting: bool,
}

pub struct UseLoginHandle {
    pub state: UseStateHandle<LoginState>,
    /// `(email, password)` as typed
    pub submit: Callback<(String, String)>,
}

#[hook]
pub fn use_login(on_logged_in: Callback<Session>) -> UseLoginHandle {
    let state = use_state(LoginState::default);
    let sessions = use_session_store();
    let abort = use_abort_handle();

    let submit = {
        let state = state.clone();
        Callback::from(move |(email, password): (String, String)| {
            if state.submitting {
                return;
            }

            let credentials = match LoginViewModel::validate(email.trim(), &password) {
                Ok(credentials) => credentials,
                Err(errors) => {
                    state.set(LoginState {
                        errors,
                        server_error: None,
                        submitting: false,
                    });
                    return;
                }
            };

            state.set(LoginState {
                submitting: true,
                ..LoginState::default()
            });

            log::info!("🔐 Signing in {}", credentials.email);
            let state = state.clone();
            let sessions = sessions.clone();
            let client = ApiClient::new().with_signal(abort.signal());
            let on_logged_in = on_logged_in.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match LoginViewModel::submit(&client, &sessions, &credentials).await {
                    LoginOutcome::LoggedIn(session) => {
                        log::info!("✅ Logged in as {}", session.user.display_name());
                        state.set(LoginState::default());
                        on_logged_in.emit(session);
                    }
                    LoginOutcome::Failed(message) => {
                        log::error!("❌ Login failed: {}", message);
                        state.set(LoginState {
                            server_error: Some(message),
                            ..LoginState::default()
                        });
                    }
                    LoginOutcome::Cancelled => log::debug!("Login request cancelled"),
                }
            });
        })
    };

    UseLoginHandle { state, submit }
}
