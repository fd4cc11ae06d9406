// ============================================================================
// APP - Screen selection, navigation and session wiring
// ============================================================================

use yew::prelude::*;

use super::{Dashboard, LoginScreen};
use crate::config::CONFIG;
use crate::hooks::SessionProvider;
use crate::models::{Session, UserProfile};
use crate::stores::SessionStore;
use crate::utils::{DASHBOARD_PATH, LOGIN_PATH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Dashboard,
}

impl Screen {
    /// Unknown paths fall back to the login screen
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            DASHBOARD_PATH => Screen::Dashboard,
            _ => Screen::Login,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Screen::Login => LOGIN_PATH,
            Screen::Dashboard => DASHBOARD_PATH,
        }
    }

    /// Screen to actually show, given whether a session exists
    pub fn resolve(self, has_session: bool, guard_dashboard: bool) -> Self {
        match self {
            Screen::Dashboard if guard_dashboard && !has_session => Screen::Login,
            screen => screen,
        }
    }
}

fn current_path() -> String {
    web_sys::window()
        .and_then(|win| win.location().pathname().ok())
        .unwrap_or_else(|| LOGIN_PATH.to_string())
}

fn push_history(screen: Screen) {
    let pushed = web_sys::window()
        .and_then(|win| win.history().ok())
        .map(|history| {
            history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(screen.path()))
        });
    if let Some(Err(e)) = pushed {
        log::warn!("⚠️ Could not push history entry: {:?}", e);
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let store = use_memo((), |_| SessionStore::browser());
    let user = use_state(|| store.read().map(|s| s.user));
    let screen = use_state(|| {
        let requested = Screen::from_path(&current_path());
        let resolved = requested.resolve(store.token().is_some(), CONFIG.guard_dashboard);
        if resolved != requested {
            log::info!("🔒 No session stored, redirecting to login");
            push_history(resolved);
        }
        resolved
    });

    let on_logged_in = {
        let user = user.clone();
        let screen = screen.clone();
        Callback::from(move |session: Session| {
            user.set(Some(session.user));
            push_history(Screen::Dashboard);
            screen.set(Screen::Dashboard);
        })
    };

    let on_logout = {
        let store = store.clone();
        let user = user.clone();
        let screen = screen.clone();
        Callback::from(move |_| {
            store.clear();
            user.set(None::<UserProfile>);
            push_history(Screen::Login);
            screen.set(Screen::Login);
        })
    };

    let content = match *screen {
        Screen::Login => html! { <LoginScreen {on_logged_in} /> },
        Screen::Dashboard => html! { <Dashboard user={(*user).clone()} {on_logout} /> },
    };

    html! {
        <SessionProvider store={(*store).clone()}>
            {content}
        </SessionProvider>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_follows_path() {
        assert_eq!(Screen::from_path("/"), Screen::Login);
        assert_eq!(Screen::from_path("/dashboard"), Screen::Dashboard);
        assert_eq!(Screen::from_path("/dashboard/"), Screen::Dashboard);
        assert_eq!(Screen::from_path("/reports"), Screen::Login);
    }

    #[test]
    fn dashboard_guard_is_opt_in() {
        assert_eq!(Screen::Dashboard.resolve(false, false), Screen::Dashboard);
        assert_eq!(Screen::Dashboard.resolve(false, true), Screen::Login);
        assert_eq!(Screen::Dashboard.resolve(true, true), Screen::Dashboard);
        assert_eq!(Screen::Login.resolve(true, true), Screen::Login);
    }
}
