// ============================================================================
// SESSION STORE - Token and profile persisted across reloads
// ============================================================================
// Injected through a Yew context; never read from a global
// ============================================================================

use std::rc::Rc;

use crate::models::{Session, UserProfile};
use crate::utils::{KeyValueStore, LocalStore, MemoryStore, STORAGE_KEY_TOKEN, STORAGE_KEY_USER};

#[derive(Clone)]
pub struct SessionStore {
    storage: Rc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(storage: Rc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    /// localStorage when the browser allows it, memory otherwise
    pub fn browser() -> Self {
        match LocalStore::open() {
            Some(local) => Self::new(Rc::new(local)),
            None => {
                log::warn!("⚠️ localStorage unavailable, session will not survive a reload");
                Self::new(Rc::new(MemoryStore::new()))
            }
        }
    }

    /// Persists the token verbatim and the profile as JSON
    pub fn save(&self, token: &str, user: &UserProfile) -> Result<(), String> {
        let user_json = serde_json::to_string(user)
            .map_err(|e| format!("Error serializing user: {}", e))?;
        self.storage.set(STORAGE_KEY_TOKEN, token)?;
        self.storage.set(STORAGE_KEY_USER, &user_json)?;
        log::info!("💾 Session saved for {}", user.display_name());
        Ok(())
    }

    /// `None` means "not logged in". A missing or unreadable profile does
    /// not invalidate a stored token.
    pub fn read(&self) -> Option<Session> {
        let token = self.token()?;
        let user = self
            .storage
            .get(STORAGE_KEY_USER)
            .and_then(|json| match serde_json::from_str::<UserProfile>(&json) {
                Ok(user) => Some(user),
                Err(e) => {
                    log::warn!("⚠️ Stored user profile unreadable: {}", e);
                    None
                }
            })
            .unwrap_or_default();
        Some(Session { token, user })
    }

    pub fn token(&self) -> Option<String> {
        self.storage
            .get(STORAGE_KEY_TOKEN)
            .filter(|token| !token.is_empty())
    }

    pub fn clear(&self) {
        self.storage.remove(STORAGE_KEY_TOKEN);
        self.storage.remove(STORAGE_KEY_USER);
        log::info!("👋 Session cleared");
    }
}

impl PartialEq for SessionStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.storage, &other.storage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (SessionStore, Rc<MemoryStore>) {
        let memory = Rc::new(MemoryStore::new());
        (SessionStore::new(memory.clone()), memory)
    }

    #[test]
    fn empty_store_is_logged_out() {
        let (sessions, _) = store();
        assert_eq!(sessions.read(), None);
    }

    #[test]
    fn save_then_read_returns_same_session() {
        let (sessions, memory) = store();
        let user = UserProfile {
            name: Some("Achieng".into()),
            email: Some("dispatcher@greenwells.com".into()),
            ..Default::default()
        };
        sessions.save("jwt-123", &user).unwrap();

        assert_eq!(memory.get("token").as_deref(), Some("jwt-123"));
        let session = sessions.read().unwrap();
        assert_eq!(session.token, "jwt-123");
        assert_eq!(session.user, user);
        assert_eq!(session.bearer(), "Bearer jwt-123");
    }

    #[test]
    fn corrupt_profile_keeps_token() {
        let (sessions, memory) = store();
        memory.set("token", "jwt-123").unwrap();
        memory.set("user", "{not json").unwrap();
        let session = sessions.read().unwrap();
        assert_eq!(session.token, "jwt-123");
        assert_eq!(session.user, UserProfile::default());
    }

    #[test]
    fn clear_removes_both_keys() {
        let (sessions, memory) = store();
        sessions.save("jwt-123", &UserProfile::default()).unwrap();
        sessions.clear();
        assert_eq!(sessions.read(), None);
        assert_eq!(memory.get("user"), None);
    }
}
