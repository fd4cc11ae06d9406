// ============================================================================
// DRIVERS VIEWMODEL - Driver roster fetch and table rows
// ============================================================================

use chrono::{DateTime, Utc};

use crate::errors::ApiError;
use crate::models::Driver;
use crate::services::DriverService;
use crate::stores::{LoadState, SessionStore};

pub const LOADING_DRIVERS: &str = "Loading drivers...";
pub const DRIVERS_FAILED: &str = "Failed to load drivers. Please try again.";
pub const NO_DRIVERS: &str = "No drivers found";

#[derive(Debug, Clone, PartialEq)]
pub struct DriverRoster {
    pub drivers: Vec<Driver>,
    pub fetched_at: DateTime<Utc>,
}

/// One body row of the drivers table
#[derive(Debug, Clone, PartialEq)]
pub enum DriverRow {
    Driver {
        name: String,
        employee_id: String,
        status: String,
    },
    /// Full-width informational row; `is_error` renders it in red
    Message { text: String, is_error: bool },
}

pub struct DriversViewModel;

impl DriversViewModel {
    /// Fetches the roster once. No token means no request at all.
    /// Returns `None` when the request was aborted by an unmount.
    pub async fn load(
        service: &dyn DriverService,
        sessions: &SessionStore,
    ) -> Option<LoadState<DriverRoster>> {
        let Some(session) = sessions.read() else {
            log::warn!("⚠️ No token stored, drivers not requested");
            return Some(LoadState::Failed(ApiError::MissingToken.user_message(DRIVERS_FAILED)));
        };

        match service.fetch_drivers(&session).await {
            Ok(drivers) => Some(LoadState::Loaded(DriverRoster {
                drivers,
                fetched_at: Utc::now(),
            })),
            Err(ApiError::Aborted) => {
                log::debug!("Driver request aborted");
                None
            }
            Err(e) => {
                log::error!("❌ Error fetching drivers: {}", e);
                Some(LoadState::Failed(DRIVERS_FAILED.to_string()))
            }
        }
    }

    /// Table body for a given state. Never empty.
    pub fn rows(state: &LoadState<DriverRoster>) -> Vec<DriverRow> {
        match state {
            LoadState::Loading => vec![DriverRow::Message {
                text: LOADING_DRIVERS.to_string(),
                is_error: false,
            }],
            LoadState::Failed(message) => vec![DriverRow::Message {
                text: message.clone(),
                is_error: true,
            }],
            LoadState::Loaded(roster) if roster.drivers.is_empty() => vec![DriverRow::Message {
                text: NO_DRIVERS.to_string(),
                is_error: false,
            }],
            LoadState::Loaded(roster) => roster
                .drivers
                .iter()
                .map(|d| DriverRow::Driver {
                    name: d.name.clone(),
                    employee_id: d.display_employee_id(),
                    status: d.status.clone(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Session, UserProfile};
    use crate::utils::MemoryStore;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use std::cell::Cell;
    use std::rc::Rc;

    struct FakeDrivers {
        answer: Result<Vec<Driver>, ApiError>,
        calls: Cell<usize>,
    }

    impl FakeDrivers {
        fn answering(answer: Result<Vec<Driver>, ApiError>) -> Self {
            Self {
                answer,
                calls: Cell::new(0),
            }
        }
    }

    #[async_trait(?Send)]
    impl DriverService for FakeDrivers {
        async fn fetch_drivers(&self, session: &Session) -> Result<Vec<Driver>, ApiError> {
            assert_eq!(session.bearer(), "Bearer jwt-abc");
            self.calls.set(self.calls.get() + 1);
            self.answer.clone()
        }
    }

    fn logged_in() -> SessionStore {
        let store = SessionStore::new(Rc::new(MemoryStore::new()));
        store.save("jwt-abc", &UserProfile::default()).unwrap();
        store
    }

    fn otieno() -> Driver {
        Driver {
            id: "6650c2e9f1a2b3c4d5e6f708".into(),
            name: "Otieno".into(),
            employee_id: None,
            status: "On delivery".into(),
        }
    }

    #[test]
    fn no_token_asks_to_log_in_without_requesting() {
        let service = FakeDrivers::answering(Ok(vec![otieno()]));
        let anonymous = SessionStore::new(Rc::new(MemoryStore::new()));

        let state = block_on(DriversViewModel::load(&service, &anonymous)).unwrap();

        assert_eq!(state, LoadState::Failed("Please log in first".into()));
        assert_eq!(service.calls.get(), 0);
        assert_eq!(
            DriversViewModel::rows(&state),
            vec![DriverRow::Message {
                text: "Please log in first".into(),
                is_error: true
            }]
        );
    }

    #[test]
    fn empty_roster_renders_explicit_row() {
        let service = FakeDrivers::answering(Ok(vec![]));
        let state = block_on(DriversViewModel::load(&service, &logged_in())).unwrap();

        assert_eq!(service.calls.get(), 1);
        assert_eq!(
            DriversViewModel::rows(&state),
            vec![DriverRow::Message {
                text: NO_DRIVERS.into(),
                is_error: false
            }]
        );
    }

    #[test]
    fn drivers_become_rows() {
        let service = FakeDrivers::answering(Ok(vec![otieno()]));
        let state = block_on(DriversViewModel::load(&service, &logged_in())).unwrap();
        assert_eq!(
            DriversViewModel::rows(&state),
            vec![DriverRow::Driver {
                name: "Otieno".into(),
                employee_id: "d5e6f708".into(),
                status: "On delivery".into(),
            }]
        );
    }

    #[test]
    fn backend_failure_shows_generic_message() {
        let service = FakeDrivers::answering(Err(ApiError::Rejected {
            status: 500,
            message: Some("boom".into()),
        }));
        let state = block_on(DriversViewModel::load(&service, &logged_in())).unwrap();
        assert_eq!(state.error(), Some(DRIVERS_FAILED));
    }

    #[test]
    fn aborted_fetch_leaves_state_alone() {
        let service = FakeDrivers::answering(Err(ApiError::Aborted));
        assert_eq!(block_on(DriversViewModel::load(&service, &logged_in())), None);
    }

    #[test]
    fn loading_row() {
        assert_eq!(
            DriversViewModel::rows(&LoadState::Loading),
            vec![DriverRow::Message {
                text: LOADING_DRIVERS.into(),
                is_error: false
            }]
        );
    }
}
