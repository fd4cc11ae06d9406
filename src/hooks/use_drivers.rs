use yew::prelude::*;

use crate::hooks::{use_abort_handle, use_session_store};
use crate::services::ApiClient;
use crate::stores::LoadState;
use crate::viewmodels::{DriverRoster, DriversViewModel};

/// Driver roster, fetched once on mount
#[hook]
pub fn use_drivers() -> UseStateHandle<LoadState<DriverRoster>> {
    let state = use_state(LoadState::<DriverRoster>::default);
    let sessions = use_session_store();
    let abort = use_abort_handle();

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            log::info!("🚚 Loading drivers...");
            let client = ApiClient::new().with_signal(abort.signal());
            wasm_bindgen_futures::spawn_local(async move {
                if let Some(loaded) = DriversViewModel::load(&client, &sessions).await {
                    if let Some(roster) = loaded.loaded() {
                        log::info!("✅ Drivers loaded: {}", roster.drivers.len());
                    }
                    state.set(loaded);
                }
            });
            || ()
        });
    }

    state
}
