// ============================================================================
// SESSION CONTEXT - Share the SessionStore between components
// ============================================================================
// Uses Yew's Context API so every widget gets the store as a dependency
// ============================================================================

use yew::prelude::*;

use crate::stores::SessionStore;

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub store: SessionStore,
    pub children: Children,
}

/// Provider component wrapping the app
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    html! {
        <ContextProvider<SessionStore> context={props.store.clone()}>
            {props.children.clone()}
        </ContextProvider<SessionStore>>
    }
}

/// Store from the nearest provider. Outside a provider (isolated widget
/// rendering) falls back to a browser store of its own.
#[hook]
pub fn use_session_store() -> SessionStore {
    let from_context = use_context::<SessionStore>();
    let has_provider = from_context.is_some();
    let fallback = use_memo((), move |_| {
        if !has_provider {
            log::warn!("⚠️ No SessionProvider above this component, using browser storage directly");
        }
        SessionStore::browser()
    });
    from_context.unwrap_or_else(|| (*fallback).clone())
}
