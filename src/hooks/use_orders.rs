use yew::prelude::*;

use crate::models::OrderTally;
use crate::services::PlaceholderTallies;
use crate::stores::LoadState;
use crate::viewmodels::OrdersViewModel;

/// Order counters, fetched once on mount
#[hook]
pub fn use_orders() -> UseStateHandle<LoadState<OrderTally>> {
    let state = use_state(LoadState::<OrderTally>::default);

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let source = PlaceholderTallies::default();
                if let Some(loaded) = OrdersViewModel::load(&source).await {
                    state.set(loaded);
                }
            });
            || ()
        });
    }

    state
}
