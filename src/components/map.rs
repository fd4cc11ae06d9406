// ============================================================================
// MAP COMPONENT - Live map with the route workflow controls
// ============================================================================

use yew::prelude::*;

use super::{DestinationDialog, OptimizeButton, SavingsDialog, ShowMapButton};
use crate::hooks::{use_route_map, MapDialog};
use crate::models::Savings;
use crate::utils::MAP_CONTAINER_ID;

#[derive(Properties, PartialEq)]
pub struct MapProps {
    /// Savings after every optimization, `None` whenever the map is cleared
    pub on_savings: Callback<Option<Savings>>,
}

#[function_component(Map)]
pub fn map(props: &MapProps) -> Html {
    let route_map = use_route_map(props.on_savings.clone());

    let dialog = match route_map.dialog {
        MapDialog::Closed => html! {},
        MapDialog::Destination => html! {
            <DestinationDialog
                on_submit={route_map.calculate.clone()}
                on_close={route_map.close_dialog.clone()}
                error={route_map.destination_error.clone()}
            />
        },
        MapDialog::Savings(savings) => html! {
            <SavingsDialog savings={savings} on_close={route_map.close_dialog.clone()} />
        },
    };

    html! {
        <section class={classes!("map", route_map.busy.then_some("busy"))}>
            <ShowMapButton on_click={route_map.show_on_map.clone()} />
            <div id={MAP_CONTAINER_ID} ref={route_map.container.clone()} class="map-container"></div>
            <OptimizeButton
                on_click={route_map.optimize.clone()}
                disabled={!route_map.can_optimize()}
            />
            {dialog}
        </section>
    }
}
