// ============================================================================
// USE ROUTE MAP HOOK - Map widget lifetime and route workflow state
// ============================================================================
// The workflow (and the map surface it owns) lives in a mut ref so request
// futures can reach it; the Yew states below only mirror what it shows
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::errors::RouteError;
use crate::hooks::use_abort_handle;
use crate::maps::{LeafletSurface, MapSurface, MemorySurface};
use crate::models::Savings;
use crate::services::{FixedOffsetGeocoder, OsrmClient};
use crate::viewmodels::{
    optimize_enabled, RoutePhase, RoutePlanner, RouteWorkflow, WorkflowSettings, CALCULATE_FAILED, OPTIMIZE_FAILED,
};

type SharedWorkflow = Rc<RefCell<Option<RouteWorkflow<Box<dyn MapSurface>>>>>;

/// Leaflet measures its container before the dashboard layout settles
const REFRESH_DELAY_MS: u32 = 200;

/// Dialog currently open over the map
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MapDialog {
    Closed,
    Destination,
    Savings(Savings),
}

#[derive(Clone)]
pub struct UseRouteMapHandle {
    /// Attach to the element the map is drawn into
    pub container: NodeRef,
    pub phase: RoutePhase,
    /// A route request is in flight
    pub busy: bool,
    pub dialog: MapDialog,
    pub destination_error: Option<String>,
    /// Clears the map and asks for a destination
    pub show_on_map: Callback<()>,
    pub calculate: Callback<String>,
    pub optimize: Callback<()>,
    pub close_dialog: Callback<()>,
}

impl UseRouteMapHandle {
    pub fn can_optimize(&self) -> bool {
        optimize_enabled(self.phase, self.busy)
    }
}

#[hook]
pub fn use_route_map(on_savings: Callback<Option<Savings>>) -> UseRouteMapHandle {
    let container = use_node_ref();
    let workflow: SharedWorkflow = use_mut_ref(|| None);
    let abort = use_abort_handle();

    let phase = use_state(|| RoutePhase::Idle);
    let busy = use_state(|| false);
    let dialog = use_state(|| MapDialog::Closed);
    let destination_error = use_state(|| None::<String>);

    // Mount the map once the container exists, dispose it on unmount
    {
        let workflow = workflow.clone();
        let container = container.clone();
        use_effect_with((), move |_| {
            let surface = mount_surface(&container);
            *workflow.borrow_mut() = Some(RouteWorkflow::new(
                surface,
                WorkflowSettings::from_config(&CONFIG),
            ));

            let refresh = {
                let workflow = workflow.clone();
                Timeout::new(REFRESH_DELAY_MS, move || {
                    if let Some(wf) = workflow.borrow().as_ref() {
                        wf.surface().refresh_size();
                    }
                })
            };

            move || {
                drop(refresh);
                workflow.borrow_mut().take();
            }
        });
    }

    let show_on_map = {
        let workflow = workflow.clone();
        let phase = phase.clone();
        let busy = busy.clone();
        let dialog = dialog.clone();
        let destination_error = destination_error.clone();
        let on_savings = on_savings.clone();
        Callback::from(move |_| {
            if let Some(wf) = workflow.borrow_mut().as_mut() {
                wf.clear();
            }
            phase.set(RoutePhase::Idle);
            busy.set(false);
            on_savings.emit(None);
            destination_error.set(None);
            dialog.set(MapDialog::Destination);
        })
    };

    let calculate = {
        let workflow = workflow.clone();
        let abort = abort.clone();
        let phase = phase.clone();
        let busy = busy.clone();
        let dialog = dialog.clone();
        let destination_error = destination_error.clone();
        let on_savings = on_savings.clone();
        Callback::from(move |address: String| {
            let address = address.trim().to_string();
            if address.is_empty() {
                destination_error.set(Some(RouteError::EmptyAddress.to_string()));
                return;
            }

            let ticket = match workflow.borrow_mut().as_mut() {
                Some(wf) => wf.begin_run(),
                None => {
                    log::warn!("⚠️ Map not mounted yet, route not calculated");
                    return;
                }
            };

            dialog.set(MapDialog::Closed);
            destination_error.set(None);
            phase.set(RoutePhase::Idle);
            busy.set(true);
            on_savings.emit(None);

            log::info!("🗺️ Calculating route to {}", address);
            let workflow = workflow.clone();
            let phase = phase.clone();
            let busy = busy.clone();
            let routing = OsrmClient::new().with_signal(abort.signal());
            wasm_bindgen_futures::spawn_local(async move {
                let geocoder = FixedOffsetGeocoder::from_config(&CONFIG.route_config);
                let planner = RoutePlanner::new(&routing, &geocoder, CONFIG.map_config.depot());

                let result = match planner.direct(&address).await {
                    Ok(route) => with_workflow(&workflow, |wf| {
                        wf.show_direct(ticket, route).map(|()| wf.phase())
                    }),
                    Err(e) => Err(e),
                };

                match result {
                    Ok(shown) => {
                        phase.set(shown);
                        busy.set(false);
                    }
                    Err(e) if e.is_silent() => log::debug!("Route result dropped: {}", e),
                    Err(e) => {
                        log::error!("❌ Error calculating route: {}", e);
                        busy.set(false);
                        alert(CALCULATE_FAILED);
                    }
                }
            });
        })
    };

    let optimize = {
        let workflow = workflow.clone();
        let phase = phase.clone();
        let busy = busy.clone();
        let dialog = dialog.clone();
        Callback::from(move |_| {
            if *busy {
                return;
            }
            let begun = workflow.borrow().as_ref().map(RouteWorkflow::begin_optimize);
            let (ticket, direct) = match begun {
                Some(Ok(run)) => run,
                Some(Err(e)) => {
                    log::warn!("⚠️ Optimize ignored: {}", e);
                    return;
                }
                None => return,
            };

            busy.set(true);
            log::info!("🟢 Optimizing route...");
            let workflow = workflow.clone();
            let phase = phase.clone();
            let busy = busy.clone();
            let dialog = dialog.clone();
            let on_savings = on_savings.clone();
            let routing = OsrmClient::new().with_signal(abort.signal());
            wasm_bindgen_futures::spawn_local(async move {
                let geocoder = FixedOffsetGeocoder::from_config(&CONFIG.route_config);
                let planner = RoutePlanner::new(&routing, &geocoder, CONFIG.map_config.depot());

                let result = match planner.optimized(&direct).await {
                    Ok(route) => with_workflow(&workflow, |wf| wf.show_optimized(ticket, route)),
                    Err(e) => Err(e),
                };

                match result {
                    Ok(savings) => {
                        phase.set(RoutePhase::OptimizedShown);
                        busy.set(false);
                        on_savings.emit(Some(savings));
                        dialog.set(MapDialog::Savings(savings));
                    }
                    Err(e) if e.is_silent() => log::debug!("Optimized route dropped: {}", e),
                    Err(e) => {
                        log::error!("❌ Error optimizing route: {}", e);
                        busy.set(false);
                        alert(OPTIMIZE_FAILED);
                    }
                }
            });
        })
    };

    let close_dialog = {
        let dialog = dialog.clone();
        let destination_error = destination_error.clone();
        Callback::from(move |_| {
            destination_error.set(None);
            dialog.set(MapDialog::Closed);
        })
    };

    UseRouteMapHandle {
        container,
        phase: *phase,
        busy: *busy,
        dialog: *dialog,
        destination_error: (*destination_error).clone(),
        show_on_map,
        calculate,
        optimize,
        close_dialog,
    }
}

fn mount_surface(container: &NodeRef) -> Box<dyn MapSurface> {
    let Some(element) = container.cast::<HtmlElement>() else {
        log::warn!("⚠️ Map container missing, routes will not be drawn");
        return Box::new(MemorySurface::new());
    };
    match LeafletSurface::mount(&element, &CONFIG.map_config) {
        Ok(surface) => Box::new(surface),
        Err(e) => {
            log::warn!("⚠️ Map widget unavailable ({}), routes will not be drawn", e);
            Box::new(MemorySurface::new())
        }
    }
}

/// Runs `f` on the mounted workflow; an unmounted map counts as a stale run
fn with_workflow<T>(
    workflow: &SharedWorkflow,
    f: impl FnOnce(&mut RouteWorkflow<Box<dyn MapSurface>>) -> Result<T, RouteError>,
) -> Result<T, RouteError> {
    workflow.borrow_mut().as_mut().map_or(Err(RouteError::Stale), f)
}

fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}
