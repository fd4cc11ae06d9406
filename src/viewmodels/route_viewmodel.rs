// ============================================================================
// ROUTE VIEWMODEL - Direct route, optimized route and savings
// ============================================================================
// idle -> direct shown -> optimized shown; clear() returns to idle from
// anywhere. Requests are planned without touching the map so a failure
// never leaves a half-drawn route behind.
// ============================================================================

use crate::config::AppConfig;
use crate::errors::RouteError;
use crate::maps::{LineStyle, MapSurface, OverlayId};
use crate::models::{Coordinates, Route, Savings};
use crate::services::{GeocodingService, RouteLeg, RoutingService};

pub const CALCULATE_FAILED: &str = "Error calculating route. Please try again.";
pub const OPTIMIZE_FAILED: &str = "Error optimizing route. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutePhase {
    Idle,
    DirectShown,
    OptimizedShown,
}

/// Whether the optimize control accepts clicks
pub fn optimize_enabled(phase: RoutePhase, busy: bool) -> bool {
    phase != RoutePhase::Idle && !busy
}

/// Identifies the run a pending request belongs to. Every clear starts a
/// new run, so answers for an older one are refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkflowSettings {
    pub origin: Coordinates,
    pub fuel_litres_per_km: f64,
    pub waypoint_step: f64,
}

impl WorkflowSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            origin: config.map_config.depot(),
            fuel_litres_per_km: config.route_config.fuel_litres_per_km,
            waypoint_step: config.route_config.waypoint_step,
        }
    }

    /// Marker position for the waypoint at `index`, pending real geocoding
    pub fn waypoint_position(&self, index: usize) -> Coordinates {
        self.origin.offset((index + 1) as f64 * self.waypoint_step)
    }
}

/// Resolves destinations and fetches routes. Holds no view state.
pub struct RoutePlanner<'a> {
    routing: &'a dyn RoutingService,
    geocoder: &'a dyn GeocodingService,
    origin: Coordinates,
}

impl<'a> RoutePlanner<'a> {
    pub fn new(
        routing: &'a dyn RoutingService,
        geocoder: &'a dyn GeocodingService,
        origin: Coordinates,
    ) -> Self {
        Self {
            routing,
            geocoder,
            origin,
        }
    }

    /// Route from the depot to `address`, labelled with the address
    pub async fn direct(&self, address: &str) -> Result<Route, RouteError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(RouteError::EmptyAddress);
        }
        let destination = self
            .geocoder
            .geocode(self.origin, address, RouteLeg::Direct)
            .await?;
        let route = self.routing.route(self.origin, destination).await?;
        Ok(route.with_waypoint(address))
    }

    /// Optimized alternative serving the same stops as `direct`
    pub async fn optimized(&self, direct: &Route) -> Result<Route, RouteError> {
        let address = direct.waypoints.first().ok_or(RouteError::NoDirectRoute)?;
        let destination = self
            .geocoder
            .geocode(self.origin, address, RouteLeg::Optimized)
            .await?;
        let mut route = self.routing.route(self.origin, destination).await?;
        route.waypoints = direct.waypoints.clone();
        Ok(route)
    }
}

#[derive(Debug)]
struct DrawnRoute {
    route: Route,
    overlay: OverlayId,
}

/// Owns the map surface and every overlay the workflow draws on it
pub struct RouteWorkflow<M: MapSurface> {
    surface: M,
    settings: WorkflowSettings,
    direct: Option<DrawnRoute>,
    optimized: Option<DrawnRoute>,
    markers: Vec<OverlayId>,
    savings: Option<Savings>,
    generation: u64,
}

impl<M: MapSurface> RouteWorkflow<M> {
    pub fn new(surface: M, settings: WorkflowSettings) -> Self {
        Self {
            surface,
            settings,
            direct: None,
            optimized: None,
            markers: Vec::new(),
            savings: None,
            generation: 0,
        }
    }

    pub fn phase(&self) -> RoutePhase {
        match (&self.direct, &self.optimized) {
            (None, _) => RoutePhase::Idle,
            (Some(_), None) => RoutePhase::DirectShown,
            (Some(_), Some(_)) => RoutePhase::OptimizedShown,
        }
    }

    /// The optimize control is enabled exactly when this is true
    pub fn can_optimize(&self) -> bool {
        self.direct.is_some()
    }

    pub fn direct_route(&self) -> Option<&Route> {
        self.direct.as_ref().map(|d| &d.route)
    }

    pub fn optimized_route(&self) -> Option<&Route> {
        self.optimized.as_ref().map(|d| &d.route)
    }

    pub fn savings(&self) -> Option<Savings> {
        self.savings
    }

    pub fn settings(&self) -> &WorkflowSettings {
        &self.settings
    }

    pub fn surface(&self) -> &M {
        &self.surface
    }

    pub fn ticket(&self) -> RunTicket {
        RunTicket(self.generation)
    }

    /// Removes every overlay (base tiles stay) and forgets routes and savings
    pub fn clear(&mut self) {
        self.surface.clear_overlays();
        self.direct = None;
        self.optimized = None;
        self.markers.clear();
        self.savings = None;
        self.generation += 1;
        log::debug!("🧹 Routes cleared (run {})", self.generation);
    }

    /// Clears and hands out the ticket for a new direct-route request
    pub fn begin_run(&mut self) -> RunTicket {
        self.clear();
        self.ticket()
    }

    /// Ticket and direct route needed to plan the optimized one
    pub fn begin_optimize(&self) -> Result<(RunTicket, Route), RouteError> {
        let direct = self.direct_route().ok_or(RouteError::NoDirectRoute)?;
        Ok((self.ticket(), direct.clone()))
    }

    /// Draws `route` as the direct route, replacing anything drawn before
    pub fn show_direct(&mut self, ticket: RunTicket, route: Route) -> Result<(), RouteError> {
        self.check_ticket(ticket)?;

        let overlay = self.surface.add_polyline(&route.path, &LineStyle::DIRECT)?;

        let previous: Vec<OverlayId> = self
            .direct
            .take()
            .map(|d| d.overlay)
            .into_iter()
            .chain(self.take_optimized_overlays())
            .collect();
        self.remove_all(previous);

        log::info!(
            "🔴 Direct route drawn: {:.2} km, {:.1} min",
            route.distance_km(),
            route.duration_minutes()
        );
        self.direct = Some(DrawnRoute { route, overlay });
        Ok(())
    }

    /// Draws `route` as the optimized route with one marker per waypoint and
    /// computes the savings against the direct route
    pub fn show_optimized(&mut self, ticket: RunTicket, route: Route) -> Result<Savings, RouteError> {
        self.check_ticket(ticket)?;

        let (waypoints, savings) = match &self.direct {
            Some(direct) => (
                direct.route.waypoints.clone(),
                Savings::between(&direct.route, &route, self.settings.fuel_litres_per_km),
            ),
            None => return Err(RouteError::NoDirectRoute),
        };

        let overlay = self.surface.add_polyline(&route.path, &LineStyle::OPTIMIZED)?;
        let mut markers = Vec::with_capacity(waypoints.len());
        for (index, label) in waypoints.iter().enumerate() {
            let at = self.settings.waypoint_position(index);
            match self.surface.add_marker(at, label) {
                Ok(id) => markers.push(id),
                Err(e) => {
                    markers.push(overlay);
                    self.remove_all(markers);
                    return Err(e.into());
                }
            }
        }

        let previous = self.take_optimized_overlays();
        self.remove_all(previous);

        log::info!(
            "🟢 Optimized route drawn: saves {} km / {} L",
            savings.distance_km,
            savings.fuel_l
        );
        self.optimized = Some(DrawnRoute { route, overlay });
        self.markers = markers;
        self.savings = Some(savings);
        Ok(savings)
    }

    /// Clear, plan and draw the direct route in one go
    pub async fn calculate_route(
        &mut self,
        planner: &RoutePlanner<'_>,
        address: &str,
    ) -> Result<(), RouteError> {
        let ticket = self.begin_run();
        let route = planner.direct(address).await?;
        self.show_direct(ticket, route)
    }

    /// Plan and draw the optimized route in one go
    pub async fn optimize(&mut self, planner: &RoutePlanner<'_>) -> Result<Savings, RouteError> {
        let (ticket, direct) = self.begin_optimize()?;
        let route = planner.optimized(&direct).await?;
        self.show_optimized(ticket, route)
    }

    fn check_ticket(&self, ticket: RunTicket) -> Result<(), RouteError> {
        if ticket == self.ticket() {
            Ok(())
        } else {
            Err(RouteError::Stale)
        }
    }

    fn take_optimized_overlays(&mut self) -> Vec<OverlayId> {
        self.savings = None;
        self.optimized
            .take()
            .map(|o| o.overlay)
            .into_iter()
            .chain(self.markers.drain(..))
            .collect()
    }

    fn remove_all(&mut self, overlays: Vec<OverlayId>) {
        for id in overlays {
            if let Err(e) = self.surface.remove_overlay(id) {
                log::warn!("⚠️ Could not remove overlay: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ApiError;
    use crate::maps::{MapError, MemorySurface};
    use crate::services::FixedOffsetGeocoder;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    const DEPOT: Coordinates = Coordinates {
        lat: -0.1022,
        lng: 34.7617,
    };

    /// Answers with a straight two-point route whose length depends on
    /// which placeholder destination was asked for
    struct FakeRouting {
        direct_m: f64,
        optimized_m: f64,
        fail: Cell<bool>,
        requests: RefCell<Vec<(Coordinates, Coordinates)>>,
    }

    impl FakeRouting {
        fn new(direct_m: f64, optimized_m: f64) -> Self {
            Self {
                direct_m,
                optimized_m,
                fail: Cell::new(false),
                requests: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl RoutingService for FakeRouting {
        async fn route(&self, from: Coordinates, to: Coordinates) -> Result<Route, RouteError> {
            self.requests.borrow_mut().push((from, to));
            if self.fail.get() {
                return Err(ApiError::Network("Failed to fetch".into()).into());
            }
            let direct = (to.lat - from.lat - 0.01).abs() < 1e-9;
            Ok(Route {
                path: vec![from, to],
                distance_m: if direct { self.direct_m } else { self.optimized_m },
                duration_s: 300.0,
                waypoints: vec![],
            })
        }
    }

    /// Surface that refuses markers, to exercise rollback
    #[derive(Default)]
    struct NoMarkerSurface(MemorySurface);

    impl MapSurface for NoMarkerSurface {
        fn add_polyline(&mut self, path: &[Coordinates], style: &LineStyle) -> Result<OverlayId, MapError> {
            self.0.add_polyline(path, style)
        }
        fn add_marker(&mut self, _at: Coordinates, _label: &str) -> Result<OverlayId, MapError> {
            Err(MapError::Widget("marker icon missing".into()))
        }
        fn remove_overlay(&mut self, id: OverlayId) -> Result<(), MapError> {
            self.0.remove_overlay(id)
        }
        fn clear_overlays(&mut self) {
            self.0.clear_overlays()
        }
        fn overlay_count(&self) -> usize {
            self.0.overlay_count()
        }
    }

    fn settings() -> WorkflowSettings {
        WorkflowSettings {
            origin: DEPOT,
            fuel_litres_per_km: 0.08,
            waypoint_step: 0.002,
        }
    }

    fn workflow() -> RouteWorkflow<MemorySurface> {
        RouteWorkflow::new(MemorySurface::new(), settings())
    }

    #[test]
    fn starts_idle_with_optimize_disabled() {
        let wf = workflow();
        assert_eq!(wf.phase(), RoutePhase::Idle);
        assert!(!wf.can_optimize());
        assert_eq!(wf.savings(), None);
    }

    #[test]
    fn direct_then_optimize_computes_savings() {
        let routing = FakeRouting::new(2480.0, 1960.0);
        let geocoder = FixedOffsetGeocoder::default();
        let planner = RoutePlanner::new(&routing, &geocoder, DEPOT);
        let mut wf = workflow();

        block_on(wf.calculate_route(&planner, "Kondele Market")).unwrap();
        assert_eq!(wf.phase(), RoutePhase::DirectShown);
        assert!(wf.can_optimize());
        assert_eq!(
            wf.direct_route().unwrap().waypoints,
            vec!["Kondele Market".to_string()]
        );
        assert_eq!(wf.surface().polylines(), vec![&LineStyle::DIRECT]);

        let savings = block_on(wf.optimize(&planner)).unwrap();
        assert_eq!(wf.phase(), RoutePhase::OptimizedShown);
        assert_eq!(savings.distance_km, 0.52);
        assert_eq!(savings.fuel_l, 0.04);
        assert_eq!(wf.savings(), Some(savings));

        let requests = routing.requests.borrow();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0], (DEPOT, DEPOT.offset(0.01)));
        assert_eq!(requests[1], (DEPOT, DEPOT.offset(0.008)));

        let surface = wf.surface();
        assert_eq!(
            surface.polylines(),
            vec![&LineStyle::DIRECT, &LineStyle::OPTIMIZED]
        );
        assert_eq!(
            surface.markers(),
            vec![(DEPOT.offset(0.002), "Kondele Market")]
        );
    }

    #[test]
    fn optimize_without_direct_route_is_refused() {
        let routing = FakeRouting::new(2480.0, 1960.0);
        let geocoder = FixedOffsetGeocoder::default();
        let planner = RoutePlanner::new(&routing, &geocoder, DEPOT);
        let mut wf = workflow();

        assert_eq!(block_on(wf.optimize(&planner)), Err(RouteError::NoDirectRoute));
        assert!(routing.requests.borrow().is_empty());
    }

    #[test]
    fn clear_resets_from_every_phase() {
        let routing = FakeRouting::new(5000.0, 4200.0);
        let geocoder = FixedOffsetGeocoder::default();
        let planner = RoutePlanner::new(&routing, &geocoder, DEPOT);

        let mut idle = workflow();
        idle.clear();
        assert_eq!(idle.phase(), RoutePhase::Idle);

        let mut direct = workflow();
        block_on(direct.calculate_route(&planner, "Kondele Market")).unwrap();
        direct.clear();
        assert_eq!(direct.phase(), RoutePhase::Idle);
        assert_eq!(direct.surface().overlay_count(), 0);
        assert!(!direct.can_optimize());

        let mut optimized = workflow();
        block_on(optimized.calculate_route(&planner, "Kondele Market")).unwrap();
        block_on(optimized.optimize(&planner)).unwrap();
        assert_eq!(optimized.surface().overlay_count(), 3);
        optimized.clear();
        assert_eq!(optimized.surface().overlay_count(), 0);
        assert_eq!(optimized.direct_route(), None);
        assert_eq!(optimized.optimized_route(), None);
        assert_eq!(optimized.savings(), None);
    }

    #[test]
    fn new_calculation_clears_previous_run() {
        let routing = FakeRouting::new(5000.0, 4200.0);
        let geocoder = FixedOffsetGeocoder::default();
        let planner = RoutePlanner::new(&routing, &geocoder, DEPOT);
        let mut wf = workflow();

        block_on(wf.calculate_route(&planner, "Kondele Market")).unwrap();
        block_on(wf.optimize(&planner)).unwrap();
        block_on(wf.calculate_route(&planner, "Jubilee Market")).unwrap();

        assert_eq!(wf.phase(), RoutePhase::DirectShown);
        assert_eq!(wf.savings(), None);
        assert_eq!(wf.surface().overlay_count(), 1);
        assert_eq!(
            wf.direct_route().unwrap().waypoints,
            vec!["Jubilee Market".to_string()]
        );
    }

    #[test]
    fn failed_optimization_keeps_direct_route() {
        let routing = FakeRouting::new(5000.0, 4200.0);
        let geocoder = FixedOffsetGeocoder::default();
        let planner = RoutePlanner::new(&routing, &geocoder, DEPOT);
        let mut wf = workflow();

        block_on(wf.calculate_route(&planner, "Kondele Market")).unwrap();
        routing.fail.set(true);
        let err = block_on(wf.optimize(&planner)).unwrap_err();

        assert!(matches!(err, RouteError::Api(ApiError::Network(_))));
        assert_eq!(wf.phase(), RoutePhase::DirectShown);
        assert_eq!(wf.surface().overlay_count(), 1);
        assert!(wf.can_optimize());
    }

    #[test]
    fn failed_direct_route_draws_nothing() {
        let routing = FakeRouting::new(5000.0, 4200.0);
        routing.fail.set(true);
        let geocoder = FixedOffsetGeocoder::default();
        let planner = RoutePlanner::new(&routing, &geocoder, DEPOT);
        let mut wf = workflow();

        assert!(block_on(wf.calculate_route(&planner, "Kondele Market")).is_err());
        assert_eq!(wf.phase(), RoutePhase::Idle);
        assert_eq!(wf.surface().overlay_count(), 0);
    }

    #[test]
    fn blank_address_never_reaches_routing_service() {
        let routing = FakeRouting::new(5000.0, 4200.0);
        let geocoder = FixedOffsetGeocoder::default();
        let planner = RoutePlanner::new(&routing, &geocoder, DEPOT);
        let mut wf = workflow();

        assert_eq!(
            block_on(wf.calculate_route(&planner, "  ")),
            Err(RouteError::EmptyAddress)
        );
        assert!(routing.requests.borrow().is_empty());
    }

    #[test]
    fn answer_for_cleared_run_is_dropped() {
        let routing = FakeRouting::new(5000.0, 4200.0);
        let geocoder = FixedOffsetGeocoder::default();
        let planner = RoutePlanner::new(&routing, &geocoder, DEPOT);
        let mut wf = workflow();

        let ticket = wf.begin_run();
        let route = block_on(planner.direct("Kondele Market")).unwrap();
        wf.clear();

        assert_eq!(wf.show_direct(ticket, route), Err(RouteError::Stale));
        assert_eq!(wf.surface().overlay_count(), 0);
        assert_eq!(wf.phase(), RoutePhase::Idle);
    }

    #[test]
    fn marker_failure_rolls_back_optimized_overlay() {
        let routing = FakeRouting::new(5000.0, 4200.0);
        let geocoder = FixedOffsetGeocoder::default();
        let planner = RoutePlanner::new(&routing, &geocoder, DEPOT);
        let mut wf = RouteWorkflow::new(NoMarkerSurface::default(), settings());

        block_on(wf.calculate_route(&planner, "Kondele Market")).unwrap();
        let err = block_on(wf.optimize(&planner)).unwrap_err();

        assert!(matches!(err, RouteError::Map(MapError::Widget(_))));
        assert_eq!(wf.phase(), RoutePhase::DirectShown);
        assert_eq!(wf.surface().overlay_count(), 1);
        assert_eq!(wf.savings(), None);
    }

    #[test]
    fn reoptimizing_replaces_previous_overlays() {
        let routing = FakeRouting::new(5000.0, 4200.0);
        let geocoder = FixedOffsetGeocoder::default();
        let planner = RoutePlanner::new(&routing, &geocoder, DEPOT);
        let mut wf = workflow();

        block_on(wf.calculate_route(&planner, "Kondele Market")).unwrap();
        block_on(wf.optimize(&planner)).unwrap();
        let savings = block_on(wf.optimize(&planner)).unwrap();

        assert_eq!(wf.surface().overlay_count(), 3);
        assert_eq!(savings.distance_km, 0.8);
        assert_eq!(savings.fuel_l, 0.06);
    }

    #[test]
    fn optimize_control_needs_direct_route_and_no_request_in_flight() {
        assert!(!optimize_enabled(RoutePhase::Idle, false));
        assert!(!optimize_enabled(RoutePhase::DirectShown, true));
        assert!(optimize_enabled(RoutePhase::DirectShown, false));
        assert!(optimize_enabled(RoutePhase::OptimizedShown, false));
    }

    #[test]
    fn waypoint_markers_step_away_from_origin() {
        let s = settings();
        assert_eq!(s.waypoint_position(0), DEPOT.offset(0.002));
        assert_eq!(s.waypoint_position(2), DEPOT.offset(0.006));
    }
}
