// ============================================================================
// ROUTING SERVICE - OSRM driving routes
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::Deserialize;
use web_sys::AbortSignal;

use crate::config::CONFIG;
use crate::errors::RouteError;
use crate::models::{Coordinates, Route};

use super::api_client::read_json;

#[async_trait(?Send)]
pub trait RoutingService {
    /// Driving route from `from` to `to`
    async fn route(&self, from: Coordinates, to: Coordinates) -> Result<Route, RouteError>;
}

#[derive(Debug, Deserialize)]
pub struct OsrmResponse {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
pub struct OsrmRoute {
    pub geometry: OsrmGeometry,
    pub distance: f64,
    pub duration: f64,
}

/// GeoJSON LineString, coordinates as `[lng, lat]`
#[derive(Debug, Deserialize)]
pub struct OsrmGeometry {
    pub coordinates: Vec<[f64; 2]>,
}

impl OsrmResponse {
    /// First route of the answer. OSRM lists alternatives after the best one.
    pub fn into_route(self) -> Result<Route, RouteError> {
        let best = self.routes.into_iter().next().ok_or(RouteError::NoRouteFound)?;
        Ok(Route {
            path: best
                .geometry
                .coordinates
                .into_iter()
                .map(|[lng, lat]| Coordinates::new(lat, lng))
                .collect(),
            distance_m: best.distance,
            duration_s: best.duration,
            waypoints: Vec::new(),
        })
    }
}

/// Client for an OSRM-compatible `/route/v1/driving` endpoint
#[derive(Clone)]
pub struct OsrmClient {
    base_url: String,
    signal: Option<AbortSignal>,
}

impl OsrmClient {
    pub fn new() -> Self {
        Self::with_base_url(&CONFIG.routing_url)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            signal: None,
        }
    }

    pub fn with_signal(mut self, signal: Option<AbortSignal>) -> Self {
        self.signal = signal;
        self
    }

    pub fn route_url(&self, from: Coordinates, to: Coordinates) -> String {
        format!(
            "{}/route/v1/driving/{},{};{},{}?overview=full&geometries=geojson",
            self.base_url, from.lng, from.lat, to.lng, to.lat
        )
    }
}

impl Default for OsrmClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl RoutingService for OsrmClient {
    async fn route(&self, from: Coordinates, to: Coordinates) -> Result<Route, RouteError> {
        let url = self.route_url(from, to);
        log::info!("🛣️ Requesting route {}", url);

        let response = Request::get(&url)
            .abort_signal(self.signal.as_ref())
            .send()
            .await
            .map_err(crate::errors::ApiError::from)?;
        let body = read_json::<OsrmResponse>(response).await?;

        if let Some(code) = body.code.as_deref().filter(|c| *c != "Ok") {
            log::warn!("⚠️ Routing service answered {}", code);
        }
        let route = body.into_route()?;
        log::info!(
            "✅ Route: {:.2} km, {:.1} min, {} points",
            route.distance_km(),
            route.duration_minutes(),
            route.path.len()
        );
        Ok(route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_puts_longitude_first() {
        let client = OsrmClient::with_base_url("http://router.project-osrm.org/");
        let depot = Coordinates::new(-0.1022, 34.7617);
        let drop = Coordinates::new(-0.0922, 34.7717);
        assert_eq!(
            client.route_url(depot, drop),
            "http://router.project-osrm.org/route/v1/driving/34.7617,-0.1022;34.7717,-0.0922?overview=full&geometries=geojson"
        );
    }

    #[test]
    fn first_route_is_converted_to_lat_lng() {
        let body = r#"{
            "code": "Ok",
            "routes": [
                {"geometry": {"type": "LineString", "coordinates": [[34.7617,-0.1022],[34.765,-0.099],[34.7717,-0.0922]]},
                 "distance": 2480.4, "duration": 311.2},
                {"geometry": {"type": "LineString", "coordinates": [[34.7617,-0.1022],[34.7717,-0.0922]]},
                 "distance": 3100.0, "duration": 400.0}
            ]
        }"#;
        let route = serde_json::from_str::<OsrmResponse>(body)
            .unwrap()
            .into_route()
            .unwrap();
        assert_eq!(route.distance_m, 2480.4);
        assert_eq!(route.duration_s, 311.2);
        assert_eq!(route.path.len(), 3);
        assert_eq!(route.path[0], Coordinates::new(-0.1022, 34.7617));
        assert!(route.waypoints.is_empty());
    }

    #[test]
    fn empty_route_list_is_an_error() {
        let body = r#"{"code":"NoRoute","message":"Impossible route between points"}"#;
        let parsed = serde_json::from_str::<OsrmResponse>(body).unwrap();
        assert_eq!(parsed.into_route(), Err(RouteError::NoRouteFound));
    }
}
