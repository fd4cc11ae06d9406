use serde::{Deserialize, Serialize};

/// Geographic point in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Same point shifted by `delta` degrees on both axes
    pub fn offset(&self, delta: f64) -> Self {
        Self {
            lat: self.lat + delta,
            lng: self.lng + delta,
        }
    }

    /// `[lat, lng]` pair, the order Leaflet expects
    pub fn as_lat_lng(&self) -> [f64; 2] {
        [self.lat, self.lng]
    }
}

/// Path returned by the routing service, plus the labels of the stops it serves
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub path: Vec<Coordinates>,
    /// Metres
    pub distance_m: f64,
    /// Seconds
    pub duration_s: f64,
    #[serde(default)]
    pub waypoints: Vec<String>,
}

impl Route {
    pub fn distance_km(&self) -> f64 {
        self.distance_m / 1000.0
    }

    pub fn duration_minutes(&self) -> f64 {
        self.duration_s / 60.0
    }

    pub fn with_waypoint(mut self, label: impl Into<String>) -> Self {
        self.waypoints.push(label.into());
        self
    }
}

/// Distance and fuel saved by taking the optimized route over the direct one
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Savings {
    pub distance_km: f64,
    pub fuel_l: f64,
}

impl Savings {
    /// Both figures are rounded to two decimals. Fuel is derived from the
    /// unrounded distance. Negative values mean the optimized route is longer.
    pub fn between(direct: &Route, optimized: &Route, fuel_litres_per_km: f64) -> Self {
        let distance_km = (direct.distance_m - optimized.distance_m) / 1000.0;
        let fuel_l = distance_km * fuel_litres_per_km;
        Self {
            distance_km: round2(distance_km),
            fuel_l: round2(fuel_l),
        }
    }
}

/// Two decimals, halves rounded towards +inf. Never returns `-0.0`.
pub fn round2(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0 + 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(distance_m: f64) -> Route {
        Route {
            path: vec![],
            distance_m,
            duration_s: 0.0,
            waypoints: vec![],
        }
    }

    #[test]
    fn savings_follow_fixed_consumption_ratio() {
        let savings = Savings::between(&route(2480.0), &route(1960.0), 0.08);
        assert_eq!(savings.distance_km, 0.52);
        assert_eq!(savings.fuel_l, 0.04);
    }

    #[test]
    fn savings_for_larger_gap() {
        let savings = Savings::between(&route(12_000.0), &route(4_500.0), 0.08);
        assert_eq!(savings.distance_km, 7.5);
        assert_eq!(savings.fuel_l, 0.6);
    }

    #[test]
    fn longer_optimized_route_gives_negative_savings() {
        let savings = Savings::between(&route(1000.0), &route(1500.0), 0.08);
        assert_eq!(savings.distance_km, -0.5);
        assert_eq!(savings.fuel_l, -0.04);
    }

    #[test]
    fn negative_halves_round_up() {
        let savings = Savings::between(&route(1000.0), &route(1125.0), 0.08);
        assert_eq!(savings.distance_km, -0.12);
        assert_eq!(savings.fuel_l, -0.01);
    }

    #[test]
    fn tiny_negative_fuel_shows_as_zero() {
        let savings = Savings::between(&route(2480.0), &route(2530.0), 0.08);
        assert_eq!(savings.distance_km, -0.05);
        assert!(savings.fuel_l.is_sign_positive());
        assert_eq!(format!("{} L", savings.fuel_l), "0 L");
    }

    #[test]
    fn offset_moves_both_axes() {
        let depot = Coordinates::new(-0.1022, 34.7617);
        let moved = depot.offset(0.01);
        assert!((moved.lat - -0.0922).abs() < 1e-9);
        assert!((moved.lng - 34.7717).abs() < 1e-9);
        assert_eq!(depot.as_lat_lng(), [-0.1022, 34.7617]);
    }
}
