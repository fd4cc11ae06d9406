use serde::{Deserialize, Serialize};

use crate::models::Coordinates;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    pub backend_url: String,
    pub routing_url: String,
    pub enable_logging: bool,
    /// Redirect `/dashboard` to the login screen when no session is stored
    pub guard_dashboard: bool,
    pub map_config: MapConfig,
    pub route_config: RouteConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: "https://logigas-backend.onrender.com".to_string(),
            routing_url: "https://router.project-osrm.org".to_string(),
            enable_logging: true,
            guard_dashboard: false,
            map_config: MapConfig::default(),
            route_config: RouteConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MapConfig {
    pub depot_lat: f64,
    pub depot_lng: f64,
    pub default_zoom: f64,
    pub tile_url: String,
    pub tile_attribution: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            depot_lat: -0.1022,
            depot_lng: 34.7617,
            default_zoom: 13.0,
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            tile_attribution: "&copy; OpenStreetMap contributors".to_string(),
        }
    }
}

impl MapConfig {
    pub fn depot(&self) -> Coordinates {
        Coordinates::new(self.depot_lat, self.depot_lng)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteConfig {
    pub fuel_litres_per_km: f64,
    /// Placeholder geocoding offsets (degrees) until a real geocoder is wired in
    pub direct_offset: f64,
    pub optimized_offset: f64,
    pub waypoint_step: f64,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            fuel_litres_per_km: 0.08,
            direct_offset: 0.01,
            optimized_offset: 0.008,
            waypoint_step: 0.002,
        }
    }
}

impl AppConfig {
    /// Loads configuration from compile-time environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| match key {
            "BACKEND_URL" => option_env!("BACKEND_URL"),
            "ROUTING_URL" => option_env!("ROUTING_URL"),
            "TILE_URL" => option_env!("TILE_URL"),
            "TILE_ATTRIBUTION" => option_env!("TILE_ATTRIBUTION"),
            "DEPOT_LAT" => option_env!("DEPOT_LAT"),
            "DEPOT_LNG" => option_env!("DEPOT_LNG"),
            "DEFAULT_MAP_ZOOM" => option_env!("DEFAULT_MAP_ZOOM"),
            "FUEL_LITRES_PER_KM" => option_env!("FUEL_LITRES_PER_KM"),
            "ENABLE_LOGGING" => option_env!("ENABLE_LOGGING"),
            "GUARD_DASHBOARD" => option_env!("GUARD_DASHBOARD"),
            _ => None,
        })
    }

    /// Builds a config from any key lookup, falling back to defaults for
    /// missing or unparsable values
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<&'static str>,
    {
        let defaults = Self::default();
        let text = |key: &str, fallback: &str| {
            lookup(key)
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or_else(|| fallback.to_string())
        };
        let number = |key: &str, fallback: f64| {
            lookup(key).and_then(|v| v.parse().ok()).unwrap_or(fallback)
        };
        let flag = |key: &str, fallback: bool| {
            lookup(key).and_then(|v| v.parse().ok()).unwrap_or(fallback)
        };

        Self {
            backend_url: text("BACKEND_URL", &defaults.backend_url),
            routing_url: text("ROUTING_URL", &defaults.routing_url),
            enable_logging: flag("ENABLE_LOGGING", defaults.enable_logging),
            guard_dashboard: flag("GUARD_DASHBOARD", defaults.guard_dashboard),
            map_config: MapConfig {
                depot_lat: number("DEPOT_LAT", defaults.map_config.depot_lat),
                depot_lng: number("DEPOT_LNG", defaults.map_config.depot_lng),
                default_zoom: number("DEFAULT_MAP_ZOOM", defaults.map_config.default_zoom),
                tile_url: lookup("TILE_URL")
                    .map(str::to_string)
                    .unwrap_or(defaults.map_config.tile_url),
                tile_attribution: lookup("TILE_ATTRIBUTION")
                    .map(str::to_string)
                    .unwrap_or(defaults.map_config.tile_attribution),
            },
            route_config: RouteConfig {
                fuel_litres_per_km: number(
                    "FUEL_LITRES_PER_KM",
                    defaults.route_config.fuel_litres_per_km,
                ),
                ..defaults.route_config
            },
        }
    }

    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Debug
        } else {
            log::Level::Warn
        }
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
