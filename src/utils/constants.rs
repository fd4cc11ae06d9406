/// localStorage key holding the bearer token
pub const STORAGE_KEY_TOKEN: &str = "token";

/// localStorage key holding the JSON-serialized user profile
pub const STORAGE_KEY_USER: &str = "user";

pub const APP_NAME: &str = "LogiGas";

pub const LOGIN_PATH: &str = "/";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Id of the DOM node the Leaflet map is mounted on
pub const MAP_CONTAINER_ID: &str = "map";
