// Services: remote communication only, no view state

pub mod abort;
pub mod api_client;
pub mod auth_service;
pub mod driver_service;
pub mod geocoding_service;
pub mod order_service;
pub mod routing_service;

pub use abort::AbortHandle;
pub use api_client::ApiClient;
pub use auth_service::AuthService;
pub use driver_service::DriverService;
pub use geocoding_service::{FixedOffsetGeocoder, GeocodingService, RouteLeg};
pub use order_service::{OrderTallySource, PlaceholderTallies};
pub use routing_service::{OsrmClient, RoutingService};
