pub mod session_context;
pub mod use_abort;
pub mod use_drivers;
pub mod use_login;
pub mod use_orders;
pub mod use_route_map;

pub use session_context::{use_session_store, SessionProvider};
pub use use_abort::use_abort_handle;
pub use use_drivers::use_drivers;
pub use use_login::{use_login, LoginState, UseLoginHandle};
pub use use_orders::use_orders;
pub use use_route_map::{use_route_map, MapDialog, UseRouteMapHandle};
