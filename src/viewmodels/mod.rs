// ============================================================================
// VIEWMODELS - Screen logic, free of Yew state
// ============================================================================

pub mod drivers_viewmodel;
pub mod login_viewmodel;
pub mod orders_viewmodel;
pub mod route_viewmodel;

pub use drivers_viewmodel::{DriverRoster, DriverRow, DriversViewModel};
pub use login_viewmodel::{LoginFormErrors, LoginOutcome, LoginViewModel};
pub use orders_viewmodel::{OrderCounter, OrdersViewModel};
pub use route_viewmodel::{
    optimize_enabled, RoutePhase, RoutePlanner, RouteWorkflow, RunTicket, WorkflowSettings, CALCULATE_FAILED,
    OPTIMIZE_FAILED,
};
