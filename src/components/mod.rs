pub mod analytics;
pub mod app;
pub mod dashboard;
pub mod destination_dialog;
pub mod drivers;
pub mod footer;
pub mod header;
pub mod login_screen;
pub mod main_layout;
pub mod map;
pub mod optimize_button;
pub mod orders_panel;
pub mod savings_dialog;
pub mod show_map_button;

pub use analytics::Analytics;
pub use app::{App, Screen};
pub use dashboard::Dashboard;
pub use destination_dialog::DestinationDialog;
pub use drivers::Drivers;
pub use footer::Footer;
pub use header::Header;
pub use login_screen::LoginScreen;
pub use main_layout::MainLayout;
pub use map::Map;
pub use optimize_button::OptimizeButton;
pub use orders_panel::OrdersPanel;
pub use savings_dialog::SavingsDialog;
pub use show_map_button::ShowMapButton;
