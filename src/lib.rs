// ============================================================================
// LOGIGAS DASHBOARD - Yew front-end (MVVM)
// ============================================================================
// - Components: render only
// - Hooks: Yew state, request lifetimes
// - ViewModels: screen logic, returns values
// - Services: HTTP and routing service calls only
// - Stores: session persistence
// - Maps: Leaflet surface behind the MapSurface trait
// ============================================================================

pub mod components;
pub mod config;
pub mod errors;
pub mod hooks;
pub mod maps;
pub mod models;
pub mod services;
pub mod stores;
pub mod utils;
pub mod viewmodels;

use crate::components::App;
use crate::config::CONFIG;

/// Installs the panic hook and console logger, then mounts the app on `<body>`
pub fn start() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 {} dashboard starting (backend: {})", utils::APP_NAME, CONFIG.backend_url);

    yew::Renderer::<App>::new().render();
}
