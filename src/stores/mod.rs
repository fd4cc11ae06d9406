pub mod load_state;
pub mod session_store;

pub use load_state::LoadState;
pub use session_store::SessionStore;
