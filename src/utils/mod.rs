// Shared utilities

pub mod constants;
pub mod leaflet_ffi;
pub mod storage;

pub use constants::*;
pub use storage::{KeyValueStore, LocalStore, MemoryStore};
