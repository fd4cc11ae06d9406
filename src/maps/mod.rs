// Map surfaces: the Leaflet widget in the browser, an in-memory surface otherwise

pub mod leaflet;
pub mod memory;
pub mod traits;

pub use leaflet::LeafletSurface;
pub use memory::MemorySurface;
pub use traits::{LineStyle, MapError, MapSurface, OverlayId};
