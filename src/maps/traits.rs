use thiserror::Error;

use crate::models::Coordinates;

/// Handle to an overlay drawn on a map surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OverlayId(pub u32);

/// Styling for a route polyline
#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    pub color: &'static str,
    pub weight: u32,
    pub opacity: f64,
}

impl LineStyle {
    /// Direct route (red)
    pub const DIRECT: LineStyle = LineStyle {
        color: "#ff0000",
        weight: 6,
        opacity: 0.8,
    };

    /// Optimized route (brand green)
    pub const OPTIMIZED: LineStyle = LineStyle {
        color: "#88D54A",
        weight: 6,
        opacity: 0.8,
    };
}

/// Common interface for the widget that draws routes and markers.
///
/// The base tile layer is owned by the implementation and is never counted
/// as an overlay nor removed by [`MapSurface::clear_overlays`].
pub trait MapSurface {
    /// Draw a polyline through `path`
    fn add_polyline(&mut self, path: &[Coordinates], style: &LineStyle) -> Result<OverlayId, MapError>;

    /// Place a labelled marker
    fn add_marker(&mut self, at: Coordinates, label: &str) -> Result<OverlayId, MapError>;

    fn remove_overlay(&mut self, id: OverlayId) -> Result<(), MapError>;

    /// Remove every overlay, keeping the base tiles
    fn clear_overlays(&mut self);

    fn overlay_count(&self) -> usize;

    /// Recompute size after the container was resized or revealed
    fn refresh_size(&self) {}
}

impl<M: MapSurface + ?Sized> MapSurface for Box<M> {
    fn add_polyline(&mut self, path: &[Coordinates], style: &LineStyle) -> Result<OverlayId, MapError> {
        (**self).add_polyline(path, style)
    }

    fn add_marker(&mut self, at: Coordinates, label: &str) -> Result<OverlayId, MapError> {
        (**self).add_marker(at, label)
    }

    fn remove_overlay(&mut self, id: OverlayId) -> Result<(), MapError> {
        (**self).remove_overlay(id)
    }

    fn clear_overlays(&mut self) {
        (**self).clear_overlays()
    }

    fn overlay_count(&self) -> usize {
        (**self).overlay_count()
    }

    fn refresh_size(&self) {
        (**self).refresh_size()
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MapError {
    #[error("Map is not ready")]
    NotReady,

    #[error("Invalid coordinates")]
    InvalidCoordinates,

    #[error("Unknown overlay {0:?}")]
    UnknownOverlay(OverlayId),

    #[error("Map widget error: {0}")]
    Widget(String),
}

pub(crate) fn check_path(path: &[Coordinates]) -> Result<(), MapError> {
    let valid = path.len() >= 2
        && path
            .iter()
            .all(|c| c.lat.is_finite() && c.lng.is_finite() && c.lat.abs() <= 90.0 && c.lng.abs() <= 180.0);
    if valid {
        Ok(())
    } else {
        Err(MapError::InvalidCoordinates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_needs_two_valid_points() {
        let depot = Coordinates::new(-0.1022, 34.7617);
        assert_eq!(check_path(&[depot]), Err(MapError::InvalidCoordinates));
        assert_eq!(
            check_path(&[depot, Coordinates::new(f64::NAN, 0.0)]),
            Err(MapError::InvalidCoordinates)
        );
        assert_eq!(check_path(&[depot, depot.offset(0.01)]), Ok(()));
    }
}
