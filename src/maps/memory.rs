use std::collections::BTreeMap;

use crate::models::Coordinates;

use super::traits::check_path;
use super::{LineStyle, MapError, MapSurface, OverlayId};

/// What an overlay on a [`MemorySurface`] represents
#[derive(Debug, Clone, PartialEq)]
pub enum Overlay {
    Polyline { path: Vec<Coordinates>, style: LineStyle },
    Marker { at: Coordinates, label: String },
}

/// Map surface that only records overlays. Stands in for Leaflet when the
/// script failed to load, so routes and savings still work without imagery.
#[derive(Debug, Default)]
pub struct MemorySurface {
    overlays: BTreeMap<OverlayId, Overlay>,
    next_id: u32,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn polylines(&self) -> Vec<&LineStyle> {
        self.overlays
            .values()
            .filter_map(|o| match o {
                Overlay::Polyline { style, .. } => Some(style),
                Overlay::Marker { .. } => None,
            })
            .collect()
    }

    pub fn markers(&self) -> Vec<(Coordinates, &str)> {
        self.overlays
            .values()
            .filter_map(|o| match o {
                Overlay::Marker { at, label } => Some((*at, label.as_str())),
                Overlay::Polyline { .. } => None,
            })
            .collect()
    }

    fn insert(&mut self, overlay: Overlay) -> OverlayId {
        self.next_id += 1;
        let id = OverlayId(self.next_id);
        self.overlays.insert(id, overlay);
        id
    }
}

impl MapSurface for MemorySurface {
    fn add_polyline(&mut self, path: &[Coordinates], style: &LineStyle) -> Result<OverlayId, MapError> {
        check_path(path)?;
        Ok(self.insert(Overlay::Polyline {
            path: path.to_vec(),
            style: style.clone(),
        }))
    }

    fn add_marker(&mut self, at: Coordinates, label: &str) -> Result<OverlayId, MapError> {
        Ok(self.insert(Overlay::Marker {
            at,
            label: label.to_string(),
        }))
    }

    fn remove_overlay(&mut self, id: OverlayId) -> Result<(), MapError> {
        self.overlays
            .remove(&id)
            .map(|_| ())
            .ok_or(MapError::UnknownOverlay(id))
    }

    fn clear_overlays(&mut self) {
        self.overlays.clear();
    }

    fn overlay_count(&self) -> usize {
        self.overlays.len()
    }
}
