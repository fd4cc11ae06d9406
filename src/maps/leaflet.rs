use std::collections::BTreeMap;

use serde::Serialize;
use web_sys::HtmlElement;

use crate::config::MapConfig;
use crate::models::Coordinates;
use crate::utils::leaflet_ffi::{self, LeafletLayer, LeafletMap};

use super::traits::check_path;
use super::{LineStyle, MapError, MapSurface, OverlayId};

#[derive(Serialize)]
struct TileOptions<'a> {
    attribution: &'a str,
}

#[derive(Serialize)]
struct PolylineOptions<'a> {
    color: &'a str,
    weight: u32,
    opacity: f64,
}

/// Leaflet map mounted on one DOM node, with an OpenStreetMap tile layer
pub struct LeafletSurface {
    map: LeafletMap,
    _tiles: LeafletLayer,
    overlays: BTreeMap<OverlayId, LeafletLayer>,
    next_id: u32,
}

impl LeafletSurface {
    pub fn mount(container: &HtmlElement, config: &MapConfig) -> Result<Self, MapError> {
        if !leaflet_ffi::leaflet_loaded() {
            return Err(MapError::NotReady);
        }

        let map = leaflet_ffi::create_map(container)
            .map_err(|e| MapError::Widget(leaflet_ffi::describe_js_error(&e)))?;
        let center = leaflet_ffi::to_js(&config.depot().as_lat_lng()).map_err(MapError::Widget)?;
        map.set_view(&center, config.default_zoom);

        let tile_options = leaflet_ffi::to_js(&TileOptions {
            attribution: &config.tile_attribution,
        })
        .map_err(MapError::Widget)?;
        let tiles = leaflet_ffi::tile_layer(&config.tile_url, &tile_options);
        tiles.add_to(&map);

        log::info!("🗺️ Leaflet map mounted at ({}, {})", config.depot_lat, config.depot_lng);

        Ok(Self {
            map,
            _tiles: tiles,
            overlays: BTreeMap::new(),
            next_id: 0,
        })
    }

    fn track(&mut self, layer: LeafletLayer) -> OverlayId {
        self.next_id += 1;
        let id = OverlayId(self.next_id);
        self.overlays.insert(id, layer);
        id
    }
}

impl MapSurface for LeafletSurface {
    fn add_polyline(&mut self, path: &[Coordinates], style: &LineStyle) -> Result<OverlayId, MapError> {
        check_path(path)?;

        let latlngs: Vec<[f64; 2]> = path.iter().map(Coordinates::as_lat_lng).collect();
        let latlngs = leaflet_ffi::to_js(&latlngs).map_err(MapError::Widget)?;
        let options = leaflet_ffi::to_js(&PolylineOptions {
            color: style.color,
            weight: style.weight,
            opacity: style.opacity,
        })
        .map_err(MapError::Widget)?;

        let layer = leaflet_ffi::polyline(&latlngs, &options)
            .map_err(|e| MapError::Widget(leaflet_ffi::describe_js_error(&e)))?;
        layer.add_to(&self.map);
        Ok(self.track(layer))
    }

    fn add_marker(&mut self, at: Coordinates, label: &str) -> Result<OverlayId, MapError> {
        let latlng = leaflet_ffi::to_js(&at.as_lat_lng()).map_err(MapError::Widget)?;
        let layer = leaflet_ffi::marker(&latlng)
            .map_err(|e| MapError::Widget(leaflet_ffi::describe_js_error(&e)))?;
        layer.bind_tooltip(label);
        layer.add_to(&self.map);
        Ok(self.track(layer))
    }

    fn remove_overlay(&mut self, id: OverlayId) -> Result<(), MapError> {
        let layer = self.overlays.remove(&id).ok_or(MapError::UnknownOverlay(id))?;
        self.map.remove_layer(&layer);
        Ok(())
    }

    fn clear_overlays(&mut self) {
        for (_, layer) in std::mem::take(&mut self.overlays) {
            self.map.remove_layer(&layer);
        }
    }

    fn overlay_count(&self) -> usize {
        self.overlays.len()
    }

    fn refresh_size(&self) {
        self.map.invalidate_size();
    }
}

impl Drop for LeafletSurface {
    fn drop(&mut self) {
        log::debug!("🗺️ Leaflet map removed");
        self.map.remove();
    }
}
