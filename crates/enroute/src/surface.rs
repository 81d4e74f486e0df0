use std::sync::atomic::{AtomicU64, Ordering};

use model::LatLon;
use tracker::map::{
    ClickCallback, MapSurface, MarkerHandle, MarkerStyle, PolylineHandle,
    PolylineStyle,
};

/// Headless stand-in for the mapping library: every draw operation is
/// logged instead of rendered. Useful for watching an event feed without a
/// browser, and for exercising the engine end to end.
pub struct ConsoleSurface {
    next_handle: AtomicU64,
}

impl ConsoleSurface {
    pub fn new(center: LatLon, zoom: u8) -> Self {
        log::info!(
            "map surface centered at [{}, {}], zoom {}",
            center[0],
            center[1],
            zoom
        );
        Self {
            next_handle: AtomicU64::new(1),
        }
    }

    fn next(&self) -> u64 {
        self.next_handle.fetch_add(1, Ordering::Relaxed)
    }
}

impl MapSurface for ConsoleSurface {
    fn create_marker(&self, position: LatLon, style: MarkerStyle) -> MarkerHandle {
        let handle = self.next();
        log::info!(
            "marker #{} '{}' ({}) at [{}, {}]",
            handle,
            style.title,
            style.icon,
            position[0],
            position[1]
        );
        MarkerHandle(handle)
    }

    fn move_marker(&self, handle: MarkerHandle, position: LatLon) {
        log::info!(
            "marker #{} moved to [{}, {}]",
            handle.0,
            position[0],
            position[1]
        );
    }

    fn bind_popup(&self, handle: MarkerHandle, html: String) {
        log::info!("marker #{} popup: {}", handle.0, html);
    }

    fn create_polyline(
        &self,
        points: Vec<LatLon>,
        style: PolylineStyle,
    ) -> PolylineHandle {
        let handle = self.next();
        log::info!(
            "polyline #{} with {} points, color {}",
            handle,
            points.len(),
            style.color
        );
        PolylineHandle(handle)
    }

    fn update_polyline(&self, handle: PolylineHandle, points: Vec<LatLon>) {
        log::debug!("polyline #{} now {} points", handle.0, points.len());
    }

    fn fit_bounds_to(&self, handle: PolylineHandle) {
        log::info!("view fit to polyline #{}", handle.0);
    }

    fn on_click(&self, handle: PolylineHandle, _callback: ClickCallback) {
        // Nothing clicks a headless map.
        log::debug!("click handler attached to polyline #{}", handle.0);
    }

    fn open_popup(&self, position: LatLon, text: String) {
        log::info!("popup at [{}, {}]: {}", position[0], position[1], text);
    }
}
