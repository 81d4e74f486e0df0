//! In-memory map surface for tests: records every draw operation so tests
//! can assert on marker positions, popup content, and creation counts.

use std::{collections::HashMap, sync::Mutex};

use model::LatLon;

use crate::map::{
    ClickCallback, MapSurface, MarkerHandle, MarkerStyle, PolylineHandle,
    PolylineStyle,
};

#[derive(Default)]
struct State {
    markers_created: u64,
    marker_positions: HashMap<MarkerHandle, LatLon>,
    popups: HashMap<MarkerHandle, String>,
    polylines_created: u64,
    polyline_points: HashMap<PolylineHandle, Vec<LatLon>>,
    open_popups: Vec<(LatLon, String)>,
}

#[derive(Default)]
pub(crate) struct RecordingSurface {
    state: Mutex<State>,
}

impl RecordingSurface {
    pub fn marker_count(&self) -> u64 {
        self.state.lock().unwrap().markers_created
    }

    pub fn marker_position(&self, handle: MarkerHandle) -> Option<LatLon> {
        self.state.lock().unwrap().marker_positions.get(&handle).copied()
    }

    pub fn popup(&self, handle: MarkerHandle) -> Option<String> {
        self.state.lock().unwrap().popups.get(&handle).cloned()
    }

    pub fn all_popups(&self) -> Vec<String> {
        self.state.lock().unwrap().popups.values().cloned().collect()
    }

    pub fn polyline_count(&self) -> u64 {
        self.state.lock().unwrap().polylines_created
    }

    pub fn polyline_points(&self, handle: PolylineHandle) -> Option<Vec<LatLon>> {
        self.state.lock().unwrap().polyline_points.get(&handle).cloned()
    }

    pub fn open_popups(&self) -> Vec<(LatLon, String)> {
        self.state.lock().unwrap().open_popups.clone()
    }
}

impl MapSurface for RecordingSurface {
    fn create_marker(&self, position: LatLon, _style: MarkerStyle) -> MarkerHandle {
        let mut state = self.state.lock().unwrap();
        state.markers_created += 1;
        let handle = MarkerHandle(state.markers_created);
        state.marker_positions.insert(handle, position);
        handle
    }

    fn move_marker(&self, handle: MarkerHandle, position: LatLon) {
        self.state
            .lock()
            .unwrap()
            .marker_positions
            .insert(handle, position);
    }

    fn bind_popup(&self, handle: MarkerHandle, html: String) {
        self.state.lock().unwrap().popups.insert(handle, html);
    }

    fn create_polyline(
        &self,
        points: Vec<LatLon>,
        _style: PolylineStyle,
    ) -> PolylineHandle {
        let mut state = self.state.lock().unwrap();
        state.polylines_created += 1;
        let handle = PolylineHandle(state.polylines_created);
        state.polyline_points.insert(handle, points);
        handle
    }

    fn update_polyline(&self, handle: PolylineHandle, points: Vec<LatLon>) {
        self.state
            .lock()
            .unwrap()
            .polyline_points
            .insert(handle, points);
    }

    fn fit_bounds_to(&self, _handle: PolylineHandle) {}

    fn on_click(&self, _handle: PolylineHandle, _callback: ClickCallback) {}

    fn open_popup(&self, position: LatLon, text: String) {
        self.state.lock().unwrap().open_popups.push((position, text));
    }
}
