use serde::{Deserialize, Serialize};

use crate::LatLon;

fn default_center() -> LatLon {
    // Continental U.S.
    [40.8890347, -97.154832]
}

fn default_zoom() -> u8 {
    5
}

/// Configuration for one tracking page: where the backend lives, what the
/// map initially shows, and which trackers and routes to draw.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// URL prefix of the backend serving `_riders`, `_along`, etc.
    pub root: String,
    #[serde(default = "default_center")]
    pub center: LatLon,
    #[serde(default = "default_zoom")]
    pub zoom: u8,
    /// Riders carrying personal Spot trackers.
    #[serde(default)]
    pub spot_feeds: Vec<RiderEntry>,
    /// Riders on rental trackers, reported through the aggregated
    /// third-party feed.
    #[serde(default)]
    pub rental_spots: Vec<RiderEntry>,
    #[serde(default)]
    pub routes: Vec<RouteEntry>,
    #[serde(default)]
    pub landmarks: Vec<LandmarkEntry>,
}

/// One tracked rider. `feed` is the opaque identifier of the tracker's data
/// stream; `distances` optionally names the precomputed distances dataset
/// used to annotate progress along a route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiderEntry {
    pub name: String,
    pub feed: String,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distances: Option<String>,
}

/// A route to draw. `points` names the server-side polyline file,
/// `distances` the matching distances dataset (if any).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteEntry {
    pub points: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distances: Option<String>,
    pub color: String,
    pub name: String,
    /// Fit the map view to this route's bounds once it is drawn.
    #[serde(default)]
    pub zoomto: bool,
}

/// A fixed point of interest (control, overnight, finish, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LandmarkEntry {
    pub position: LatLon,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popup: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_parses_with_defaults() {
        // Double-hash delimiters: the color values contain `"#`.
        let raw = r##"{
            "root": "http://localhost:5000",
            "spot_feeds": [
                { "name": "Michal Young",
                  "feed": "0GiLP5jn9iVj8z8qm90QaTnkpygdAmouk",
                  "color": "#0066ff",
                  "distances": "DariDartUTM.json" }
            ],
            "routes": [
                { "points": "DariDart.json",
                  "distances": "DariDartUTM.json",
                  "color": "#196666",
                  "name": "Dari Dart",
                  "zoomto": true }
            ]
        }"##;
        let config: TrackerConfig = serde_json::from_str(raw).unwrap();
        assert_eq!(config.zoom, 5);
        assert_eq!(config.center, [40.8890347, -97.154832]);
        assert_eq!(config.spot_feeds.len(), 1);
        assert!(config.rental_spots.is_empty());
        assert!(config.routes[0].zoomto);
        assert_eq!(
            config.spot_feeds[0].distances.as_deref(),
            Some("DariDartUTM.json")
        );
    }
}
