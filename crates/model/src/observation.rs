use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::LatLon;

/// One entry of the JSON array returned by the `_riders` and `_tl_riders`
/// endpoints: the latest observation for a tracker feed plus the recent
/// positions the server still holds for it (bounded to the last hour).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiderEnvelope {
    pub id: String,
    pub latest: Observation,
    #[serde(default)]
    pub path: Vec<LatLon>,
}

/// A single tracker observation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Observation {
    #[serde(rename = "dateTime")]
    pub date_time: DateTime<Utc>,
    pub latlon: LatLon,
    /// Position of the observation before this one, if the server knows it.
    /// Absent means "no prior"; the distance query then sends the (0, 0)
    /// sentinel instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prior_position: Option<LatLon>,
}

/// Response of the `_along` endpoint. `result` is a distance in kilometers
/// measured along a precomputed track dataset; `-1` means the queried
/// position could not be matched to the track ("off course").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlongResponse {
    pub result: f64,
}
