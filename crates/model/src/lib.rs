pub mod config;
pub mod observation;

/// A raw latitude/longitude pair, in that order. The tracker feeds and the
/// route files both transmit positions as plain two-element arrays, not as
/// structured point objects, so the model keeps them that way.
pub type LatLon = [f64; 2];

/// Sentinel meaning "no prior observation is known" when querying for a
/// distance along a route.
pub const NO_PRIOR: LatLon = [0.0, 0.0];
