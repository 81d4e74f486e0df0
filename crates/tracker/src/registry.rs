use indexmap::IndexMap;
use model::config::{RiderEntry, TrackerConfig};

use crate::map::{MarkerHandle, PolylineHandle};

/// Everything known about one tracked rider. The record is created at
/// configuration load time and mutated in place as observations arrive;
/// riders are never unregistered during a session.
#[derive(Debug)]
pub struct RiderRecord {
    pub name: String,
    pub feed: String,
    pub color: String,
    pub distances: Option<String>,
    /// Present exactly when at least one observation has been processed.
    pub marker: Option<MarkerHandle>,
    pub trace: Option<PolylineHandle>,
}

impl RiderRecord {
    fn from_entry(entry: &RiderEntry) -> Self {
        Self {
            name: entry.name.clone(),
            feed: entry.feed.clone(),
            color: entry.color.clone(),
            distances: entry.distances.clone(),
            marker: None,
            trace: None,
        }
    }
}

/// Rider records indexed by feed id, plus the two ordered feed sequences
/// that drive chunk partitioning. Every id in either sequence has exactly
/// one record.
#[derive(Debug, Default)]
pub struct Registry {
    riders: IndexMap<String, RiderRecord>,
    personal: Vec<String>,
    rental: Vec<String>,
}

impl Registry {
    pub fn from_config(config: &TrackerConfig) -> Self {
        let mut registry = Registry::default();
        for entry in &config.spot_feeds {
            registry.riders.insert(entry.feed.clone(), RiderRecord::from_entry(entry));
            registry.personal.push(entry.feed.clone());
        }
        for entry in &config.rental_spots {
            registry.riders.insert(entry.feed.clone(), RiderRecord::from_entry(entry));
            registry.rental.push(entry.feed.clone());
        }
        registry
    }

    /// Personal tracker feed ids, in configuration order.
    pub fn personal_feeds(&self) -> &[String] {
        &self.personal
    }

    /// Rental tracker feed ids, in configuration order.
    pub fn rental_feeds(&self) -> &[String] {
        &self.rental
    }

    pub fn get(&self, feed: &str) -> Option<&RiderRecord> {
        self.riders.get(feed)
    }

    pub fn get_mut(&mut self, feed: &str) -> Option<&mut RiderRecord> {
        self.riders.get_mut(feed)
    }

    pub fn len(&self) -> usize {
        self.riders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.riders.is_empty()
    }
}
