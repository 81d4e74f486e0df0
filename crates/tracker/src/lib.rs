//! State-synchronization engine for live rider tracking: polls the backend
//! for chunked observation updates and keeps markers, traces, and progress
//! popups on an external map surface in step with them.

use std::sync::Arc;

use model::config::{LandmarkEntry, RouteEntry, TrackerConfig};
use tokio::sync::Mutex;

pub mod annotate;
pub mod client;
pub mod error;
pub mod map;
pub mod registry;
pub mod routes;
pub mod scheduler;

mod reducer;
#[cfg(test)]
pub(crate) mod testing;

use client::FeedClient;
use error::TrackerResult;
use map::MapSurface;
use registry::Registry;
use scheduler::ProviderClass;

/// The tracking engine. Owns the rider registry and the feed client, draws
/// through the map surface it was given, and runs until the process exits.
pub struct Enroute<S: MapSurface> {
    pub(crate) registry: Mutex<Registry>,
    pub(crate) client: FeedClient,
    pub(crate) surface: S,
    pub(crate) personal_chunks: Vec<Vec<String>>,
    pub(crate) rental_feeds: Vec<String>,
    routes: Vec<RouteEntry>,
    landmarks: Vec<LandmarkEntry>,
}

impl<S: MapSurface> Enroute<S> {
    pub fn new(config: TrackerConfig, surface: S) -> Arc<Self> {
        let registry = Registry::from_config(&config);
        log::info!(
            "tracking {} riders ({} personal, {} rental feeds)",
            registry.len(),
            registry.personal_feeds().len(),
            registry.rental_feeds().len()
        );
        let personal_chunks =
            scheduler::chunk_feeds(registry.personal_feeds(), scheduler::MAX_CHUNK);
        let rental_feeds = registry.rental_feeds().to_vec();
        Arc::new(Self {
            registry: Mutex::new(registry),
            client: FeedClient::new(config.root),
            surface,
            personal_chunks,
            rental_feeds,
            routes: config.routes,
            landmarks: config.landmarks,
        })
    }

    /// Draw the static content (landmarks, routes), then start the two poll
    /// timers. Returns once the timers are running; they keep going until
    /// the process exits.
    pub async fn run(self: Arc<Self>) {
        for landmark in &self.landmarks {
            self.draw_landmark(landmark);
        }
        for route in &self.routes {
            if let Err(why) = Arc::clone(&self).plot_route(route).await {
                // The map stays usable without the route overlay.
                log::error!("could not plot route {}: {}", route.name, why);
            }
        }
        scheduler::spawn_polls(&self);
    }

    /// One poll of one chunk: fetch the envelopes and reduce them into
    /// registry and map state.
    pub(crate) async fn poll(
        &self,
        provider: ProviderClass,
        feeds: &[String],
    ) -> TrackerResult<()> {
        let envelopes = match provider {
            ProviderClass::Personal => self.client.riders(feeds).await?,
            ProviderClass::Rental => self.client.rental_riders(feeds).await?,
        };
        log::debug!(
            "{:?} chunk returned {} observation(s)",
            provider,
            envelopes.len()
        );
        self.apply_envelopes(envelopes).await;
        Ok(())
    }
}
