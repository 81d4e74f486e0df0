use model::{observation::RiderEnvelope, LatLon};

use crate::{
    annotate::AnnotationContext,
    error::{TrackerError, TrackerResult},
    map::{MapSurface, MarkerHandle, MarkerStyle, PolylineStyle},
    registry::RiderRecord,
    Enroute,
};

impl<S: MapSurface> Enroute<S> {
    /// Apply a chunk's worth of observations, in list order. A bad envelope
    /// only costs itself: the rest of the list is still processed.
    pub(crate) async fn apply_envelopes(&self, envelopes: Vec<RiderEnvelope>) {
        for envelope in envelopes {
            let id = envelope.id.clone();
            if let Err(why) = self.apply_envelope(envelope).await {
                log::warn!("dropping observation for {}: {}", id, why);
            }
        }
    }

    /// Update one rider from one observation envelope: upsert the marker,
    /// move it, refresh the trace, then annotate the popup.
    ///
    /// No timestamp comparison happens here. Responses from overlapping
    /// cycles apply in arrival order, so a stale observation can overwrite
    /// a fresher one until the next cycle corrects it (last-applied-wins,
    /// pinned by `stale_arrival_overwrites_fresh_position` below).
    async fn apply_envelope(&self, envelope: RiderEnvelope) -> TrackerResult<()> {
        let context = {
            let mut registry = self.registry.lock().await;
            let rider = registry
                .get_mut(&envelope.id)
                .ok_or_else(|| TrackerError::UnknownFeed(envelope.id.clone()))?;

            let marker = self.ensure_marker(rider, envelope.latest.latlon);
            self.surface.move_marker(marker, envelope.latest.latlon);

            if !envelope.path.is_empty() {
                match rider.trace {
                    Some(trace) => {
                        self.surface.update_polyline(trace, envelope.path.clone())
                    }
                    None => {
                        rider.trace = Some(self.surface.create_polyline(
                            envelope.path.clone(),
                            PolylineStyle::trace(),
                        ))
                    }
                }
            }

            AnnotationContext {
                name: rider.name.clone(),
                marker,
                distances: rider.distances.clone(),
            }
            // Registry lock is released here; the annotation below may wait
            // on the distance service.
        };
        self.annotate(&context, &envelope.latest).await;
        Ok(())
    }

    /// Create the rider's marker if this is the first observation for them.
    /// Safe to call on every observation: an existing marker is reused.
    fn ensure_marker(
        &self,
        rider: &mut RiderRecord,
        position: LatLon,
    ) -> MarkerHandle {
        if let Some(marker) = rider.marker {
            return marker;
        }
        log::debug!("first observation for {}, creating marker", rider.name);
        let marker = self
            .surface
            .create_marker(position, MarkerStyle::rider(&rider.name, &rider.color));
        rider.marker = Some(marker);
        marker
    }
}
