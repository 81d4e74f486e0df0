use std::sync::Arc;

use model::{
    config::{LandmarkEntry, RouteEntry},
    LatLon,
};

use crate::{
    annotate::dist_desc,
    client::AlongQuery,
    error::TrackerResult,
    map::{MapSurface, MarkerStyle, PolylineStyle},
    Enroute,
};

impl<S: MapSurface> Enroute<S> {
    /// Fetch a route's points and draw it, wiring a click handler that
    /// reports the distance along the route at the clicked point.
    pub async fn plot_route(
        self: Arc<Self>,
        entry: &RouteEntry,
    ) -> TrackerResult<()> {
        let points = self.client.route_points(&entry.points).await?;
        log::info!("route {}: {} points", entry.name, points.len());
        let handle = self
            .surface
            .create_polyline(points, PolylineStyle::route(&entry.color));
        if entry.zoomto {
            self.surface.fit_bounds_to(handle);
        }

        let tracker = Arc::clone(&self);
        let name = entry.name.clone();
        let distances = entry.distances.clone();
        self.surface.on_click(
            handle,
            Box::new(move |position| {
                let tracker = Arc::clone(&tracker);
                let name = name.clone();
                let distances = distances.clone();
                tokio::spawn(async move {
                    tracker
                        .describe_route_point(position, &name, distances.as_deref())
                        .await;
                });
            }),
        );
        Ok(())
    }

    /// Open a transient popup describing a clicked route point.
    pub(crate) async fn describe_route_point(
        &self,
        position: LatLon,
        name: &str,
        distances: Option<&str>,
    ) {
        let Some(track) = distances else {
            self.surface.open_popup(position, name.to_owned());
            return;
        };
        let query = AlongQuery {
            position,
            prior: None,
            track: track.to_owned(),
        };
        match self.client.distance_along(&query).await {
            Ok(distance) => {
                let desc = format!("{}\n{}", name, dist_desc(distance));
                self.surface.open_popup(position, desc);
            }
            Err(why) => log::warn!("distance at route point failed: {}", why),
        }
    }

    /// Draw a single landmark marker with its popup text.
    pub fn draw_landmark(&self, entry: &LandmarkEntry) {
        let style = MarkerStyle::landmark(
            &entry.title,
            entry.icon.as_deref(),
            entry.color.as_deref(),
        );
        let marker = self.surface.create_marker(entry.position, style);
        let popup = entry
            .popup
            .clone()
            .unwrap_or_else(|| "No description provided".to_owned());
        self.surface.bind_popup(marker, popup);
    }
}
