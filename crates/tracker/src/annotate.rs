use chrono::{DateTime, Duration, Local, Utc};
use model::observation::Observation;

use crate::{
    client::AlongQuery,
    map::{MapSurface, MarkerHandle},
    Enroute,
};

/// What the reducer hands over for popup composition: the rider fields it
/// copied out while holding the registry lock.
pub(crate) struct AnnotationContext {
    pub name: String,
    pub marker: MarkerHandle,
    pub distances: Option<String>,
}

/// Humanized elapsed time, in the style of moment.js `fromNow()`.
/// Observations come from the past, so a clock skewed into the future is
/// clamped to "a few seconds ago".
pub fn ago(elapsed: Duration) -> String {
    let seconds = elapsed.num_seconds().max(0);
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();
    if seconds < 45 {
        "a few seconds ago".to_owned()
    } else if seconds < 90 {
        "a minute ago".to_owned()
    } else if minutes < 45 {
        format!("{} minutes ago", minutes.max(2))
    } else if minutes < 90 {
        "an hour ago".to_owned()
    } else if hours < 22 {
        format!("{} hours ago", hours.max(2))
    } else if hours < 36 {
        "a day ago".to_owned()
    } else {
        format!("{} days ago", days.max(2))
    }
}

/// Absolute local time plus how long ago it was, formatted for a popup.
pub fn time_desc(time: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let local = time.with_timezone(&Local);
    format!(
        "{}<br />({})",
        local.format("%I:%M %P<br />%a %b %-d"),
        ago(now.signed_duration_since(time))
    )
}

/// Rounded kilometers and miles; any negative distance is the "could not
/// be matched to the track" signal.
pub fn dist_desc(dist_km: f64) -> String {
    if dist_km < 0.0 {
        return "off course".to_owned();
    }
    let km = dist_km.round() as i64;
    let mi = (dist_km * 0.6213).round() as i64;
    format!("{}km ({}mi)", km, mi)
}

impl<S: MapSurface> Enroute<S> {
    /// Bind a progress description to the rider's marker, with distance
    /// along the route when the rider has a distances dataset configured.
    pub(crate) async fn annotate(
        &self,
        context: &AnnotationContext,
        observation: &Observation,
    ) {
        match &context.distances {
            Some(track) => {
                self.annotate_with_distance(context, observation, track).await
            }
            None => self.annotate_time_only(context, observation),
        }
    }

    fn annotate_time_only(
        &self,
        context: &AnnotationContext,
        observation: &Observation,
    ) {
        let desc = format!(
            "<p>{}<br />{}</p>",
            context.name,
            time_desc(observation.date_time, Utc::now())
        );
        self.surface.bind_popup(context.marker, desc);
    }

    async fn annotate_with_distance(
        &self,
        context: &AnnotationContext,
        observation: &Observation,
        track: &str,
    ) {
        let query = AlongQuery {
            position: observation.latlon,
            prior: observation.prior_position,
            track: track.to_owned(),
        };
        match self.client.distance_along(&query).await {
            Ok(distance) => {
                let desc = format!(
                    "<p>{}<br />{}<br />{}</p>",
                    context.name,
                    time_desc(observation.date_time, Utc::now()),
                    dist_desc(distance)
                );
                self.surface.bind_popup(context.marker, desc);
            }
            Err(why) => {
                // Popup keeps its previous content until the next cycle.
                log::warn!("distance lookup for {} failed: {}", context.name, why);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn distance_formats_rounded_km_and_miles() {
        assert_eq!(dist_desc(42.0), "42km (26mi)");
        assert_eq!(dist_desc(0.0), "0km (0mi)");
        assert_eq!(dist_desc(100.4), "100km (62mi)");
    }

    #[test]
    fn negative_distance_means_off_course() {
        assert_eq!(dist_desc(-1.0), "off course");
        assert_eq!(dist_desc(-0.5), "off course");
    }

    #[test]
    fn elapsed_time_is_humanized() {
        assert_eq!(ago(Duration::seconds(10)), "a few seconds ago");
        assert_eq!(ago(Duration::seconds(60)), "a minute ago");
        assert_eq!(ago(Duration::minutes(3)), "3 minutes ago");
        assert_eq!(ago(Duration::minutes(100)), "2 hours ago");
        assert_eq!(ago(Duration::hours(30)), "a day ago");
        assert_eq!(ago(Duration::days(3)), "3 days ago");
        // Clock skew never produces "in the future" text.
        assert_eq!(ago(Duration::seconds(-30)), "a few seconds ago");
    }

    #[test]
    fn time_description_carries_relative_part() {
        let time = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 3, 0).unwrap();
        let desc = time_desc(time, now);
        assert!(desc.ends_with("(3 minutes ago)"), "got {}", desc);
        assert!(desc.contains("<br />"));
    }
}
