use model::{
    observation::{AlongResponse, RiderEnvelope},
    LatLon, NO_PRIOR,
};
use serde::Serialize;

use crate::error::TrackerResult;

/// Parameters of a distance-along-route lookup. `track` names the
/// precomputed distances dataset on the server.
#[derive(Debug, Clone)]
pub struct AlongQuery {
    pub position: LatLon,
    pub prior: Option<LatLon>,
    pub track: String,
}

/// HTTP access to the tracking backend.
pub struct FeedClient {
    http: reqwest::Client,
    root: String,
}

impl FeedClient {
    pub fn new<S: Into<String>>(root: S) -> Self {
        let mut root = root.into();
        while root.ends_with('/') {
            root.pop();
        }
        Self {
            http: reqwest::Client::new(),
            root,
        }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.root, endpoint)
    }

    /// Latest observations for a chunk of personal tracker feeds.
    pub async fn riders(
        &self,
        feeds: &[String],
    ) -> TrackerResult<Vec<RiderEnvelope>> {
        self.feed_query("_riders", feeds).await
    }

    /// Latest observations for rental tracker feeds, served from the
    /// aggregated third-party namespace.
    pub async fn rental_riders(
        &self,
        feeds: &[String],
    ) -> TrackerResult<Vec<RiderEnvelope>> {
        self.feed_query("_tl_riders", feeds).await
    }

    async fn feed_query(
        &self,
        endpoint: &str,
        feeds: &[String],
    ) -> TrackerResult<Vec<RiderEnvelope>> {
        let query: Vec<(&str, &str)> =
            feeds.iter().map(|feed| ("feed", feed.as_str())).collect();
        log::debug!("querying {} for {} feeds", endpoint, feeds.len());
        let envelopes = self
            .http
            .get(self.url(endpoint))
            .query(&query)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(envelopes)
    }

    /// Distance in kilometers along the named track, `-1` meaning the
    /// position could not be matched to it.
    pub async fn distance_along(&self, query: &AlongQuery) -> TrackerResult<f64> {
        #[derive(Serialize)]
        struct Params<'a> {
            lat: f64,
            lng: f64,
            prior_lat: f64,
            prior_lng: f64,
            track: &'a str,
        }
        let prior = query.prior.unwrap_or(NO_PRIOR);
        let params = Params {
            lat: query.position[0],
            lng: query.position[1],
            prior_lat: prior[0],
            prior_lng: prior[1],
            track: &query.track,
        };
        let response: AlongResponse = self
            .http
            .get(self.url("_along"))
            .query(&params)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(response.result)
    }

    /// Points of a named route polyline.
    pub async fn route_points(&self, route: &str) -> TrackerResult<Vec<LatLon>> {
        let points = self
            .http
            .get(self.url("_get_route"))
            .query(&[("route", route)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(points)
    }
}
