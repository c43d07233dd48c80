use crate::cli::Args;
use crate::satellite::consts::UPSTREAM_TIMEOUT;
use crate::satellite::models::{Coordinate, ImageRequestParams};
use axum::body::Bytes;
use http::StatusCode;
use std::fmt;
use url::Url;

/// Client for the Mapbox Static Images API.
#[derive(Clone)]
pub struct MapboxClient {
    http_client: reqwest::Client,
    base_url: Url,
    access_token: String,
}

impl MapboxClient {
    pub fn new(args: &Args) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(UPSTREAM_TIMEOUT)
            .build()
            .expect("Failed to construct the Mapbox HTTP client.");
        Self {
            http_client,
            base_url: args.mapbox_api_url.clone(),
            access_token: args.mapbox_access_token.clone(),
        }
    }

    pub fn image_url(&self, coordinate: &Coordinate, image_params: &ImageRequestParams) -> String {
        format!(
            "{}/{},{},{}/{}x{}@2x?access_token={}",
            self.base_url.as_str().trim_end_matches('/'),
            coordinate.lon,
            coordinate.lat,
            image_params.zoom,
            image_params.width,
            image_params.height,
            self.access_token,
        )
    }

    /// Performs a single GET against the Mapbox API and returns the response body unmodified.
    /// Never retries; a slow upstream is cut off by the client-level timeout.
    pub async fn fetch_image(
        &self,
        coordinate: &Coordinate,
        image_params: &ImageRequestParams,
    ) -> Result<Bytes, MapboxApiError> {
        let url = self.image_url(coordinate, image_params);
        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|err| MapboxApiError::Transport(err.without_url()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(MapboxApiError::BadStatus(status));
        }
        response
            .bytes()
            .await
            .map_err(|err| MapboxApiError::Transport(err.without_url()))
    }
}

#[derive(Debug)]
pub enum MapboxApiError {
    BadStatus(StatusCode),
    // The URL is stripped from the error so the access token can't end up in responses or logs.
    Transport(reqwest::Error),
}

impl fmt::Display for MapboxApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapboxApiError::BadStatus(status) => {
                write!(f, "Mapbox API responded with status {status}")
            }
            MapboxApiError::Transport(err) => {
                write!(f, "Failed to fetch image from Mapbox: {err}")
            }
        }
    }
}
