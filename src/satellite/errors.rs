use crate::satellite::mapbox::MapboxApiError;
use crate::satellite::responses::ErrorResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

/// Everything that can go wrong while serving a satellite image request.
#[derive(Debug)]
pub enum SatelliteImageError {
    /// The input is absent or not parseable as a number.
    InvalidFormat(&'static str),
    /// The input parsed fine but falls outside the documented bounds.
    OutOfRange(&'static str),
    /// The Mapbox API call failed, timed out, or returned a non-success status.
    Upstream(MapboxApiError),
}

impl From<MapboxApiError> for SatelliteImageError {
    fn from(err: MapboxApiError) -> Self {
        Self::Upstream(err)
    }
}

impl IntoResponse for SatelliteImageError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            SatelliteImageError::InvalidFormat(message)
            | SatelliteImageError::OutOfRange(message) => {
                (StatusCode::BAD_REQUEST, message.to_string())
            }
            SatelliteImageError::Upstream(err) => {
                tracing::error!(error = %err, "Failed to fetch a satellite image from Mapbox.");
                (StatusCode::BAD_GATEWAY, err.to_string())
            }
        };
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
