use crate::app_context::AppContext;
use crate::satellite::consts::SATELLITE_IMAGE_CONTENT_TYPE;
use crate::satellite::errors::SatelliteImageError;
use crate::satellite::requests::SatelliteImageQueryParams;
use crate::satellite::validators;
use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

#[axum::debug_handler]
pub async fn satellite_image(
    State(app_context): State<AppContext>,
    Query(params): Query<SatelliteImageQueryParams>,
) -> Result<Response, SatelliteImageError> {
    let coordinate =
        validators::validate_coordinates(params.lat.as_deref(), params.lon.as_deref())?;
    let image_params = validators::validate_image_params(
        params.zoom.as_deref(),
        params.width.as_deref(),
        params.height.as_deref(),
    )?;
    let image_bytes = app_context
        .mapbox
        .fetch_image(&coordinate, &image_params)
        .await?;
    Ok((
        [(header::CONTENT_TYPE, SATELLITE_IMAGE_CONTENT_TYPE)],
        image_bytes,
    )
        .into_response())
}

pub async fn satellite_image_preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}
