use crate::satellite::consts;
use crate::satellite::errors::SatelliteImageError;
use crate::satellite::models::{Coordinate, ImageRequestParams};

pub fn validate_coordinates(
    lat: Option<&str>,
    lon: Option<&str>,
) -> Result<Coordinate, SatelliteImageError> {
    let (Some(lat), Some(lon)) = (lat, lon) else {
        return Err(SatelliteImageError::InvalidFormat(
            "Invalid coordinates format",
        ));
    };
    let lat: f64 = lat
        .parse()
        .map_err(|_| SatelliteImageError::InvalidFormat("Invalid coordinates format"))?;
    let lon: f64 = lon
        .parse()
        .map_err(|_| SatelliteImageError::InvalidFormat("Invalid coordinates format"))?;
    // `f64::from_str` happily accepts "NaN" and "inf", neither of which is a coordinate.
    if !lat.is_finite() || !lon.is_finite() {
        return Err(SatelliteImageError::InvalidFormat(
            "Invalid coordinates format",
        ));
    }
    if !(consts::MIN_LATITUDE..=consts::MAX_LATITUDE).contains(&lat)
        || !(consts::MIN_LONGITUDE..=consts::MAX_LONGITUDE).contains(&lon)
    {
        return Err(SatelliteImageError::OutOfRange(
            "Coordinates out of valid range",
        ));
    }
    Ok(Coordinate { lat, lon })
}

pub fn validate_image_params(
    zoom: Option<&str>,
    width: Option<&str>,
    height: Option<&str>,
) -> Result<ImageRequestParams, SatelliteImageError> {
    let zoom = parse_image_param(zoom, i64::from(consts::DEFAULT_ZOOM))?;
    let width = parse_image_param(width, i64::from(consts::DEFAULT_IMAGE_WIDTH))?;
    let height = parse_image_param(height, i64::from(consts::DEFAULT_IMAGE_HEIGHT))?;
    if !(0..=i64::from(consts::MAX_ZOOM)).contains(&zoom) {
        return Err(SatelliteImageError::OutOfRange(
            "Zoom level must be between 0 and 22",
        ));
    }
    let dimensions =
        i64::from(consts::MIN_IMAGE_DIMENSION)..=i64::from(consts::MAX_IMAGE_DIMENSION);
    if !dimensions.contains(&width) || !dimensions.contains(&height) {
        return Err(SatelliteImageError::OutOfRange(
            "Image dimensions must be between 1 and 1280 pixels",
        ));
    }
    Ok(ImageRequestParams {
        zoom: zoom as u8,
        width: width as u32,
        height: height as u32,
    })
}

fn parse_image_param(raw: Option<&str>, default: i64) -> Result<i64, SatelliteImageError> {
    match raw {
        None => Ok(default),
        Some(raw) => raw
            .parse()
            .map_err(|_| SatelliteImageError::InvalidFormat("Invalid image parameters format")),
    }
}
