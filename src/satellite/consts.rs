use std::time::Duration;

pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

pub const DEFAULT_ZOOM: u8 = 18;
pub const MAX_ZOOM: u8 = 22;

pub const DEFAULT_IMAGE_WIDTH: u32 = 600;
pub const DEFAULT_IMAGE_HEIGHT: u32 = 400;
pub const MIN_IMAGE_DIMENSION: u32 = 1;
pub const MAX_IMAGE_DIMENSION: u32 = 1280;

pub const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

pub const SATELLITE_IMAGE_CONTENT_TYPE: &str = "image/png";
