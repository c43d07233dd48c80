use serde::{Deserialize, Serialize};

/// Raw query parameters of the satellite image endpoint. Everything arrives as an optional
/// string so that validation owns every error case instead of the deserializer.
#[derive(Serialize, Deserialize)]
pub struct SatelliteImageQueryParams {
    pub lat: Option<String>,
    pub lon: Option<String>,
    pub zoom: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
}
