/// A validated geographic point in degrees.
#[derive(Copy, Clone, Debug)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Copy, Clone, Debug)]
pub struct ImageRequestParams {
    pub zoom: u8,
    pub width: u32,
    pub height: u32,
}
