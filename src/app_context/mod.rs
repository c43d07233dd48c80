use crate::cli::Args;
use crate::satellite::mapbox::MapboxClient;

#[derive(Clone)]
pub struct AppContext {
    pub mapbox: MapboxClient,
}

pub fn init(args: &Args) -> AppContext {
    AppContext {
        mapbox: MapboxClient::new(args),
    }
}
