use crate::cli::Args;
use http::header::CONTENT_TYPE;
use http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

pub fn layer(args: &Args) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);
    if args.allowed_origins.iter().any(|origin| origin == "*") {
        return cors.allow_origin(Any);
    }
    let origins: Vec<HeaderValue> = args
        .allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse()
                .expect("Failed to parse an allowed CORS origin.")
        })
        .collect();
    cors.allow_origin(origins)
}
