use crate::cli::Args;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub fn init(args: &Args) {
    let default_directive = if args.debug {
        "satellite_image_server=debug"
    } else {
        "satellite_image_server=info"
    };
    let env_filter = EnvFilter::default().add_directive(default_directive.parse().unwrap());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer())
        .init();
}
