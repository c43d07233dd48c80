use clap::Parser;
use std::net::SocketAddr;
use url::Url;


#[derive(Debug, Parser)]
pub struct Args {
    #[arg(long)]
    #[arg(default_value = "0.0.0.0:3030")]
    pub listen_address: SocketAddr,
    #[arg(long, env = "MAPBOX_ACCESS_TOKEN")]
    pub mapbox_access_token: String,
    #[arg(long)]
    #[arg(default_value = "https://api.mapbox.com/styles/v1/mapbox/satellite-v9/static")]
    pub mapbox_api_url: Url,
    /// Origins allowed by the CORS policy. `*` allows any origin.
    #[arg(long, value_delimiter = ',')]
    #[arg(default_value = "http://127.0.0.1:3000,http://localhost:3000")]
    pub allowed_origins: Vec<String>,
    #[arg(long)]
    pub debug: bool,
}
