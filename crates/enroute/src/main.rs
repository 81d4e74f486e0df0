use std::{env, fs};

use model::config::TrackerConfig;
use tracker::Enroute;

mod surface;

use surface::ConsoleSurface;

#[tokio::main]
async fn main() {
    env_logger::init();

    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "enroute.json".to_owned());
    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|why| panic!("could not read config '{}': {}", path, why));
    let config: TrackerConfig =
        serde_json::from_str(&raw).expect("invalid configuration file");

    let surface = ConsoleSurface::new(config.center, config.zoom);
    let tracker = Enroute::new(config, surface);
    tracker.run().await;

    tokio::signal::ctrl_c()
        .await
        .expect("failed to listen for ctrl-c");
    log::info!("shutting down");
}
