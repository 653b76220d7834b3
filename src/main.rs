use puckstats::{update, StatsClient, TrackerConfig};

#[tokio::main]
async fn main() -> puckstats::Result<()> {
    tracing_subscriber::fmt::init();

    let config = TrackerConfig::from_env();
    let store_path = config.store_path.clone();
    let client = StatsClient::new(config);

    update::bulk_update(&client, &store_path).await
}
