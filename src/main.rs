mod compute;
mod http_client;
mod model;

use clap::Parser;
use compute::model::credentials::ServiceAccountKey;
use compute::model::network::Network;
use compute::networks::{DEFAULT_ENDPOINT, NetworksService};
use compute::token::{COMPUTE_SCOPE, TokenProvider};
use model::arg::Args;

#[tokio::main]
async fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging; quiet by default so success produces no output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    // Load credentials
    let key = ServiceAccountKey::load(&args.creds).unwrap_or_else(|e| {
        tracing::error!("{e:#}");
        std::process::exit(1);
    });

    // Build the authenticated networks service
    let client = http_client::build_client().unwrap_or_else(|e| {
        tracing::error!("cannot create compute networks service: {e:#}");
        std::process::exit(1);
    });

    let token = TokenProvider::new(key, client.clone())
        .fetch(COMPUTE_SCOPE)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("cannot create compute networks service: {e}");
            std::process::exit(1);
        });

    let networks = NetworksService::new(client, DEFAULT_ENDPOINT, token);

    // Issue the single insert call
    let network = Network::new(args.name.as_str());
    if let Err(e) = networks.insert(&args.project, &network).await {
        tracing::error!("cannot create network: {e}");
        std::process::exit(1);
    }
}
