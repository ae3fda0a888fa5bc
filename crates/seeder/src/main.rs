//! CharSeed - Main entry point.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use charseed_domain::SeedDataset;
use charseed_seeder::config::SeederConfig;
use charseed_seeder::infrastructure::{HttpApiClient, ResilientApiClient};
use charseed_seeder::seeding::Seeder;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "charseed_seeder=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = SeederConfig::from_env();
    let clear = config.clear || std::env::args().any(|arg| arg == "--clear");

    tracing::info!(
        base_url = %config.base_url,
        max_attempts = config.max_attempts,
        clear,
        "starting data seeding"
    );

    let http = Arc::new(HttpApiClient::new(&config.base_url));
    let api = Arc::new(ResilientApiClient::new(http, config.retry()));
    let seeder = Seeder::new(api, config.throttle);

    let report = seeder.run(&SeedDataset::sample(), clear).await;
    if report.aborted {
        tracing::error!(
            base_url = %config.base_url,
            "seeding aborted, make sure the server is running"
        );
        return Ok(());
    }

    report.log_summary();
    tracing::info!("data seeding completed");

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
