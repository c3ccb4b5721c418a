use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use signinglog_admin::admin::admin_router;
use signinglog_admin::config::AppConfig;
use signinglog_admin::database::Database;
use signinglog_admin::signinglog::{AdminQueryService, SigningLogStore};

#[derive(Parser)]
#[command(name = "signinglog-admin")]
#[command(about = "Admin API for inspecting and pruning the signing log")]
#[command(version)]
struct Cli {
    /// Database URL (overrides DATABASE_URL)
    #[arg(long)]
    database_url: Option<String>,

    /// Listen host (overrides SERVER_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Listen port (overrides SERVER_PORT)
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "signinglog_admin=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load().context("Failed to load configuration")?;
    if let Some(url) = cli.database_url {
        config.database_url = url;
    }
    if let Some(host) = cli.host {
        config.server_host = host;
    }
    if let Some(port) = cli.port {
        config.server_port = port;
    }
    config.validate().context("Invalid configuration")?;
    info!("Configuration loaded");

    let database = Database::new(&config.database_url)
        .await
        .context("Failed to connect to the signing log database")?;
    database.run_migrations().await.context("Failed to apply schema")?;
    info!("Database ready");

    let store = SigningLogStore::with_page_size(Arc::new(database), config.page_size);
    let app = admin_router(AdminQueryService::new(store));

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Admin API listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
