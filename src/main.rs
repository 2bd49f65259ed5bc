use color_eyre::eyre::Result;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use gatehouse::{
    Argon2CredentialHasher, AuthService, PostgresUserStore, RedisSessionStore,
    adapters::config::GatehouseSetting, configure_postgresql, configure_redis,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    color_eyre::install().expect("Failed to install color_eyre");
    init_tracing().expect("Failed to initialize tracing");

    // Load configuration
    let config = GatehouseSetting::load();

    // Setup database connection pool and run migrations
    let pg_pool = configure_postgresql().await;

    // Setup Redis connection
    let redis_conn = Arc::new(Mutex::new(configure_redis()));

    // Create stores and the hasher
    let user_store = PostgresUserStore::new(pg_pool);
    let session_store = RedisSessionStore::new(redis_conn, config.session.time_to_live_seconds);
    let hasher = Argon2CredentialHasher::new();

    // Create the auth service
    let auth_service = AuthService::new(user_store, hasher, session_store);

    // Run as standalone server
    let listener = tokio::net::TcpListener::bind(config.application.address()).await?;
    tracing::info!("Starting gatehouse auth service...");

    auth_service
        .run_standalone(listener, Some(config.allowed_origins.clone()))
        .await?;

    Ok(())
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
