use touchline::server::{config::Config, model::app::AppState, router, startup};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        tracing::error!("Failed to start server: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), touchline::server::error::Error> {
    let config = Config::from_env()?;

    let session = startup::connect_to_session(&config).await?;
    let db = startup::connect_to_database(&config).await?;
    let cache = startup::connect_to_cache(&config).await?;

    let app = router::routes()
        .with_state(AppState { db, cache })
        .layer(session);

    let listener = tokio::net::TcpListener::bind(config.bind_address)
        .await
        .map_err(|e| {
            touchline::server::error::Error::InternalError(format!(
                "Failed to bind {}: {}",
                config.bind_address, e
            ))
        })?;

    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app).await.map_err(|e| {
        touchline::server::error::Error::InternalError(format!("Server error: {}", e))
    })?;

    Ok(())
}
