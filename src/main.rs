use std::env;

use attendance_engine::api::{AppState, create_router};
use attendance_engine::config::ConfigLoader;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_CONFIG_DIR: &str = "./config/jp";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_dir =
        env::var("ATTENDANCE_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let config = ConfigLoader::load(&config_dir)?;

    let bind_address = config.service().bind_address.clone();
    info!(
        config_dir = %config_dir,
        service = %config.service().name,
        region = %config.service().region,
        holidays = config.calendar().len(),
        "Configuration loaded"
    );

    let router = create_router(AppState::new(config));
    let listener = TcpListener::bind(&bind_address).await?;
    info!(address = %bind_address, "Attendance engine listening");

    axum::serve(listener, router).await?;
    Ok(())
}
