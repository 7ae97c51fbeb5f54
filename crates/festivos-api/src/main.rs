use std::sync::Arc;

use festivos_api::{create_router, AppState, ServerConfig};
use festivos_calendar::{colombia, HolidayService};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = ServerConfig::from_env()?;
    let service = HolidayService::new(colombia());
    let state = Arc::new(AppState::new(service, config.clone()));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.addr).await?;
    info!(addr = %config.addr, "festivos API listening");
    axum::serve(listener, app).await?;

    Ok(())
}
