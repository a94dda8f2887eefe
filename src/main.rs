mod logging;
mod routes;
mod settings;
mod state;

use std::net::{IpAddr, SocketAddr};

use anyhow::{Context, Result};
use hive_events_core::config::Settings;

use crate::settings::ServerSettings;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let server = ServerSettings::from_env()?;
    logging::init(&server.log_level)?;

    let settings = Settings::from_env()?;
    let state = AppState::new(&settings)?;
    let app = routes::app(state);

    let host: IpAddr = server
        .host
        .parse()
        .with_context(|| format!("Invalid HIVE_EVENTS_HOST '{}'", server.host))?;
    let addr = SocketAddr::from((host, server.port));
    log::info!("hive-events listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
