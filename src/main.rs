mod routes;
mod state;

use anyhow::Result;
use axum::Router;
use std::net::SocketAddr;

use iimcal_core::Config;

use crate::state::AppState;

const DEFAULT_PORT: u16 = 8000;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    // Missing GOOGLE_SHEET_ID is fatal at startup, never a silent
    // empty calendar later.
    let config = Config::from_env()?;
    let state = AppState::new(&config)?;

    let app: Router = routes::calendars::router().with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT));
    tracing::info!("iimcal-server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
