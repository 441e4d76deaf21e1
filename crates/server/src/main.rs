use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use tracing::{info, warn};

mod api;
mod app_state;
mod config;

use app_state::AppState;
use config::load_settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let settings = load_settings();
    if !settings.data_file.exists() {
        warn!(
            data_file = %settings.data_file.display(),
            "data file not found; /data.json will answer 404 until it is generated"
        );
    }

    let state = AppState {
        data_file: settings.data_file,
        static_dir: settings.static_dir,
    };
    let app = api::build_router(Arc::new(state));

    let addr: SocketAddr = settings
        .server_bind
        .parse()
        .with_context(|| format!("invalid bind address '{}'", settings.server_bind))?;
    info!(%addr, "server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
