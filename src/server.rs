use std::{net::SocketAddr, str::FromStr, sync::Arc};

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{
    api,
    config::Config,
    error::{Error, Result},
    lastfm::{LastFmClient, ScrobbleApi},
    types::Window,
};

pub struct AppState<A> {
    pub api: Arc<A>,
    pub windows: Arc<Vec<Window>>,
}

impl<A> AppState<A> {
    pub fn new(api: A, windows: Vec<Window>) -> Self {
        Self {
            api: Arc::new(api),
            windows: Arc::new(windows),
        }
    }
}

impl<A> Clone for AppState<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            windows: Arc::clone(&self.windows),
        }
    }
}

pub fn build_router<A: ScrobbleApi + 'static>(state: AppState<A>) -> Router {
    Router::new()
        .route("/", get(api::home).post(api::submit))
        .route("/health", get(api::health))
        .route("/{username}", get(api::user_redirect))
        .route("/{username}/", get(api::user_page::<A>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn start_api_server(config: &Config) -> Result<()> {
    let addr = SocketAddr::from_str(&config.server_addr).map_err(|e| {
        Error::Config(format!(
            "invalid SERVER_ADDRESS '{}': {}",
            config.server_addr, e
        ))
    })?;

    let state = AppState::new(LastFmClient::from_config(config), config.windows.clone());
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("listening on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
