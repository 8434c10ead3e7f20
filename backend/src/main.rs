mod application;
mod config;
mod domain;
mod infrastructure;

use std::sync::Arc;

use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::infrastructure::driven::{RestIdentityProvider, RestProfileStore};
use crate::infrastructure::driving::http::register_routes;
use crate::infrastructure::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("medportal_server=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::load()?;

    let state = AppState {
        identity: Arc::new(RestIdentityProvider::new(
            config.identity.base_url.clone(),
            config.identity.api_key.clone(),
        )),
        profiles: Arc::new(RestProfileStore::new(config.profile_store.base_url.clone())),
        users_collection: config.profile_store.users_collection.clone(),
    };

    let app = register_routes()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    info!("registration service listening on {}", config.listen_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
