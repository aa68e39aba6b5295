use std::{env, future::Future, net::SocketAddr};

use axum::Router;
use configs::{AppConfig, ServerConfig};
use tokio::net::{lookup_host, TcpListener};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Settings used when no config file can be loaded.
/// Reads `SERVER_HOST`, `SERVER_PORT` and `TOKIO_WORKER_THREADS`, then applies
/// the same normalization and validation as a config file.
pub fn config_from_env() -> anyhow::Result<AppConfig> {
    config_from_lookup(|key| env::var(key).ok())
}

/// Like [`config_from_env`], reading variables through `var`.
pub fn config_from_lookup<F>(var: F) -> anyhow::Result<AppConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let host = var("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
    let port = var("SERVER_PORT")
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8081);
    let worker_threads = var("TOKIO_WORKER_THREADS").and_then(|v| v.parse::<usize>().ok());
    let mut cfg = AppConfig {
        server: ServerConfig { host, port, worker_threads },
        ..AppConfig::default()
    };
    cfg.normalize_and_validate()?;
    Ok(cfg)
}

/// Resolve the configured `host:port`; IP literals skip DNS.
pub async fn bind_addr(cfg: &ServerConfig) -> Result<SocketAddr, StartupError> {
    let raw = cfg.bind_addr();
    if let Ok(addr) = raw.parse::<SocketAddr>() {
        return Ok(addr);
    }
    let resolved = lookup_host(raw.as_str())
        .await
        .map_err(|e| StartupError::InvalidConfig(format!("server address {raw}: {e}")))?
        .next()
        .ok_or_else(|| StartupError::InvalidConfig(format!("server address {raw}: no addresses")));
    resolved
}

/// Build the router for `state` with the standard layers.
pub fn app(state: ServerState) -> Router {
    routes::build_router(state, build_cors())
}

/// Serve `state` on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, state: ServerState, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

/// Public entry: bind the configured address and run the HTTP server
/// with a fresh in-memory customer store.
pub async fn run<F>(cfg: ServerConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = bind_addr(&cfg).await?;
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;
    info!(%addr, "starting customer api");
    serve(listener, ServerState::in_memory(), shutdown).await?;
    info!(%addr, "customer api stopped");
    Ok(())
}
