//! HTTP boundary of the sprout project generator.
//!
//! | Route | Method | Purpose |
//! |-------|--------|---------|
//! | `/api/projects/generate` | POST | Validate, persist and return the project as a zip archive |
//! | `/api/projects/preview` | POST | Validate and return the generated files as JSON |
//! | `/api/projects/:id` | GET | Fetch a persisted configuration |
//! | `/healthz` | GET | Liveness probe |

#![forbid(unsafe_code)]

mod config;
mod error;
mod handlers;
mod middleware;
mod store;
mod telemetry;

use std::sync::{Arc, atomic::AtomicU64};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tracing::info;

pub use config::{
    ConfigError, DEFAULT_BIND, DEFAULT_BODY_LIMIT, ENV_BIND, ENV_BODY_LIMIT, ENV_LOG_FORMAT,
    LogFormat, ServerConfig,
};
pub use error::ApiError;
pub use middleware::REQUEST_ID_HEADER;
pub use store::{MemoryStore, ProjectRecord, ProjectStore};
pub use telemetry::init_tracing;

/// Shared handler state. Cloning is cheap; all clones see the same store.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProjectStore>,
    pub body_limit: usize,
    pub(crate) request_id_seed: Arc<AtomicU64>,
}

impl AppState {
    pub fn new(store: Arc<dyn ProjectStore>, body_limit: usize) -> Self {
        Self {
            store,
            body_limit,
            request_id_seed: Arc::new(AtomicU64::new(1)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(MemoryStore::new()), DEFAULT_BODY_LIMIT)
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(handlers::healthz))
        .route("/api/projects/generate", post(handlers::generate_project))
        .route("/api/projects/preview", post(handlers::preview_project))
        .route("/api/projects/:id", get(handlers::get_project))
        .layer(DefaultBodyLimit::max(state.body_limit))
        .layer(from_fn_with_state(state.clone(), middleware::request_tracing))
        .with_state(state)
}

/// Bind `config.bind` and serve until Ctrl-C or SIGTERM.
pub async fn serve(config: &ServerConfig) -> std::io::Result<()> {
    let state = AppState::new(Arc::new(MemoryStore::new()), config.body_limit);
    let app = build_router(state);

    let listener = TcpListener::bind(&config.bind).await?;
    info!(
        addr = %listener.local_addr()?,
        body_limit = config.body_limit,
        "sprout server listening"
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await?;
    info!("sprout server stopped");
    Ok(())
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        match (
            signal(SignalKind::terminate()),
            signal(SignalKind::interrupt()),
        ) {
            (Ok(mut sigterm), Ok(mut sigint)) => {
                tokio::select! {
                    _ = sigterm.recv() => {}
                    _ = sigint.recv() => {}
                }
            }
            _ => {
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use sprout_manifest::ProjectConfig;

    pub(crate) const DEMO: &str = r#"{
        "groupId": "com.example",
        "artifactId": "demo",
        "name": "Demo",
        "javaVersion": "21",
        "springBootVersion": "3.1.5",
        "packageType": "jar",
        "dependencies": [],
        "database": {
            "type": null,
            "options": {
                "url": "", "name": "", "username": "", "password": "",
                "generateDdl": true, "showSql": false, "connectionPool": false
            }
        },
        "entities": [],
        "relationships": [],
        "generationOptions": {
            "controllers": true, "services": true, "repositories": true, "dtos": false,
            "docker": false, "dockerCompose": false, "readme": true, "gitignore": true,
            "documentation": "none"
        }
    }"#;

    pub(crate) fn demo_config() -> ProjectConfig {
        sprout_manifest::parse_str(DEMO).unwrap()
    }
}
