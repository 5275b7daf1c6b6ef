use crate::routes::{health_routes, passage_routes, translation_routes};
use crate::{AppState, Result, WebError};
use axum::http::{header, Method, Uri};
use axum::Router;
use lectern_core::LookupResolver;
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use lectern_config::ServerConfig;

/// Assemble every route over `state`, layered per `config`
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    let app = Router::new()
        .merge(translation_routes())
        .merge(passage_routes())
        .merge(health_routes())
        .fallback(fallback)
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if config.cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE]);
        app.layer(cors)
    } else {
        app
    }
}

async fn fallback(uri: Uri) -> WebError {
    WebError::NotFound(uri.path().to_string())
}

pub async fn start_server(config: &ServerConfig, resolver: LookupResolver) -> Result<()> {
    let translations = resolver.translation_count();
    let app = build_router(AppState::new(resolver), config);

    let addr: SocketAddr = config
        .bind_address()
        .parse()
        .map_err(|e| WebError::Config(format!("Invalid address: {e}")))?;

    tracing::info!(translations, "Starting web server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(WebError::Io)?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(WebError::Io)?;

    tracing::info!("Web server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
