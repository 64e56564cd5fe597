//! StepUp Storefront - public shoe shop server.
//!
//! Serves the catalog, session cart, checkout, and account JSON API on
//! port 3000 by default. State is held in memory and seeded with the demo
//! catalog on startup.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stepup_storefront::config::StorefrontConfig;
use stepup_storefront::db::memory::{MemoryOrders, MemoryProducts, MemoryUsers};
use stepup_storefront::db::seed;
use stepup_storefront::{middleware, routes, state::AppState};

#[tokio::main]
async fn main() {
    let config = StorefrontConfig::from_env().expect("Failed to load configuration");

    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "stepup_storefront=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let products = MemoryProducts::new();
    seed::demo_catalog(&products).expect("Failed to seed demo catalog");
    tracing::info!("Demo catalog loaded");

    let state = AppState::new(
        config.clone(),
        Arc::new(products),
        Arc::new(MemoryOrders::new()),
        Arc::new(MemoryUsers::new()),
    );

    let session_layer = middleware::create_session_layer(config.is_https());

    let app = Router::new()
        .merge(routes::routes())
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = config.socket_addr();
    tracing::info!("storefront listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
