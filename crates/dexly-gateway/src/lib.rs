//! The Fetch Gateway: an axum server that forwards list, detail and type
//! requests to the remote Pokédex API and normalizes every upstream
//! failure into `500 {error, details}`.
//!
//! Routes (each also mounted under a generic alias):
//!
//! | Route | Alias | Upstream |
//! |---|---|---|
//! | `GET /api/pokemons` | `/items` | `GET /pokemons` |
//! | `GET /api/pokemons/{id}` | `/items/{id}` | `GET /pokemons/{id}` |
//! | `GET /api/types` | `/categories` | `GET /types` |
//! | `GET /health` | | |

pub mod error;
pub mod routes;

use std::net::SocketAddr;

use axum::Router;
use axum::http::HeaderValue;
use axum::http::header::CACHE_CONTROL;
use axum::routing::get;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use dexly_api::DexClient;

pub use error::{Endpoint, ErrorBody, GatewayError};
pub use routes::forward_params;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub client: DexClient,
}

impl AppState {
    pub fn new(client: DexClient) -> Self {
        Self { client }
    }
}

/// Build the router with all routes, aliases and middleware.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/pokemons", get(routes::list_pokemon))
        .route("/api/pokemons/{id}", get(routes::get_pokemon))
        .route("/api/types", get(routes::list_types))
        .route("/items", get(routes::list_pokemon))
        .route("/items/{id}", get(routes::get_pokemon))
        .route("/categories", get(routes::list_types))
        .route("/health", get(routes::health))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(SetResponseHeaderLayer::overriding(
                    CACHE_CONTROL,
                    HeaderValue::from_static("no-store"),
                )),
        )
        .with_state(state)
}

/// Serve until `shutdown` is cancelled, then drain in-flight requests.
pub async fn serve(
    listener: TcpListener,
    state: AppState,
    shutdown: CancellationToken,
) -> std::io::Result<()> {
    let addr = listener.local_addr()?;
    info!(%addr, upstream = %state.client.base_url(), "gateway listening");
    axum::serve(listener, router(state))
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;
    info!("gateway stopped");
    Ok(())
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn run(addr: SocketAddr, state: AppState) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    let shutdown = CancellationToken::new();
    let trigger = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("shutdown requested");
                trigger.cancel();
            }
            Err(e) => warn!(error = %e, "cannot listen for Ctrl-C"),
        }
    });
    serve(listener, state, shutdown).await
}
