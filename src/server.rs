//! Local preview server.
//!
//! `flow serve` renders pages per request, so edits to content or markup show
//! up on refresh after a rebuild. `/assets` serves the source assets tree
//! directly; no export step is involved.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use maud::{html, Markup};
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, instrument};

use crate::config::SiteConfig;
use crate::error::{Result, SiteError};
use crate::markup::{self, layout};

#[derive(Clone)]
struct AppState {
    config: SiteConfig,
}

/// Build the preview router: `/` renders per request, `/assets` serves the
/// source tree, anything else gets a styled 404.
pub fn router(config: SiteConfig, assets_dir: PathBuf) -> Router {
    let state = AppState { config };
    Router::new()
        .route("/", get(front_page))
        .nest_service("/assets", ServeDir::new(assets_dir))
        .fallback(not_found)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

async fn front_page(State(state): State<AppState>) -> Html<String> {
    Html(markup::PAGES[0].render(&state.config).into_string())
}

async fn not_found(State(state): State<AppState>) -> (StatusCode, Html<String>) {
    let page = layout::document(&state.config, not_found_body());
    (StatusCode::NOT_FOUND, Html(page.into_string()))
}

fn not_found_body() -> Markup {
    html! {
        section class="py-24" {
            div class="container mx-auto px-4 text-center" {
                h1 class="font-heading text-6xl mb-6" { "Page not found" }
                p class="text-gray-700 mb-10" { "The page you were looking for is not part of this site." }
                a class="inline-flex py-4 px-6 items-center justify-center text-lg font-medium text-teal-900 border border-lime-500 hover:border-white bg-lime-500 hover:bg-white rounded-full transition duration-200" href="/" {
                    "Back to the front page"
                }
            }
        }
    }
}

/// Run the preview server until interrupted.
///
/// Builds its own runtime so callers stay synchronous.
///
/// # Errors
///
/// Returns [`SiteError::ConfigInvalid`] for an unparseable bind address and
/// [`SiteError::ServeFailed`] when the listener cannot bind.
#[instrument(skip(config, assets_dir), fields(host, port))]
pub fn run(config: SiteConfig, assets_dir: PathBuf, host: &str, port: u16) -> Result<()> {
    let ip: IpAddr = host
        .parse()
        .map_err(|_| SiteError::ConfigInvalid(format!("invalid bind address: {host}")))?;
    let addr = SocketAddr::new(ip, port);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(serve(config, assets_dir, addr))
}

async fn serve(config: SiteConfig, assets_dir: PathBuf, addr: SocketAddr) -> Result<()> {
    let app = router(config, assets_dir);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| SiteError::ServeFailed {
            addr: addr.to_string(),
            reason: e.to_string(),
        })?;
    info!(%addr, "Preview server listening");

    axum::serve(listener, app)
        .await
        .map_err(|e| SiteError::ServeFailed {
            addr: addr.to_string(),
            reason: e.to_string(),
        })
}
