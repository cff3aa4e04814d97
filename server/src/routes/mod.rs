//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Serves the Leptos landing page through SSR, the hydration bundle under
//! `/pkg`, and a liveness probe. Hotel data is fetched by the browser straight
//! from the backend, so no API routes live here.

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::ServerError;

/// Directory holding the compiled WASM, JS and CSS assets.
fn pkg_dir(site_root: &str, site_pkg_dir: &str) -> PathBuf {
    Path::new(site_root).join(site_pkg_dir)
}

/// Leptos SSR app + static assets + health probe.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded.
pub fn app() -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(hotel_client::app::App);
    let assets = pkg_dir(leptos_options.site_root.as_ref(), leptos_options.site_pkg_dir.as_ref());

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || hotel_client::app::shell(opts.clone())
        })
        .with_state(leptos_options);

    Ok(Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(assets))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
