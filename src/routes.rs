//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host server-renders the Leptos app for every client route, serves the
//! compiled WASM/JS/CSS bundle under `/pkg`, and answers `/healthz`. The
//! document backend is a separate service the browser calls directly.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::HostConfig;

/// Leptos SSR routes plus static assets and the health check.
pub fn app(config: &HostConfig) -> Router {
    let leptos_options = config.leptos.clone();
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let router = Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http());

    if config.gzip { router.layer(CompressionLayer::new()) } else { router }
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
