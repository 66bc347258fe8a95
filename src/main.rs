//! SSR host: serves the Leptos shell and the hydrate bundle.
//!
//! The identity service is a separate deployment; this binary only renders
//! pages and serves `/pkg` assets.

use std::path::PathBuf;

use axum::Router;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use lms_client::app::{App, shell};

/// Assemble the Leptos routes plus static assets.
fn leptos_app(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(App);
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let conf = get_configuration(None).expect("leptos configuration required");
    let app = leptos_app(conf.leptos_options);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "lms-client listening");
    axum::serve(listener, app).await.expect("server failed");
}
