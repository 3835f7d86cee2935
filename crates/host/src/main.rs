mod config;

use std::path::Path;

use axum::handler::HandlerWithoutStateExt;
use axum::http::{header, HeaderValue};
use axum::{response::Html, Router};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use config::HostConfig;

const CACHE_1DAY: &str = "public, max-age=86400, must-revalidate";
const CACHE_IMMUTABLE: &str = "public, max-age=31536000, immutable";

const PLACEHOLDER_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Marina Bay Sands</title></head>
<body>
<h1>Marina Bay Sands</h1>
<p>Frontend not built yet. Run <code>dx bundle --release</code> in <code>crates/frontend</code> and point <code>DIST_DIR</code> at the output.</p>
</body>
</html>"#;

/// Build a cache-controlled static file router.
///
/// Separated so tests can exercise the caching layer with arbitrary directories.
fn cached_static_router(dir: &Path, cache_header: &'static str) -> Router {
    let layer = SetResponseHeaderLayer::overriding(
        header::CACHE_CONTROL,
        HeaderValue::from_static(cache_header),
    );
    Router::new()
        .fallback_service(ServeDir::new(dir))
        .layer(layer)
}

async fn serve_index(path: &Path) -> Html<String> {
    match tokio::fs::read_to_string(path).await {
        Ok(html) => Html(html),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "No built index, serving placeholder");
            Html(PLACEHOLDER_PAGE.to_string())
        }
    }
}

/// Serve the bundled frontend from `dist_dir`.
///
/// Hashed bundles under `/assets` are immutable; everything else revalidates
/// daily. Paths with no file behind them get the page itself.
fn build_app(dist_dir: &Path) -> Router {
    let index_path = dist_dir.join("index.html");
    let index = move || {
        let path = index_path.clone();
        async move { serve_index(&path).await }
    };
    let pages = ServeDir::new(dist_dir).fallback(index.into_service());

    Router::new()
        .nest(
            "/assets",
            cached_static_router(&dist_dir.join("assets"), CACHE_IMMUTABLE),
        )
        .fallback_service(pages)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            HeaderValue::from_static(CACHE_1DAY),
        ))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = HostConfig::from_env();
    if !config.dist_dir.join("index.html").exists() {
        tracing::warn!(dist_dir = %config.dist_dir.display(), "No index.html in DIST_DIR");
    }
    let app = build_app(&config.dist_dir);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(%addr, error = %e, "Failed to bind");
            std::process::exit(1);
        }
    };
    tracing::info!("Serving map at http://localhost:{}", config.port);

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "Server stopped");
    }
}
