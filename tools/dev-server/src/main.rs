//! Development Server for Folio OS
//!
//! Serves the desktop and terminal pages plus their wasm-pack output with
//! correct MIME types.
//!
//! - `PORT`: listen port (default 8080)
//! - `FOLIO_WEB_ROOT`: directory to serve (default `web`)
//! - `RUST_LOG`: tracing filter (default `info`)

use axum::{
    body::Body,
    http::{header, HeaderValue, Request, StatusCode},
    response::Response,
    routing::get_service,
    Router,
};
use std::net::SocketAddr;
use std::path::PathBuf;
use tower_http::{cors::CorsLayer, services::ServeDir};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_WEB_ROOT: &str = "web";

struct ServerConfig {
    port: u16,
    web_root: PathBuf,
}

impl ServerConfig {
    fn from_env() -> Self {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warn!(value = %raw, "PORT is not a valid port, using {}", DEFAULT_PORT);
                DEFAULT_PORT
            }),
            Err(_) => DEFAULT_PORT,
        };
        let web_root = std::env::var("FOLIO_WEB_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_WEB_ROOT));
        Self { port, web_root }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    init_tracing();
    let config = ServerConfig::from_env();

    if !config.web_root.is_dir() {
        warn!(root = %config.web_root.display(), "web root does not exist, every request will 404");
    }

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));

    let serve_dir = ServeDir::new(&config.web_root)
        .append_index_html_on_directories(true)
        .precompressed_gzip()
        .precompressed_br();

    let app = Router::new()
        .fallback_service(get_service(serve_dir).handle_error(|_| async {
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }))
        .layer(axum::middleware::from_fn(add_headers))
        .layer(CorsLayer::permissive());

    println!("╔═══════════════════════════════════════════════════╗");
    println!("║             Folio OS Development Server           ║");
    println!("╠═══════════════════════════════════════════════════╣");
    println!("║  URL: http://localhost:{:<27}║", config.port);
    println!("║  Press Ctrl+C to stop                             ║");
    println!("╚═══════════════════════════════════════════════════╝");
    println!();

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, root = %config.web_root.display(), "serving");
    axum::serve(listener, app).await
}

fn content_type_for(path: &str) -> Option<&'static str> {
    let ext = path.rsplit_once('.').map(|(_, ext)| ext)?;
    match ext {
        "js" | "mjs" => Some("application/javascript; charset=utf-8"),
        "wasm" => Some("application/wasm"),
        "css" => Some("text/css; charset=utf-8"),
        "html" => Some("text/html; charset=utf-8"),
        "json" => Some("application/json; charset=utf-8"),
        "pdf" => Some("application/pdf"),
        _ => None,
    }
}

/// Fix MIME types for module scripts and wasm
async fn add_headers(request: Request<Body>, next: axum::middleware::Next) -> Response<Body> {
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;
    debug!(%path, status = response.status().as_u16(), "request");

    if let Some(content_type) = content_type_for(&path) {
        response
            .headers_mut()
            .insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_types() {
        assert_eq!(content_type_for("/pkg/folio_desktop_bg.wasm"), Some("application/wasm"));
        assert_eq!(content_type_for("/terminal/script.js"), Some("application/javascript; charset=utf-8"));
        assert_eq!(content_type_for("/os-desktop/"), None);
        assert_eq!(content_type_for("/README"), None);
    }
}
