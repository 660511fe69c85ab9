//! Development server for the portfolio desktop
//!
//! Serves the built front end with the COOP/COEP headers the WASM build
//! needs and relays the contact form to a [`Mailer`].

pub mod contact;
mod headers;

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    http::StatusCode,
    routing::{get_service, post},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir};

pub use contact::{ContactError, ContactRequest, ContactResponse, LogMailer, MailError, Mailer};
pub use headers::add_headers;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub mailer: Arc<dyn Mailer>,
}

impl AppState {
    pub fn new(mailer: impl Mailer + 'static) -> Self {
        Self {
            mailer: Arc::new(mailer),
        }
    }
}

/// Router options
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Directory holding the built front end
    pub web_dir: PathBuf,
    /// Allow cross-origin calls to the API (front-end dev servers)
    pub cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            web_dir: PathBuf::from("web"),
            cors: false,
        }
    }
}

/// Build the application router
///
/// `POST /api/contact` relays the form; every other path is served from
/// `web_dir`, preferring precompressed assets.
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    let serve_dir = ServeDir::new(&config.web_dir)
        .precompressed_gzip()
        .precompressed_br();

    let router = Router::new()
        .route("/api/contact", post(contact::handle_contact))
        .with_state(state)
        .fallback_service(get_service(serve_dir).handle_error(|_| async {
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }))
        .layer(axum::middleware::from_fn(add_headers));

    if config.cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}
