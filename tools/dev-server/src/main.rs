//! Development server for the portfolio desktop
//!
//! Serves the built front end with the COOP/COEP headers the WASM build
//! needs and relays `POST /api/contact` to the log mailer.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use folio_dev_server::{build_router, AppState, LogMailer, ServerConfig};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| match v.as_str() {
            "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
            "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

fn env_u16(name: &str, default: u16) -> u16 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<u16>().ok())
        .unwrap_or(default)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if env_bool("FOLIO_LOG_JSON", false) {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    init_tracing();

    let port = env_u16("PORT", 8080);
    let config = ServerConfig {
        web_dir: PathBuf::from(env::var("FOLIO_WEB_DIR").unwrap_or_else(|_| "web".to_string())),
        cors: env_bool("FOLIO_CORS", false),
    };
    let contact_to =
        env::var("FOLIO_CONTACT_TO").unwrap_or_else(|_| "hello@localhost".to_string());

    let app = build_router(AppState::new(LogMailer::new(contact_to)), &config);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = TcpListener::bind(addr).await?;
    info!(
        url = %format!("http://localhost:{port}"),
        web_dir = %config.web_dir.display(),
        cors = config.cors,
        "dev server listening"
    );
    axum::serve(listener, app).await
}
