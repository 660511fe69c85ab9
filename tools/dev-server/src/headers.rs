//! Response header middleware

use axum::{
    body::Body,
    http::{header, HeaderValue, Request},
    middleware::Next,
    response::Response,
};

/// Content type for a request path, when the default guess is wrong for modules
fn mime_override(path: &str) -> Option<&'static str> {
    let ext = path.rsplit_once('.').map(|(_, ext)| ext)?;
    match ext {
        "js" | "mjs" => Some("application/javascript; charset=utf-8"),
        "wasm" => Some("application/wasm"),
        "css" => Some("text/css; charset=utf-8"),
        "html" => Some("text/html; charset=utf-8"),
        "json" => Some("application/json; charset=utf-8"),
        _ => None,
    }
}

/// Add security headers and fix MIME types
pub async fn add_headers(request: Request<Body>, next: Next) -> Response<Body> {
    // Get the request path for MIME type detection
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    // Required for SharedArrayBuffer in the WASM build
    headers.insert(
        "Cross-Origin-Opener-Policy",
        HeaderValue::from_static("same-origin"),
    );
    headers.insert(
        "Cross-Origin-Embedder-Policy",
        HeaderValue::from_static("require-corp"),
    );

    if let Some(mime) = mime_override(&path) {
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(mime));
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_override() {
        assert_eq!(mime_override("/pkg/folio_desktop_bg.wasm"), Some("application/wasm"));
        assert_eq!(
            mime_override("/assets/index.mjs"),
            Some("application/javascript; charset=utf-8")
        );
        assert_eq!(mime_override("/favicon.ico"), None);
        assert_eq!(mime_override("/api/contact"), None);
    }
}
