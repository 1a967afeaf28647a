use axum::{
    extract::Request,
    http::{header, HeaderMap, HeaderValue, Method, StatusCode, Uri},
    middleware::Next,
    response::Response,
};
use reqwest::Url;
use tower_http::cors::{Any, CorsLayer};

use super::ApiError;
use crate::logging::log_warn;

pub const CROSS_ORIGIN_MESSAGE: &str = "Forbidden: Cross-origin request denied";

/// CORS headers for `/api/llm`: any origin, `GET, POST, OPTIONS`, `Content-Type`.
///
/// Preflight `OPTIONS` requests are answered here and never reach the handler.
pub fn llm_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

/// Reject calls whose `Origin` or `Referer` is not this server.
///
/// Sandboxed previews send `Origin: null` and are let through.
pub async fn same_origin_guard(request: Request, next: Next) -> Result<Response, ApiError> {
    let host = request_host(request.headers(), request.uri());
    if !is_allowed(request.headers(), host.as_deref()) {
        log_warn!(
            host = ?host,
            origin = ?header_str(request.headers(), header::ORIGIN),
            referer = ?header_str(request.headers(), header::REFERER),
            "Rejected cross-origin request"
        );
        return Err(ApiError::new(StatusCode::FORBIDDEN, CROSS_ORIGIN_MESSAGE));
    }
    Ok(next.run(request).await)
}

/// Whether a request with these headers may call `/api/llm` on `host`.
pub(crate) fn is_allowed(headers: &HeaderMap, host: Option<&str>) -> bool {
    let origin = header_str(headers, header::ORIGIN);
    if origin == Some("null") {
        return true;
    }
    let Some(host) = host else {
        return false;
    };
    [origin, header_str(headers, header::REFERER)]
        .into_iter()
        .flatten()
        .any(|value| url_host(value).is_some_and(|h| h.eq_ignore_ascii_case(host)))
}

fn request_host(headers: &HeaderMap, uri: &Uri) -> Option<String> {
    header_str(headers, header::HOST)
        .map(str::to_string)
        .or_else(|| uri.authority().map(|a| a.to_string()))
}

fn header_str(headers: &HeaderMap, name: header::HeaderName) -> Option<&str> {
    headers.get(name).and_then(|v: &HeaderValue| v.to_str().ok())
}

/// `host[:port]` of a URL, with the port left out when it is the scheme's default.
fn url_host(value: &str) -> Option<String> {
    let url = Url::parse(value).ok()?;
    let host = url.host_str()?;
    Some(match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    })
}
