use axum::{
    body::Body,
    http::{
        Request, Response,
        header::{HeaderName, HeaderValue},
    },
    middleware::Next,
};

/// Content-Security-Policy for the SSR pages and the hydration bundle.
///
/// The browser only ever talks to this origin; calls to the StyleGenie API are
/// made by server functions.
fn content_security_policy() -> String {
    [
        "default-src 'self'",
        "script-src 'self' 'wasm-unsafe-eval' 'unsafe-inline'",
        "style-src 'self' 'unsafe-inline'",
        "img-src 'self' data: https:",
        "font-src 'self' data:",
        "connect-src 'self'",
        "frame-ancestors 'none'",
        "base-uri 'self'",
        "form-action 'self'",
    ]
    .join("; ")
}

/// Headers added to every response. `clipboard-write` stays allowed for the
/// credential copy buttons.
pub fn security_headers_list() -> Vec<(HeaderName, HeaderValue)> {
    vec![
        (HeaderName::from_static("x-frame-options"), HeaderValue::from_static("DENY")),
        (HeaderName::from_static("x-content-type-options"), HeaderValue::from_static("nosniff")),
        (
            HeaderName::from_static("referrer-policy"),
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ),
        (
            HeaderName::from_static("strict-transport-security"),
            HeaderValue::from_static("max-age=31536000; includeSubDomains"),
        ),
        (
            HeaderName::from_static("content-security-policy"),
            HeaderValue::from_str(&content_security_policy())
                .unwrap_or_else(|_| HeaderValue::from_static("default-src 'self'")),
        ),
        (
            HeaderName::from_static("permissions-policy"),
            HeaderValue::from_static(
                "geolocation=(), microphone=(), camera=(), payment=(), usb=(), clipboard-write=(self)",
            ),
        ),
    ]
}

/// Security headers middleware.
pub async fn security_headers(req: Request<Body>, next: Next) -> Response<Body> {
    let mut response = next.run(req).await;
    let headers = response.headers_mut();
    for (name, value) in security_headers_list() {
        headers.insert(name, value);
    }
    response
}
