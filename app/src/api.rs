//! Server functions backing the session-aware navigation and the
//! documentation page.
//!
//! Session data lives with the StyleGenie backend; these functions read the
//! JWT cookies set at login, talk to the backend on the caller's behalf and
//! hand the client only what it needs to render.

#![allow(deprecated)]

use leptos::prelude::{ServerFnError, server};
use leptos::server_fn::codec::GetUrl;

#[cfg(feature = "ssr")]
use leptos::server_fn::error::NoCustomError;

use crate::{auth::Session, types::SiteConfig};

#[cfg(any(feature = "ssr", test))]
const ACCESS_COOKIE: &str = "access_token";
#[cfg(any(feature = "ssr", test))]
const REFRESH_COOKIE: &str = "refresh_token";

/// Failure talking to the backend API.
#[cfg(feature = "ssr")]
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("backend answered with status {0}")]
    Status(u16),
    #[error("unexpected response body: {0}")]
    Decode(reqwest::Error),
}

#[cfg(feature = "ssr")]
impl BackendError {
    /// Whether another attempt could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Request(err) => err.is_timeout() || err.is_connect(),
            Self::Status(status) => *status >= 500,
            Self::Decode(_) => false,
        }
    }

    fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status(401 | 403))
    }
}

/// Value of cookie `name` across every `Cookie` header of a request.
#[cfg(any(feature = "ssr", test))]
fn cookie_value(headers: &http::HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(http::header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim_matches('"').to_owned())
        .filter(|value| !value.is_empty())
}

/// `Set-Cookie` value that makes the browser drop cookie `name`.
#[cfg(any(feature = "ssr", test))]
fn expired_cookie(name: &str) -> String {
    format!("{name}=; Path=/; Max-Age=0; HttpOnly; Secure; SameSite=Lax")
}

/// Join a base URL and a relative API path with exactly one slash.
#[cfg(any(feature = "ssr", test))]
fn endpoint(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(feature = "ssr")]
#[derive(serde::Deserialize)]
struct ProfileEnvelope {
    user: crate::types::User,
}

#[cfg(feature = "ssr")]
async fn fetch_profile(
    client: &reqwest::Client,
    url: &str,
    access_token: &str,
) -> Result<crate::types::User, BackendError> {
    let response = client.get(url).bearer_auth(access_token).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(BackendError::Status(status.as_u16()));
    }
    let envelope: ProfileEnvelope = response.json().await.map_err(BackendError::Decode)?;
    Ok(envelope.user)
}

#[cfg(feature = "ssr")]
async fn post_logout(
    client: &reqwest::Client,
    url: &str,
    refresh: &str,
    access_token: Option<&str>,
) -> Result<(), BackendError> {
    let mut request = client
        .post(url)
        .json(&serde_json::json!({ "refresh": refresh }));
    if let Some(access) = access_token {
        request = request.bearer_auth(access);
    }
    let status = request.send().await?.status();
    if !status.is_success() {
        return Err(BackendError::Status(status.as_u16()));
    }
    Ok(())
}

#[cfg(feature = "ssr")]
async fn request_headers() -> Result<http::HeaderMap, ServerFnError> {
    leptos_axum::extract::<http::HeaderMap>()
        .await
        .map_err(|e| ServerFnError::<NoCustomError>::ServerError(format!("Request error: {e:?}")))
}

/// Resolves the session for the current request.
///
/// A missing, expired or rejected access token yields an anonymous session;
/// only an unreachable or failing backend is reported as an error. Transient
/// failures are retried, since the lookup is idempotent.
#[server(endpoint = "/session", input = GetUrl)]
pub async fn select_session() -> Result<Session, ServerFnError> {
    use crate::types::AppState;
    use leptos::prelude::expect_context;
    use shared_utils::{RetryConfig, retry_if};

    let AppState { client, site, .. } = expect_context::<AppState>();
    let headers = request_headers().await?;

    let Some(access_token) = cookie_value(&headers, ACCESS_COOKIE) else {
        return Ok(Session::anonymous());
    };

    let url = endpoint(&site.api_base_url, "client/me/");
    let profile = retry_if(
        "select_session",
        RetryConfig::default(),
        || fetch_profile(&client, &url, &access_token),
        BackendError::is_transient,
    )
    .await;

    match profile {
        Ok(user) => Ok(Session::authenticated(user)),
        Err(err) if err.is_unauthorized() => {
            tracing::debug!(error = %err, "Access token rejected; treating as anonymous");
            Ok(Session::anonymous())
        }
        Err(err) => Err(ServerFnError::<NoCustomError>::ServerError(format!(
            "Session lookup failed: {err}"
        ))),
    }
}

/// Ends the session upstream and expires the auth cookies.
///
/// The upstream call is made once; a failure is returned to the caller so the
/// UI can tell the user, and the cookies are left in place.
#[server(endpoint = "/logout")]
pub async fn logout() -> Result<(), ServerFnError> {
    use crate::types::AppState;
    use http::{HeaderValue, header::SET_COOKIE};
    use leptos::prelude::{expect_context, use_context};
    use leptos_axum::ResponseOptions;
    use shared_utils::{RetryConfig, retry_if};

    let AppState { client, site, .. } = expect_context::<AppState>();
    let headers = request_headers().await?;

    if let Some(refresh) = cookie_value(&headers, REFRESH_COOKIE) {
        let url = endpoint(&site.api_base_url, "client/auth/logout/");
        let access = cookie_value(&headers, ACCESS_COOKIE);
        let upstream = retry_if(
            "logout",
            RetryConfig::once(),
            || post_logout(&client, &url, &refresh, access.as_deref()),
            BackendError::is_transient,
        )
        .await;
        if let Err(err) = upstream {
            return Err(ServerFnError::<NoCustomError>::ServerError(format!(
                "Logout failed: {err}"
            )));
        }
    }

    if let Some(response) = use_context::<ResponseOptions>() {
        for name in [ACCESS_COOKIE, REFRESH_COOKIE] {
            if let Ok(value) = HeaderValue::from_str(&expired_cookie(name)) {
                response.append_header(SET_COOKIE, value);
            }
        }
    }

    Ok(())
}

/// Deployment links for the documentation page.
#[server(endpoint = "/site_config", input = GetUrl)]
pub async fn select_site_config() -> Result<SiteConfig, ServerFnError> {
    use crate::types::AppState;
    use leptos::prelude::expect_context;

    let AppState { site, .. } = expect_context::<AppState>();
    Ok(site.as_ref().clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::{HeaderMap, HeaderValue, header::COOKIE};

    fn headers(cookies: &[&str]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for cookie in cookies {
            map.append(COOKIE, HeaderValue::from_str(cookie).unwrap());
        }
        map
    }

    #[test]
    fn finds_cookie_among_several() {
        let map = headers(&["theme=dark; access_token=abc.def; refresh_token=r1"]);
        assert_eq!(cookie_value(&map, ACCESS_COOKIE).as_deref(), Some("abc.def"));
        assert_eq!(cookie_value(&map, REFRESH_COOKIE).as_deref(), Some("r1"));
    }

    #[test]
    fn finds_cookie_across_multiple_headers() {
        let map = headers(&["theme=dark", "refresh_token=\"quoted\""]);
        assert_eq!(cookie_value(&map, REFRESH_COOKIE).as_deref(), Some("quoted"));
    }

    #[test]
    fn missing_or_empty_cookie_is_none() {
        assert_eq!(cookie_value(&headers(&[]), ACCESS_COOKIE), None);
        assert_eq!(cookie_value(&headers(&["access_token="]), ACCESS_COOKIE), None);
        assert_eq!(
            cookie_value(&headers(&["my_access_token=x"]), ACCESS_COOKIE),
            None
        );
    }

    #[test]
    fn expired_cookie_clears_at_root() {
        let value = expired_cookie(REFRESH_COOKIE);
        assert!(value.starts_with("refresh_token=;"));
        assert!(value.contains("Max-Age=0"));
        assert!(value.contains("Path=/"));
    }

    #[test]
    fn endpoint_joins_with_single_slash() {
        assert_eq!(
            endpoint("https://api.example.com/", "/client/me/"),
            "https://api.example.com/client/me/"
        );
        assert_eq!(
            endpoint("http://localhost:8000", "client/auth/logout/"),
            "http://localhost:8000/client/auth/logout/"
        );
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn only_server_side_failures_are_transient() {
        assert!(BackendError::Status(503).is_transient());
        assert!(!BackendError::Status(401).is_transient());
        assert!(BackendError::Status(401).is_unauthorized());
        assert!(BackendError::Status(403).is_unauthorized());
        assert!(!BackendError::Status(500).is_unauthorized());
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn server_function_signatures() {
        let _session_fn: fn() -> _ = select_session;
        let _logout_fn: fn() -> _ = logout;
        let _config_fn: fn() -> _ = select_site_config;
    }
}
