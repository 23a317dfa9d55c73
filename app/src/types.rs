use serde::{Deserialize, Serialize};

#[cfg(feature = "ssr")]
use axum::extract::FromRef;
#[cfg(feature = "ssr")]
use leptos::config::LeptosOptions;

#[cfg(feature = "ssr")]
#[derive(FromRef, Debug, Clone)]
pub struct AppState {
    pub client: reqwest::Client,
    pub site: std::sync::Arc<SiteConfig>,
    pub leptos_options: std::sync::Arc<LeptosOptions>,
}

#[cfg(feature = "ssr")]
impl FromRef<AppState> for LeptosOptions {
    fn from_ref(state: &AppState) -> Self {
        state.leptos_options.as_ref().clone()
    }
}

/// Account fields returned by the backend's profile endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

pub const DEFAULT_API_BASE_URL: &str = "https://stylegenie-backend.up.railway.app/";
pub const DEFAULT_FRONTEND_BASE_URL: &str = "https://style-genie-frontend.vercel.app";
pub const REPOSITORY_URL: &str = "https://github.com/shadikhasan/StyleGenie";
pub const DEFAULT_SYSTEM_DESIGN_URL: &str = "https://pricey-canary-2bc.notion.site/StyleGenie-AI-Powered-Personal-Styling-Ecosystem-System-Design-HLD-LLD-29e5687bd06a8002bc55d7135414c59c?pvs=74";

/// Deployment-specific links shown on the documentation page.
///
/// Read from the environment on the server and shipped to the client through
/// a server function, so both renders see the same values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiteConfig {
    pub api_base_url: String,
    pub frontend_base_url: String,
    pub repository_url: String,
    pub system_design_url: Option<String>,
    pub figma_file_url: Option<String>,
    pub pitch_deck_url: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            frontend_base_url: DEFAULT_FRONTEND_BASE_URL.to_owned(),
            repository_url: REPOSITORY_URL.to_owned(),
            system_design_url: Some(DEFAULT_SYSTEM_DESIGN_URL.to_owned()),
            figma_file_url: None,
            pitch_deck_url: None,
        }
    }
}

/// Trimmed value, or `None` when unset or blank.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

impl SiteConfig {
    /// Build from `lookup`, usually `std::env::var(..).ok()`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: non_blank(lookup("API_BASE_URL")).unwrap_or(defaults.api_base_url),
            frontend_base_url: non_blank(lookup("FRONTEND_BASE_URL"))
                .unwrap_or(defaults.frontend_base_url),
            repository_url: defaults.repository_url,
            system_design_url: non_blank(lookup("SYSTEM_DESIGN_URL"))
                .or(defaults.system_design_url),
            figma_file_url: non_blank(lookup("FIGMA_FILE_URL")),
            pitch_deck_url: non_blank(lookup("PITCH_DECK_URL")),
        }
    }

    #[cfg(feature = "ssr")]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}
