mod security;

use std::{sync::Arc, time::Duration};

use app::{
    component, shell,
    types::{AppState, SiteConfig},
};
use axum::{Router, extract::State, response::Json, routing::get};
use dotenvy::dotenv;
use leptos::logging;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes as _, generate_route_list};
use leptos_config::get_configuration;
use security::security_headers;
use serde_json::json;

use tower_http::compression::predicate::{NotForContentType, SizeAbove};
use tower_http::compression::{CompressionLayer, Predicate as _};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

const BACKEND_TIMEOUT: Duration = Duration::from_secs(10);

// Health check handler
async fn health_handler(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "service": "stylegenie-web",
        "version": env!("CARGO_PKG_VERSION"),
        "backend": state.site.api_base_url,
    }))
}

fn backend_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(BACKEND_TIMEOUT)
        .user_agent(concat!("stylegenie-web/", env!("CARGO_PKG_VERSION")))
        .build()
}

#[tokio::main]
async fn main() {
    let tracing_level = if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_file(true)
        .with_line_number(true)
        .with_max_level(tracing_level)
        .init();

    let env_result = dotenv();
    if env_result.is_err() {
        logging::warn!("There is no corresponding .env file");
    }

    let Ok(conf) = get_configuration(Some("Cargo.toml")) else {
        logging::error!("Failed to get configuration");
        return;
    };

    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(component);

    let client = match backend_client() {
        Ok(client) => client,
        Err(err) => {
            logging::error!("Failed to build backend HTTP client: {}", err);
            return;
        }
    };
    let site = SiteConfig::from_env();
    tracing::info!(backend = %site.api_base_url, "Using StyleGenie API");

    let app_state = AppState {
        client,
        site: Arc::new(site),
        leptos_options: Arc::new(leptos_options.clone()),
    };

    let app = Router::new()
        .leptos_routes_with_context(
            &app_state,
            routes,
            {
                let app_state = app_state.clone();
                move || provide_context(app_state.clone())
            },
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .route("/health", get(health_handler))
        .nest_service("/static", ServeDir::new(leptos_options.site_root.as_ref()))
        .layer(
            tower::ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn(security_headers)),
        )
        .layer(CompressionLayer::new().compress_when(NotForContentType::IMAGES.and(SizeAbove::new(1024))))
        .fallback(leptos_axum::file_and_error_handler::<AppState, _>(shell))
        .with_state(app_state);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(list) => list,
        Err(err) => {
            logging::error!("Failed to bind tcp listener to {}: {}", &addr, err);
            return;
        }
    };
    logging::log!("Listening on http://{}", &addr);

    match axum::serve(listener, app.into_make_service()).await {
        Ok(()) => {
            logging::log!("Server shutdown gracefully");
        }
        Err(err) => {
            logging::error!("Failed to serve app: {}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState {
            client: backend_client().unwrap(),
            site: Arc::new(SiteConfig::from_lookup(|key| {
                (key == "API_BASE_URL").then(|| "http://localhost:8000/".to_owned())
            })),
            leptos_options: Arc::new(LeptosOptions::builder().output_name("stylegenie").build()),
        }
    }

    #[test]
    fn test_env_loading() {
        let result = dotenvy::dotenv();
        assert!(result.is_ok() || result.is_err());
    }

    #[tokio::test]
    async fn test_configuration_loading() {
        let config_result = get_configuration(Some("Cargo.toml"));
        assert!(config_result.is_ok() || config_result.is_err());
    }

    #[test]
    fn test_health_handler_reports_backend() {
        let Json(body) = tokio_test::block_on(health_handler(State(state())));
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "stylegenie-web");
        assert_eq!(body["backend"], "http://localhost:8000/");
        assert!(body.get("timestamp").is_some());
        assert!(body.get("version").is_some());
    }
}
