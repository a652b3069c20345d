//! Approvals Player - composition root binary.

use std::sync::Arc;

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use approvals_player::presentation::Services;
use approvals_player_app::infrastructure::{create_storage, HttpApiAdapter};
use approvals_player_app::ports::outbound::{RawApiPort, RequestStorePort};
use approvals_player_app::{ClientConfig, RequestStoreClient, StatusCache};

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        load_dotenv_from_repo_root();

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                    "approvals_player=debug,approvals_player_app=debug,dioxus=info".into()
                }),
            )
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting Approvals Player");

    let config = client_config();
    tracing::info!(
        api = %config.api_base_url,
        timeout_ms = config.request_timeout_ms,
        status_cache = config.status_cache_enabled,
        "Client configured"
    );

    // HTTP
    let raw_api: Arc<dyn RawApiPort> = Arc::new(HttpApiAdapter::new(
        &config.api_base_url,
        config.request_timeout_ms,
    ));
    let store: Arc<dyn RequestStorePort> = Arc::new(RequestStoreClient::new(raw_api));

    let services = if config.status_cache_enabled {
        Services::with_status_cache(store, StatusCache::new(create_storage()))
    } else {
        Services::new(store)
    };

    // Launch Dioxus
    #[allow(unused_mut)]
    let mut builder = dioxus::LaunchBuilder::new();

    #[cfg(not(target_arch = "wasm32"))]
    {
        let window = dioxus_desktop::WindowBuilder::new().with_title("Request Approvals");
        builder = builder.with_cfg(dioxus_desktop::Config::new().with_window(window));
    }

    builder.with_context(services).launch(approvals_player::app);
}

#[cfg(not(target_arch = "wasm32"))]
fn client_config() -> ClientConfig {
    ClientConfig::from_env()
}

/// Browser builds use `APPROVALS_API_URL` from build time, or the page origin
/// when the engine serves the bundle itself (`APPROVALS_STATIC_DIR`).
#[cfg(target_arch = "wasm32")]
fn client_config() -> ClientConfig {
    let origin = web_sys::window().and_then(|w| w.location().origin().ok());
    if origin.is_none() {
        tracing::warn!("No page origin available");
    }
    ClientConfig::for_browser(option_env!("APPROVALS_API_URL"), origin)
}

#[cfg(not(target_arch = "wasm32"))]
fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
