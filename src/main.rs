use anyhow::Result;
use axum::Router;
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use travel_translator_backend::config::Config;
use travel_translator_backend::routes;
use travel_translator_backend::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("travel_translator_backend=debug,tower_http=debug")
        .init();

    // Load configuration - try multiple paths
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| std::path::PathBuf::from("."));

    let config_paths: Vec<String> = vec![
        std::env::var("CONFIG_PATH").ok(),
        Some("conf.yaml".to_string()),
        exe_dir
            .join("conf.yaml")
            .canonicalize()
            .ok()
            .and_then(|p| p.to_str().map(|s| s.to_string())),
    ]
    .into_iter()
    .flatten()
    .collect();

    let config_paths_clone = config_paths.clone();
    let mut config = None;
    let mut loaded_path = String::new();

    for path in config_paths {
        match Config::load(&path) {
            Ok(cfg) => {
                config = Some(cfg);
                loaded_path = path;
                break;
            }
            Err(e) => {
                tracing::debug!("Failed to load config from {}: {}", path, e);
                continue;
            }
        }
    }

    let config = config.ok_or_else(|| {
        anyhow::anyhow!("Could not find config file. Tried: {:?}", config_paths_clone)
    })?;

    info!("Loaded configuration from: {}", loaded_path);
    info!("Serving method channel: {}", config.channel_config.name);

    // Initialize app state
    let app_state = AppState::new(config.clone())?;

    // Build application
    let app = Router::new()
        .merge(routes::create_routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    // Start server
    let addr: SocketAddr = format!(
        "{}:{}",
        config.system_config.host, config.system_config.port
    )
    .parse()?;
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
