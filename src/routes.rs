use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tracing::error;

use crate::engine::TranslateRequest;
use crate::state::AppState;

pub fn create_routes() -> Router<AppState> {
    Router::new()
        // Method channel transport
        .route("/client-ws", get(crate::websocket::websocket_handler))
        // Health check
        .route("/api/health", get(health_check))
        // REST mirrors of the channel operations
        .route("/api/translate", post(translate))
        .route("/api/available", get(available))
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let engine_available = state.engine.is_available().await.unwrap_or(false);
    Json(json!({
        "status": "ok",
        "channel": state.config.channel_config.name,
        "engine": state.engine.name(),
        "engine_available": engine_available,
        "time": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn translate(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let text = payload.get("text").and_then(|v| v.as_str()).unwrap_or("");
    let (from, to) = state.config.channel_config.resolve_pair(
        payload.get("from").and_then(|v| v.as_str()),
        payload.get("to").and_then(|v| v.as_str()),
    );

    let request = TranslateRequest {
        text: text.to_string(),
        source_lang: Some(from),
        target_lang: to,
    };

    match state.engine.translate(&request).await {
        Ok(response) => Ok(Json(json!({
            "translated_text": response.translated_text,
            "success": response.success,
        }))),
        Err(e) => {
            error!("Translation failed: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": e.to_string()})),
            ))
        }
    }
}

async fn available(
    State(state): State<AppState>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    match state.engine.is_available().await {
        Ok(available) => Ok(Json(json!({"available": available}))),
        Err(e) => {
            error!("Availability check failed: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": e.to_string()})),
            ))
        }
    }
}
