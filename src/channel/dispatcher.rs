use serde_json::{json, Value};
use tracing::{info, warn};

use crate::channel::{MethodCall, MethodResult};
use crate::engine::TranslateRequest;
use crate::error::ChannelError;
use crate::state::AppState;

/// Route a method call to its handler. Unknown method names signal
/// not-implemented back to the caller instead of failing the connection.
pub async fn dispatch(state: &AppState, client_uid: &str, call: &MethodCall) -> MethodResult {
    info!("Method call from {}: {}", client_uid, call.method);
    state.record_call(client_uid);

    let outcome = match call.method.as_str() {
        "translate" => handle_translate(state, call).await,
        "isAvailable" => handle_is_available(state).await,
        _ => {
            warn!("Unknown method: {}", call.method);
            Err(ChannelError::NotImplemented {
                method: call.method.clone(),
            })
        }
    };

    match outcome {
        Ok(result) => MethodResult::Success(result),
        Err(e) => e.into(),
    }
}

async fn handle_translate(state: &AppState, call: &MethodCall) -> Result<Value, ChannelError> {
    let text = call.arg_str("text").unwrap_or("");
    let (from, to) = state
        .config
        .channel_config
        .resolve_pair(call.arg_str("from"), call.arg_str("to"));

    let request = TranslateRequest {
        text: text.to_string(),
        source_lang: Some(from),
        target_lang: to,
    };

    let response = state.engine.translate(&request).await?;
    Ok(json!(response.translated_text))
}

async fn handle_is_available(state: &AppState) -> Result<Value, ChannelError> {
    let available = state.engine.is_available().await?;
    Ok(json!(available))
}
