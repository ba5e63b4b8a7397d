use axum::{
    extract::{ws::Message, State, WebSocketUpgrade},
    response::Response,
};
use axum::extract::ws::WebSocket;
use serde_json::json;
use tracing::{error, info};
use futures_util::{SinkExt, StreamExt};

use crate::channel::{self, dispatcher, MethodCall};
use crate::state::AppState;

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> Response {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: AppState) {
    let client_uid = state.generate_client_uid();
    info!("New method channel connection: {}", client_uid);

    state.register_client(&client_uid);

    let (mut sender, mut receiver) = socket.split();

    // Handshake naming the channel, so the shell can verify its binding
    let ready = json!({
        "type": "channel-ready",
        "channel": channel::CHANNEL_NAME,
        "client_uid": client_uid,
    });
    if let Err(e) = sender.send(Message::Text(ready.to_string())).await {
        error!("Failed to send channel-ready: {}", e);
        state.remove_client(&client_uid);
        return;
    }

    while let Some(msg) = receiver.next().await {
        match msg {
            Ok(Message::Text(text)) => {
                let reply = match MethodCall::from_wire(&text) {
                    Ok(call) => {
                        let result = dispatcher::dispatch(&state, &client_uid, &call).await;
                        result.into_message(&call)
                    }
                    Err(e) => {
                        error!("Unparseable frame from {}: {}", client_uid, e);
                        json!({
                            "type": "error",
                            "code": "malformed-call",
                            "message": e.to_string(),
                        })
                    }
                };

                if let Err(e) = sender.send(Message::Text(reply.to_string())).await {
                    error!("Failed to send response to {}: {}", client_uid, e);
                    break;
                }
            }
            Ok(Message::Close(_)) => {
                info!("Client {} disconnected", client_uid);
                break;
            }
            Err(e) => {
                error!("WebSocket error: {}", e);
                break;
            }
            _ => {}
        }
    }

    if let Some(context) = state.remove_client(&client_uid) {
        info!(
            "Cleaned up client {} after {} calls",
            client_uid, context.calls_handled
        );
    }
}
