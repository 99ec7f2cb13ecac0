use axum::extract::ws::{WebSocketUpgrade, WebSocket, Message};
use axum::extract::State;
use axum::response::IntoResponse;
use serde_json::Value;
use crate::error::{DeleteError, ErrorKind};
use crate::models::callable::CallableRequest;
use crate::server::AppState;
use crate::transport::callable::{CallableResponse, ErrorBody};
use crate::utils::logging::log_ws_erro;

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(mut socket: WebSocket, state: AppState) {
    while let Some(Ok(msg)) = socket.recv().await {
        if let Message::Text(text) = msg {
            let response = handle_message(&text, &state).await;
            let payload = match serde_json::to_string(&response) {
                Ok(payload) => payload,
                Err(e) => {
                    log_ws_erro(&format!("Falha ao serializar resposta: {}", e));
                    continue;
                }
            };
            if let Err(e) = socket.send(Message::Text(payload)).await {
                log_ws_erro(&format!("Falha ao enviar resposta: {}", e));
                break;
            }
        }
    }
}

/// Formato do frame: `TOKEN:COMANDO:DADOS` (exemplo: `TOKEN:DELETE:{"publicId":"..."}`).
pub async fn handle_message(text: &str, state: &AppState) -> CallableResponse {
    let parts: Vec<&str> = text.splitn(3, ':').collect();

    // Token é verificado antes do formato e do comando
    let auth = match parts.as_slice() {
        [token, _, _] => state.auth.authenticate(Some(*token)),
        _ => None,
    };
    if auth.is_none() {
        return CallableResponse::Error(ErrorBody::from(&DeleteError::Unauthenticated));
    }

    let (comando, dados) = (parts[1], parts[2]);
    match comando {
        "DELETE" => {
            let data = serde_json::from_str::<Value>(dados).unwrap_or(Value::Null);
            state.handler.handle(CallableRequest::new(data, auth)).await.into()
        }
        _ => invalid_frame("unknown command, use DELETE"),
    }
}

fn invalid_frame(message: &str) -> CallableResponse {
    CallableResponse::Error(ErrorBody::new(ErrorKind::InvalidArgument, message))
}
