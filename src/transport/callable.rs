use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::debug;
use serde::Serialize;
use serde_json::Value;
use crate::error::{DeleteError, ErrorKind};
use crate::models::callable::CallableRequest;
use crate::models::delete::DeleteResult;
use crate::server::AppState;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    #[serde(skip)]
    kind: ErrorKind,
    pub status: &'static str,
    pub message: String,
}

impl ErrorBody {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        ErrorBody {
            kind,
            status: kind.as_code(),
            message: message.into(),
        }
    }
}

impl From<&DeleteError> for ErrorBody {
    fn from(error: &DeleteError) -> Self {
        ErrorBody::new(error.kind(), error.to_string())
    }
}

/// Envelope de saída: `{"result": ...}` ou `{"error": {"status", "message"}}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CallableResponse {
    Result(DeleteResult),
    Error(ErrorBody),
}

impl CallableResponse {
    pub fn status_code(&self) -> StatusCode {
        match self {
            CallableResponse::Result(_) => StatusCode::OK,
            CallableResponse::Error(body) => body.kind.status_code(),
        }
    }
}

impl From<Result<DeleteResult, DeleteError>> for CallableResponse {
    fn from(outcome: Result<DeleteResult, DeleteError>) -> Self {
        match outcome {
            Ok(result) => CallableResponse::Result(result),
            Err(error) => CallableResponse::Error(ErrorBody::from(&error)),
        }
    }
}

impl IntoResponse for CallableResponse {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self)).into_response()
    }
}

/// Lê `data` do corpo. Corpo inválido vira `null` para que a
/// autenticação continue sendo verificada antes do argumento.
pub fn extract_data(body: &[u8]) -> Value {
    serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|mut envelope| envelope.get_mut("data").map(Value::take))
        .unwrap_or(Value::Null)
}

pub async fn delete_media_asset(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> CallableResponse {
    let auth = state.auth.authenticate_headers(&headers);
    if let Some(auth) = &auth {
        debug!("Chamada de exclusão recebida de {}", auth.caller());
    }

    let request = CallableRequest::new(extract_data(&body), auth);
    state.handler.handle(request).await.into()
}
