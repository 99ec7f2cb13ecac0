use serde_json::Value;

/// Identidade do chamador, preenchida pelo transporte.
/// O handler só verifica se ela existe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    caller: String,
}

impl AuthContext {
    pub fn new(caller: impl Into<String>) -> Self {
        AuthContext { caller: caller.into() }
    }

    pub fn caller(&self) -> &str {
        &self.caller
    }
}

/// Envelope de entrada independente do transporte (HTTP, WebSocket).
#[derive(Debug, Clone)]
pub struct CallableRequest {
    pub data: Value,
    pub auth: Option<AuthContext>,
}

impl CallableRequest {
    pub fn new(data: Value, auth: Option<AuthContext>) -> Self {
        CallableRequest { data, auth }
    }
}
