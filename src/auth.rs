use axum::http::{header::AUTHORIZATION, HeaderMap};
use crate::models::callable::AuthContext;

const BEARER: &str = "bearer";

/// Confere o token enviado pelo transporte contra os tokens configurados.
#[derive(Debug, Clone)]
pub struct AuthVerifier {
    tokens: Vec<String>,
}

impl AuthVerifier {
    pub fn new(tokens: Vec<String>) -> Self {
        AuthVerifier { tokens }
    }

    /// Token ausente ou desconhecido resulta em `None`.
    pub fn authenticate(&self, token: Option<&str>) -> Option<AuthContext> {
        let token = token.filter(|t| !t.is_empty())?;
        self.tokens
            .iter()
            .position(|expected| same_token(expected.as_bytes(), token.as_bytes()))
            .map(|index| AuthContext::new(format!("token#{}", index)))
    }

    pub fn authenticate_headers(&self, headers: &HeaderMap) -> Option<AuthContext> {
        let token = headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().split_once(' '))
            .filter(|(scheme, _)| scheme.eq_ignore_ascii_case(BEARER))
            .map(|(_, token)| token.trim());
        self.authenticate(token)
    }
}

// Tempo constante em relação ao conteúdo do token.
fn same_token(expected: &[u8], given: &[u8]) -> bool {
    if expected.len() != given.len() {
        return false;
    }
    expected
        .iter()
        .zip(given)
        .fold(0u8, |acc, (a, b)| acc | (a ^ b))
        == 0
}
