use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use crate::error::ProviderError;
use super::{DestroyStatus, MediaProvider};

pub const PROVIDER_FAILURE: &str = "upstream connect error";

#[derive(Debug, Clone)]
pub enum Reply {
    Status(&'static str),
    /// Qualquer falha do provedor que não seja um status (HTTP, rede, resposta inválida).
    ProviderFailure,
}

/// Provedor em memória para os testes.
#[derive(Debug)]
pub struct FakeProvider {
    reply: Reply,
    calls: AtomicUsize,
    ids: Mutex<Vec<String>>,
}

impl FakeProvider {
    pub fn new(reply: Reply) -> Self {
        FakeProvider {
            reply,
            calls: AtomicUsize::new(0),
            ids: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn ids(&self) -> Vec<String> {
        self.ids.lock().unwrap().clone()
    }
}

#[async_trait]
impl MediaProvider for FakeProvider {
    async fn destroy(&self, public_id: &str) -> Result<DestroyStatus, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.ids.lock().unwrap().push(public_id.to_string());
        match &self.reply {
            Reply::Status(token) => Ok(DestroyStatus::from_token(token)),
            Reply::ProviderFailure => Err(ProviderError::Api {
                status: 503,
                message: PROVIDER_FAILURE.to_string(),
            }),
        }
    }
}
