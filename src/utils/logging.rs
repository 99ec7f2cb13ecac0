use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;
use env_logger::Env;
use log::{info, error};
use crate::error::ProviderError;

static LOG_ENABLED: AtomicBool = AtomicBool::new(true);
static INIT: Once = Once::new();

/// Inicializa o logger, se ainda não foi inicializado.
pub fn init_logging() {
    INIT.call_once(|| {
        if LOG_ENABLED.load(Ordering::Relaxed) {
            env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
        }
    });
}

/// Ativa os logs (chame antes de init_logging).
pub fn enable_logs() {
    LOG_ENABLED.store(true, Ordering::Relaxed);
}

/// Desativa os logs (chame antes de init_logging).
pub fn disable_logs() {
    LOG_ENABLED.store(false, Ordering::Relaxed);
}

pub fn log_servidor_iniciado(addr: &str) {
    info!("[SERVIDOR] Endpoint de exclusão de mídia rodando em {}", addr);
}

pub fn log_delete_status_rejeitado(public_id: &str, status: &str) {
    error!("[DELETE] Falha ao excluir o asset {}: status {}", public_id, status);
}

pub fn log_delete_erro_provedor(public_id: &str, erro: &ProviderError) {
    error!("[DELETE] Erro ao comunicar com o provedor ao excluir {}: {}", public_id, erro);
}

pub fn log_ws_erro(erro: &str) {
    error!("[WS] Erro: {}", erro);
}
