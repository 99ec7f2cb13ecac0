pub mod models {
    pub mod callable;
    pub mod delete;
}
mod routes {
    pub mod delete_media;
}
mod auth;
mod config;
mod error;
mod provider;
mod server;
mod transport;
mod ws_handler;
mod utils {
    pub mod logging;
}

use std::sync::Arc;
use tokio::net::TcpListener;
use crate::auth::AuthVerifier;
use crate::config::Config;
use crate::provider::cloudinary::CloudinaryClient;
use crate::routes::delete_media::DeleteMediaAsset;
use crate::server::{router, AppState};
use crate::utils::logging::{disable_logs, enable_logs, init_logging, log_servidor_iniciado};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    // Credenciais vêm do ambiente/arquivo, nunca do código
    let config = Config::load()?;

    if config.logs_enabled == Some(false) {
        disable_logs();
    } else {
        enable_logs();
    }
    init_logging();

    let provider = CloudinaryClient::new(config.cloudinary.clone())?;
    let state = AppState {
        handler: DeleteMediaAsset::new(Arc::new(provider)),
        auth: AuthVerifier::new(config.api_tokens.clone()),
    };
    let app = router(state);

    let listener = TcpListener::bind(&config.bind_address).await?;
    log_servidor_iniciado(&config.bind_address);
    axum::serve(listener, app).await?;
    Ok(())
}
