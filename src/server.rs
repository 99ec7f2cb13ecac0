use axum::{
    routing::{get, post},
    Router,
};
use crate::auth::AuthVerifier;
use crate::routes::delete_media::DeleteMediaAsset;
use crate::transport::callable::delete_media_asset;
use crate::ws_handler::handler::websocket_handler;

#[derive(Clone)]
pub struct AppState {
    pub handler: DeleteMediaAsset,
    pub auth: AuthVerifier,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/deleteMediaAsset", post(delete_media_asset))
        .route("/ws", get(websocket_handler))
        .with_state(state)
}
