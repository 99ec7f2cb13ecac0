use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use reqwest::Client;
use serde::Deserialize;
use sha1::{Digest, Sha1};
use std::time::Duration;
use crate::config::CloudinaryConfig;
use crate::error::ProviderError;
use super::{DestroyStatus, MediaProvider};

#[derive(Debug, Deserialize)]
struct DestroyResponse {
    result: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: Option<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Cliente da Upload API do Cloudinary (somente `destroy`).
#[derive(Debug, Clone)]
pub struct CloudinaryClient {
    http: Client,
    config: CloudinaryConfig,
}

impl CloudinaryClient {
    pub fn new(config: CloudinaryConfig) -> Result<Self, ProviderError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(CloudinaryClient { http, config })
    }

    fn destroy_url(&self) -> String {
        format!(
            "{}/v1_1/{}/{}/destroy",
            self.config.api_base_url.trim_end_matches('/'),
            self.config.cloud_name,
            self.config.resource_type
        )
    }

    fn signed_params(&self, public_id: &str, timestamp: i64) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("public_id", public_id.to_string()),
            ("timestamp", timestamp.to_string()),
            ("type", self.config.delivery_type.clone()),
        ];
        if self.config.invalidate {
            params.push(("invalidate", "true".to_string()));
        }
        params
    }
}

/// Assinatura do Cloudinary: parâmetros ordenados por nome, `k=v` unidos por `&`,
/// seguidos do segredo, em SHA-1 hexadecimal.
pub fn sign(params: &[(&str, String)], api_secret: &str) -> String {
    let mut sorted: Vec<&(&str, String)> = params.iter().collect();
    sorted.sort_by(|a, b| a.0.cmp(b.0));

    let to_sign = sorted
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha1::new();
    hasher.update(to_sign.as_bytes());
    hasher.update(api_secret.as_bytes());
    hex::encode(hasher.finalize())
}

#[async_trait]
impl MediaProvider for CloudinaryClient {
    async fn destroy(&self, public_id: &str) -> Result<DestroyStatus, ProviderError> {
        let mut params = self.signed_params(public_id, Utc::now().timestamp());
        let signature = sign(&params, &self.config.api_secret);
        params.push(("api_key", self.config.api_key.clone()));
        params.push(("signature", signature));

        debug!("Enviando destroy do asset {} para o Cloudinary", public_id);
        let response = self.http.post(self.destroy_url()).form(&params).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .ok()
                .and_then(|e| e.error)
                .map(|e| e.message)
                .unwrap_or(body);
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message,
            });
        }

        match serde_json::from_str::<DestroyResponse>(&body) {
            Ok(DestroyResponse { result: Some(token) }) => Ok(DestroyStatus::from_token(&token)),
            Ok(DestroyResponse { result: None }) => Err(ProviderError::MalformedResponse(
                "missing 'result' field".to_string(),
            )),
            Err(e) => Err(ProviderError::MalformedResponse(e.to_string())),
        }
    }
}
