use serde::Deserialize;
use std::env;
use std::fmt;
use std::fs;
use std::path::Path;
use crate::error::ConfigError;

const DEFAULT_CONFIG_PATH: &str = "config.json";
const CLOUDINARY_URL_SCHEME: &str = "cloudinary://";

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub bind_address: String,
    pub api_tokens: Vec<String>,
    pub logs_enabled: Option<bool>,
    pub cloudinary: CloudinaryConfig,
}

#[derive(Deserialize, Clone)]
#[serde(default)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    pub api_base_url: String,
    pub resource_type: String,
    pub delivery_type: String,
    pub invalidate: bool,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind_address: "0.0.0.0:9001".to_string(),
            api_tokens: Vec::new(),
            logs_enabled: None,
            cloudinary: CloudinaryConfig::default(),
        }
    }
}

impl Default for CloudinaryConfig {
    fn default() -> Self {
        CloudinaryConfig {
            cloud_name: String::new(),
            api_key: String::new(),
            api_secret: String::new(),
            api_base_url: "https://api.cloudinary.com".to_string(),
            resource_type: "image".to_string(),
            delivery_type: "upload".to_string(),
            invalidate: false,
            timeout_secs: 30,
        }
    }
}

// O segredo nunca aparece em logs.
impl fmt::Debug for CloudinaryConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CloudinaryConfig")
            .field("cloud_name", &self.cloud_name)
            .field("api_key", &self.api_key)
            .field("api_secret", &"***")
            .field("api_base_url", &self.api_base_url)
            .field("resource_type", &self.resource_type)
            .field("delivery_type", &self.delivery_type)
            .field("invalidate", &self.invalidate)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Config {
    /// Carrega o config.json (opcional), aplica as variáveis de ambiente e valida.
    pub fn load() -> Result<Config, ConfigError> {
        let path = env::var("CONFIG_PATH").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let mut config = if Path::new(&path).exists() {
            Config::load_from_file(&path)?
        } else {
            Config::default()
        };
        config.apply_env(|key| env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_file(path: &str) -> Result<Config, ConfigError> {
        let content = fs::read_to_string(path)?;
        Config::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Config, ConfigError> {
        let mut config: Config = serde_json::from_str(content)?;
        config.api_tokens = normalize_tokens(config.api_tokens.iter().map(String::as_str));
        Ok(config)
    }

    pub fn apply_env<F>(&mut self, var: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = var("CLOUDINARY_URL") {
            let (cloud_name, api_key, api_secret) = parse_cloudinary_url(&url)?;
            self.cloudinary.cloud_name = cloud_name;
            self.cloudinary.api_key = api_key;
            self.cloudinary.api_secret = api_secret;
        }
        if let Some(cloud_name) = var("CLOUDINARY_CLOUD_NAME") {
            self.cloudinary.cloud_name = cloud_name;
        }
        if let Some(api_key) = var("CLOUDINARY_API_KEY") {
            self.cloudinary.api_key = api_key;
        }
        if let Some(api_secret) = var("CLOUDINARY_API_SECRET") {
            self.cloudinary.api_secret = api_secret;
        }
        if let Some(tokens) = var("API_TOKEN") {
            self.api_tokens = normalize_tokens(tokens.split(','));
        }
        if let Some(bind_address) = var("BIND_ADDRESS") {
            self.bind_address = bind_address;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cloudinary.cloud_name.is_empty() {
            return Err(ConfigError::Missing("cloudinary.cloud_name"));
        }
        if self.cloudinary.api_key.is_empty() {
            return Err(ConfigError::Missing("cloudinary.api_key"));
        }
        if self.cloudinary.api_secret.is_empty() {
            return Err(ConfigError::Missing("cloudinary.api_secret"));
        }
        if self.cloudinary.timeout_secs == 0 {
            return Err(ConfigError::Invalid("cloudinary.timeout_secs must be greater than zero"));
        }
        if self.api_tokens.iter().all(|token| token.trim().is_empty()) {
            return Err(ConfigError::Missing("api_tokens"));
        }
        Ok(())
    }
}

// Tokens em branco nunca autenticam ninguém.
fn normalize_tokens<'a>(tokens: impl Iterator<Item = &'a str>) -> Vec<String> {
    tokens
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect()
}

/// `cloudinary://<api_key>:<api_secret>@<cloud_name>`
fn parse_cloudinary_url(url: &str) -> Result<(String, String, String), ConfigError> {
    let invalid = || ConfigError::InvalidCloudinaryUrl(redact(url));

    let rest = url.strip_prefix(CLOUDINARY_URL_SCHEME).ok_or_else(invalid)?;
    let (credentials, cloud_name) = rest.rsplit_once('@').ok_or_else(invalid)?;
    let (api_key, api_secret) = credentials.split_once(':').ok_or_else(invalid)?;
    let cloud_name = cloud_name.split(['?', '/']).next().unwrap_or_default();

    if api_key.is_empty() || api_secret.is_empty() || cloud_name.is_empty() {
        return Err(invalid());
    }
    Ok((cloud_name.to_string(), api_key.to_string(), api_secret.to_string()))
}

fn redact(url: &str) -> String {
    match url.rsplit_once('@') {
        Some((_, host)) => format!("{}***@{}", CLOUDINARY_URL_SCHEME, host),
        None => "<redacted>".to_string(),
    }
}
