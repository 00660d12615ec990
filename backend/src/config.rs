//! Environment-driven server configuration, read once at startup.
//!
//! Provider blocks (object storage, inference) are optional: when their
//! variables are absent the server still starts, and the affected endpoints
//! answer with a configuration error instead.

use log::{info, warn};
use std::env;
use std::fmt::Display;
use std::str::FromStr;

const DEFAULT_MODEL_URL: &str =
    "https://api-inference.huggingface.co/models/black-forest-labs/FLUX.1-schnell";

pub struct Config {
    pub host: String,
    pub port: u16,
    pub r2: Option<R2Config>,
    pub inference: Option<InferenceConfig>,
}

/// Credentials and location of the S3-compatible bucket uploads land in.
#[derive(Clone)]
pub struct R2Config {
    pub endpoint: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    pub bucket: String,
}

/// Hosted inference API used by `/generate-image`.
#[derive(Clone)]
pub struct InferenceConfig {
    pub api_key: String,
    pub model_url: String,
}

impl Config {
    pub fn load() -> Self {
        Self {
            host: var("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: try_load("PORT", "3001"),
            r2: R2Config::load(),
            inference: InferenceConfig::load(),
        }
    }
}

impl R2Config {
    fn load() -> Option<Self> {
        let endpoint = var("CLOUDFLARE_R2_ENDPOINT");
        let access_key_id = var("CLOUDFLARE_ACCESS_KEY_ID");
        let secret_access_key = var("CLOUDFLARE_SECRET_ACCESS_KEY");
        let bucket = var("CLOUDFLARE_BUCKET_NAME");

        match (endpoint, access_key_id, secret_access_key, bucket) {
            (Some(endpoint), Some(access_key_id), Some(secret_access_key), Some(bucket)) => {
                Some(Self {
                    endpoint,
                    access_key_id,
                    secret_access_key,
                    bucket,
                })
            }
            (None, None, None, None) => None,
            _ => {
                warn!("Cloudflare R2 is only partially configured; ignoring it. Set all of CLOUDFLARE_R2_ENDPOINT, CLOUDFLARE_ACCESS_KEY_ID, CLOUDFLARE_SECRET_ACCESS_KEY and CLOUDFLARE_BUCKET_NAME.");
                None
            }
        }
    }
}

impl InferenceConfig {
    fn load() -> Option<Self> {
        let api_key = var("HF_API_KEY")?;
        let model_url = var("HF_MODEL_URL").unwrap_or_else(|| DEFAULT_MODEL_URL.to_string());
        Some(Self { api_key, model_url })
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|| {
            info!("{} not set, using default: {}", key, default);
            default.to_string()
        })
        .parse()
        .map_err(|e| warn!("Invalid {} value: {}", key, e))
        .expect("Environment misconfigured")
}
