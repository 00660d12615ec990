//! Adapter for the S3-compatible object store (Cloudflare R2).
//!
//! Two operations exist: a server-side PUT used by `/upload-meme` and
//! `/generate-image`, and presigned-PUT issuance for `/get-upload-url` so
//! clients can upload directly without touching our credentials. Both go
//! through SigV4 presigning; the server-side PUT just consumes its own
//! short-lived URL with `reqwest`.

use crate::config::R2Config;
use crate::error::ApiError;
use common::requests::UploadUrlResponse;
use rusty_s3::{Bucket, Credentials, S3Action, UrlStyle};
use std::time::Duration;
use url::Url;
use uuid::Uuid;

/// Validity of presigned URLs handed out to clients.
const SIGNED_URL_TTL: Duration = Duration::from_secs(3600);

/// Validity of the URLs the server signs for its own PUTs.
const INTERNAL_PUT_TTL: Duration = Duration::from_secs(60);

#[derive(Clone)]
pub struct Storage {
    bucket: Bucket,
    credentials: Credentials,
    http: reqwest::Client,
    public_base: String,
}

impl Storage {
    pub fn from_config(cfg: &R2Config, http: reqwest::Client) -> Result<Self, ApiError> {
        let endpoint: Url = cfg.endpoint.parse().map_err(|e| {
            ApiError::Configuration(format!("Invalid CLOUDFLARE_R2_ENDPOINT: {}", e))
        })?;
        let bucket = Bucket::new(endpoint, UrlStyle::Path, cfg.bucket.clone(), "auto")
            .map_err(|e| ApiError::Configuration(format!("Invalid R2 bucket config: {}", e)))?;
        let credentials = Credentials::new(
            cfg.access_key_id.clone(),
            cfg.secret_access_key.clone(),
        );
        let public_base = format!("{}/{}", cfg.endpoint.trim_end_matches('/'), cfg.bucket);

        Ok(Self {
            bucket,
            credentials,
            http,
            public_base,
        })
    }

    /// Builds a unique object key for a client-provided file name. Path
    /// separators are stripped so every object stays under `memes/`.
    pub fn object_key(file_name: &str) -> String {
        let safe: String = file_name
            .chars()
            .filter(|c| !matches!(c, '/' | '\\'))
            .collect();
        format!("memes/{}-{}", Uuid::new_v4(), safe)
    }

    pub fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.public_base, key)
    }

    /// Issues a presigned PUT for a direct client upload. No request is made;
    /// the uploader sets the content type on the PUT itself.
    pub fn signed_upload(&self, file_name: &str) -> UploadUrlResponse {
        let key = Self::object_key(file_name);
        let action = self.bucket.put_object(Some(&self.credentials), &key);
        let upload_url = action.sign(SIGNED_URL_TTL).to_string();
        let public_url = self.public_url(&key);

        UploadUrlResponse {
            upload_url,
            key,
            public_url,
        }
    }

    /// Uploads bytes under `key` and returns the public URL of the object.
    pub async fn put_object(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, ApiError> {
        let action = self.bucket.put_object(Some(&self.credentials), key);
        let url = action.sign(INTERNAL_PUT_TTL);

        let response = self
            .http
            .put(url)
            .header("content-type", content_type)
            .body(bytes)
            .send()
            .await
            .map_err(|e| ApiError::upstream("Failed to store object", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(ApiError::upstream(
                "Failed to store object",
                format!("storage returned {}: {}", status, detail),
            ));
        }

        Ok(self.public_url(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_storage() -> Storage {
        let cfg = R2Config {
            endpoint: "https://account.r2.cloudflarestorage.com".to_string(),
            access_key_id: "test-key".to_string(),
            secret_access_key: "test-secret".to_string(),
            bucket: "memes-bucket".to_string(),
        };
        Storage::from_config(&cfg, reqwest::Client::new()).unwrap()
    }

    #[test]
    fn object_keys_are_prefixed_and_sanitized() {
        let key = Storage::object_key("../../etc/passwd.png");
        assert!(key.starts_with("memes/"));
        assert!(key.ends_with("....etcpasswd.png"));
        assert_eq!(key.matches('/').count(), 1);
    }

    #[test]
    fn object_keys_are_unique_per_call() {
        assert_ne!(Storage::object_key("a.png"), Storage::object_key("a.png"));
    }

    #[test]
    fn public_url_joins_endpoint_bucket_and_key() {
        let storage = test_storage();
        assert_eq!(
            storage.public_url("memes/k.png"),
            "https://account.r2.cloudflarestorage.com/memes-bucket/memes/k.png"
        );
    }

    #[test]
    fn signed_upload_carries_signature_and_key() {
        let storage = test_storage();
        let signed = storage.signed_upload("meme.png");
        assert!(signed.upload_url.contains("X-Amz-Signature="));
        assert!(signed.upload_url.contains(&signed.key));
        assert!(signed.key.starts_with("memes/"));
        assert!(signed.public_url.ends_with(&signed.key));
    }
}
