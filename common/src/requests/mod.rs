use serde::{Deserialize, Serialize};

/// Request payload for `POST /get-upload-url`.
/// `contentType` defaults to PNG when the client omits it.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadUrlRequest {
    pub file_name: String,
    #[serde(default)]
    pub content_type: Option<String>,
}

/// Response payload for `POST /get-upload-url`: a time-limited presigned PUT
/// plus the key and public URL the object will have once uploaded.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadUrlResponse {
    pub upload_url: String,
    pub key: String,
    pub public_url: String,
}

/// Request payload for `POST /generate-image`.
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateImageRequest {
    pub prompt: String,
}

/// Response payload for `POST /generate-image`. `image` is a base64 data URI
/// for immediate display; `cloudUrl` is the permanent copy, present only when
/// storage is configured and the upload succeeded.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateImageResponse {
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_url: Option<String>,
    pub prompt: String,
}

/// Response payload for `POST /upload-meme`.
#[derive(Debug, Serialize, Deserialize)]
pub struct UploadMemeResponse {
    pub success: bool,
    pub url: String,
    pub message: String,
}

/// Response payload for `GET /health`.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// JSON body carried by every non-2xx API response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_url_request_uses_camel_case_field_names() {
        let req: UploadUrlRequest =
            serde_json::from_str(r#"{"fileName":"meme.png","contentType":"image/png"}"#).unwrap();
        assert_eq!(req.file_name, "meme.png");
        assert_eq!(req.content_type.as_deref(), Some("image/png"));
    }

    #[test]
    fn upload_url_request_content_type_is_optional() {
        let req: UploadUrlRequest = serde_json::from_str(r#"{"fileName":"meme.png"}"#).unwrap();
        assert!(req.content_type.is_none());
    }

    #[test]
    fn upload_url_response_round_trips() {
        let resp = UploadUrlResponse {
            upload_url: "https://r2.example/put?sig=abc".into(),
            key: "memes/k".into(),
            public_url: "https://r2.example/bucket/memes/k".into(),
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"uploadUrl\""));
        assert!(json.contains("\"publicUrl\""));
        let back: UploadUrlResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(back.key, "memes/k");
    }

    #[test]
    fn generate_response_omits_absent_cloud_url() {
        let resp = GenerateImageResponse {
            image: "data:image/png;base64,AAAA".into(),
            cloud_url: None,
            prompt: "a cat".into(),
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(!json.contains("cloudUrl"));
    }
}
