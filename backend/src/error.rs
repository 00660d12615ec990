use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use common::requests::ErrorResponse;
use log::error;
use thiserror::Error;

/// Boundary error for every API handler. The `Display` text is what the
/// client sees in the JSON `error` field.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed request data.
    #[error("{0}")]
    Validation(String),

    /// A required credential or endpoint is absent. Distinct from validation
    /// so operators can tell an unusable service from a bad request.
    #[error("{0}")]
    Configuration(String),

    /// A storage or inference provider call failed. `public` is the generic
    /// client-facing message; `detail` carries the provider's error text and
    /// is only logged.
    #[error("{public}")]
    Upstream { public: String, detail: String },
}

impl ApiError {
    pub fn upstream(public: &str, detail: impl ToString) -> Self {
        Self::Upstream {
            public: public.to_string(),
            detail: detail.to_string(),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Configuration(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Upstream { .. } => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Upstream { detail, .. } = self {
            error!("Upstream call failed: {}", detail);
        }
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn status_codes_follow_the_taxonomy() {
        assert_eq!(
            ApiError::Validation("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Configuration("x".into()).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ApiError::upstream("x", "y").status_code(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[actix_web::test]
    async fn upstream_detail_is_not_in_the_response_body() {
        let err = ApiError::upstream("Image generation failed", "provider said: key expired");
        let resp = err.error_response();
        let body = to_bytes(resp.into_body()).await.unwrap();
        let body: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(body.error, "Image generation failed");
        assert!(!body.error.contains("key expired"));
    }
}
