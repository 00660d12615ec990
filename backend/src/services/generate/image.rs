use actix_web::{web, HttpResponse};
use base64::{engine::general_purpose, Engine as _};
use common::requests::{GenerateImageRequest, GenerateImageResponse};
use log::warn;
use serde_json::json;

use crate::config::InferenceConfig;
use crate::error::ApiError;
use crate::state::AppState;
use crate::storage::Storage;

/// Handler for `POST /generate-image`.
///
/// Validation runs before anything leaves the server: a blank prompt never
/// reaches the provider.
pub(crate) async fn process(
    state: web::Data<AppState>,
    req: web::Json<GenerateImageRequest>,
) -> Result<HttpResponse, ApiError> {
    let prompt = req.into_inner().prompt;
    if prompt.trim().is_empty() {
        return Err(ApiError::Validation("Prompt is required".to_string()));
    }

    let inference = state.inference.as_ref().ok_or_else(|| {
        ApiError::Configuration(
            "AI image generation is not configured. Set HF_API_KEY in the environment."
                .to_string(),
        )
    })?;

    let bytes = call_inference(&state.http, inference, &prompt).await?;
    let image = format!(
        "data:image/png;base64,{}",
        general_purpose::STANDARD.encode(&bytes)
    );

    // Permanent copy is best effort: the base64 payload is already usable.
    let cloud_url = match state.storage.as_ref() {
        Some(storage) => {
            let key = Storage::object_key("ai-generated.png");
            match storage.put_object(&key, bytes, "image/png").await {
                Ok(url) => Some(url),
                Err(err) => {
                    warn!("Could not store generated image: {:?}", err);
                    None
                }
            }
        }
        None => None,
    };

    Ok(HttpResponse::Ok().json(GenerateImageResponse {
        image,
        cloud_url,
        prompt,
    }))
}

async fn call_inference(
    http: &reqwest::Client,
    inference: &InferenceConfig,
    prompt: &str,
) -> Result<Vec<u8>, ApiError> {
    let response = http
        .post(&inference.model_url)
        .bearer_auth(&inference.api_key)
        .json(&json!({ "inputs": prompt }))
        .send()
        .await
        .map_err(|e| ApiError::upstream("Image generation failed", e))?;

    if !response.status().is_success() {
        let status = response.status();
        let detail = response.text().await.unwrap_or_default();
        return Err(ApiError::upstream(
            "Image generation failed",
            format!("inference provider returned {}: {}", status, detail),
        ));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| ApiError::upstream("Image generation failed", e))?;
    Ok(bytes.to_vec())
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use common::requests::ErrorResponse;

    use crate::state::AppState;

    async fn request(body: serde_json::Value) -> (StatusCode, ErrorResponse) {
        let state = AppState {
            http: reqwest::Client::new(),
            storage: None,
            inference: None,
        };
        let app = test::init_service(
            App::new()
                .app_data(
                    web::JsonConfig::default().error_handler(|err, _req| {
                        crate::error::ApiError::Validation(err.to_string()).into()
                    }),
                )
                .app_data(web::Data::new(state))
                .configure(crate::services::generate::configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/generate-image")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: ErrorResponse = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn missing_prompt_field_is_rejected_before_any_upstream_call() {
        let (status, _body) = request(serde_json::json!({})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn blank_prompt_is_a_validation_error() {
        let (status, body) = request(serde_json::json!({ "prompt": "   " })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Prompt is required");
    }

    #[actix_web::test]
    async fn missing_api_key_is_a_configuration_error() {
        let (status, body) = request(serde_json::json!({ "prompt": "a grumpy cat" })).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(body.error.contains("not configured"));
    }
}
