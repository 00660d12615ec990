use actix_web::{web, HttpResponse};
use common::requests::UploadUrlRequest;

use crate::error::ApiError;
use crate::state::AppState;

/// Handler for `POST /get-upload-url`. Presigning is pure; no request leaves
/// the server here.
pub(crate) async fn process(
    state: web::Data<AppState>,
    req: web::Json<UploadUrlRequest>,
) -> Result<HttpResponse, ApiError> {
    let req = req.into_inner();
    if req.file_name.trim().is_empty() {
        return Err(ApiError::Validation("fileName is required".to_string()));
    }

    let storage = state.storage.as_ref().ok_or_else(|| {
        ApiError::Configuration(
            "Object storage is not configured. Set the CLOUDFLARE_R2_* environment variables."
                .to_string(),
        )
    })?;

    Ok(HttpResponse::Ok().json(storage.signed_upload(&req.file_name)))
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
                .configure(crate::services::memes::configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/get-upload-url")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: ErrorResponse = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn blank_file_name_is_a_validation_error() {
        let (status, body) = request(serde_json::json!({ "fileName": "  " })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "fileName is required");
    }

    #[actix_web::test]
    async fn missing_file_name_field_is_a_validation_error() {
        let (status, _body) = request(serde_json::json!({ "contentType": "image/png" })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn valid_request_without_storage_is_a_configuration_error() {
        let (status, body) = request(serde_json::json!({ "fileName": "meme.png" })).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(body.error.contains("not configured"));
    }
}
