use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use common::requests::UploadMemeResponse;
use futures_util::StreamExt;
use log::info;
use std::io::Write;
use tempfile::NamedTempFile;

use crate::error::ApiError;
use crate::state::AppState;
use crate::storage::Storage;

/// Upload size cap, matching the JSON payload limit configured in `main`.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// A meme received from the client, spooled to a temp file. The file is
/// unlinked when this struct drops, on success and failure alike.
struct UploadedMeme {
    file: NamedTempFile,
    file_name: String,
    content_type: String,
    size: usize,
}

/// Handler for `POST /upload-meme`.
///
/// Streams the `meme` multipart field to disk, validates it, stores it in the
/// object store and returns the public URL.
pub(crate) async fn process(
    state: web::Data<AppState>,
    payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    let storage = state.storage.as_ref().ok_or_else(|| {
        ApiError::Configuration(
            "Object storage is not configured. Set the CLOUDFLARE_R2_* environment variables."
                .to_string(),
        )
    })?;

    let upload = read_meme_field(payload).await?;

    let path = upload.file.path().to_path_buf();
    let bytes = tokio::task::spawn_blocking(move || std::fs::read(&path))
        .await
        .map_err(|e| ApiError::upstream("Failed to upload meme", e))?
        .map_err(|e| ApiError::upstream("Failed to upload meme", e))?;

    ensure_image_bytes(&bytes)?;

    let key = Storage::object_key(&upload.file_name);
    let url = storage.put_object(&key, bytes, &upload.content_type).await?;
    info!("Stored meme {} ({} bytes)", key, upload.size);

    Ok(HttpResponse::Ok().json(UploadMemeResponse {
        success: true,
        url,
        message: "Meme uploaded successfully".to_string(),
    }))
}

/// Pulls the `meme` field out of the multipart stream and spools it to a temp
/// file. Fields with any other name are drained and ignored.
async fn read_meme_field(mut payload: Multipart) -> Result<UploadedMeme, ApiError> {
    while let Some(item) = payload.next().await {
        let mut field =
            item.map_err(|e| ApiError::Validation(format!("Invalid multipart payload: {}", e)))?;
        let name = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()));

        if name.as_deref() != Some("meme") {
            while let Some(chunk) = field.next().await {
                chunk.map_err(|e| {
                    ApiError::Validation(format!("Invalid multipart payload: {}", e))
                })?;
            }
            continue;
        }

        let file_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename().map(|f| f.to_string()))
            .unwrap_or_else(|| "meme.png".to_string());
        let content_type = field
            .content_type()
            .map(|m| m.to_string())
            .unwrap_or_else(|| "image/png".to_string());
        if !content_type.starts_with("image/") {
            return Err(ApiError::Validation(format!(
                "Unsupported content type: {}",
                content_type
            )));
        }

        let mut file =
            NamedTempFile::new().map_err(|e| ApiError::upstream("Failed to upload meme", e))?;
        let mut size = 0usize;
        while let Some(chunk) = field.next().await {
            let chunk = chunk
                .map_err(|e| ApiError::Validation(format!("Invalid multipart payload: {}", e)))?;
            size += chunk.len();
            if size > MAX_UPLOAD_BYTES {
                return Err(ApiError::Validation(
                    "File exceeds the 10 MB upload limit".to_string(),
                ));
            }
            file.write_all(&chunk)
                .map_err(|e| ApiError::upstream("Failed to upload meme", e))?;
        }
        if size == 0 {
            return Err(ApiError::Validation("No file uploaded".to_string()));
        }

        return Ok(UploadedMeme {
            file,
            file_name,
            content_type,
            size,
        });
    }

    Err(ApiError::Validation("No file uploaded".to_string()))
}

/// Rejects bytes that do not sniff as a known raster image format. The
/// declared content type is client-controlled; the magic bytes are not.
fn ensure_image_bytes(bytes: &[u8]) -> Result<(), ApiError> {
    image::guess_format(bytes).map(|_| ()).map_err(|_| {
        ApiError::Validation("Uploaded file is not a recognized image".to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test as actix_test, App};

    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

    #[test]
    fn png_magic_bytes_pass_the_sniff() {
        assert!(ensure_image_bytes(PNG_MAGIC).is_ok());
    }

    #[test]
    fn text_bytes_fail_the_sniff() {
        let err = ensure_image_bytes(b"hello, not an image").unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[actix_web::test]
    async fn upload_without_storage_is_a_configuration_error() {
        let state = AppState {
            http: reqwest::Client::new(),
            storage: None,
            inference: None,
        };
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(crate::services::memes::configure_routes),
        )
        .await;

        let req = actix_test::TestRequest::post().uri("/upload-meme").to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
