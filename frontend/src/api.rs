//! HTTP adapters for the server round trips.
//!
//! Each call is a single request with no retry, timeout or deduplication.
//! They fail closed: any non-OK response or thrown exception becomes an
//! `Err(String)` ready to show in a toast, with the server's JSON `error`
//! body folded in when one exists.

use common::requests::{
    ErrorResponse, GenerateImageRequest, GenerateImageResponse, UploadMemeResponse,
    UploadUrlRequest, UploadUrlResponse,
};
use gloo_net::http::{Request, Response};
use js_sys::Uint8Array;
use serde::de::DeserializeOwned;
use web_sys::{Blob, BlobPropertyBag, FormData};

/// Uploads finished meme bytes as `multipart/form-data` under the `meme`
/// field and returns the public URL of the stored object.
pub async fn upload_meme(
    bytes: &[u8],
    file_name: &str,
    content_type: &str,
) -> Result<UploadMemeResponse, String> {
    let form = meme_form_data(bytes, file_name, content_type)?;
    let response = Request::post("/upload-meme")
        .body(form)
        .map_err(|e| format!("Upload failed: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Upload failed: {}", e))?;
    parse("Upload failed", response).await
}

/// Asks the server for a presigned direct-upload URL.
pub async fn get_upload_url(
    file_name: &str,
    content_type: &str,
) -> Result<UploadUrlResponse, String> {
    let request = UploadUrlRequest {
        file_name: file_name.to_string(),
        content_type: Some(content_type.to_string()),
    };
    let response = Request::post("/get-upload-url")
        .json(&request)
        .map_err(|e| format!("Could not get an upload URL: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Could not get an upload URL: {}", e))?;
    parse("Could not get an upload URL", response).await
}

/// Sends a prompt to the generation endpoint.
pub async fn generate_image(prompt: &str) -> Result<GenerateImageResponse, String> {
    let request = GenerateImageRequest {
        prompt: prompt.to_string(),
    };
    let response = Request::post("/generate-image")
        .json(&request)
        .map_err(|e| format!("Image generation failed: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Image generation failed: {}", e))?;
    parse("Image generation failed", response).await
}

fn meme_form_data(bytes: &[u8], file_name: &str, content_type: &str) -> Result<FormData, String> {
    let parts = js_sys::Array::new();
    parts.push(&Uint8Array::from(bytes).into());
    let options = BlobPropertyBag::new();
    options.set_type(content_type);

    let build_err = || "Could not build the upload payload".to_string();
    let blob =
        Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(|_| build_err())?;
    let form = FormData::new().map_err(|_| build_err())?;
    form.append_with_blob_and_filename("meme", &blob, file_name)
        .map_err(|_| build_err())?;
    Ok(form)
}

async fn parse<T: DeserializeOwned>(context: &str, response: Response) -> Result<T, String> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|e| format!("{}: {}", context, e))
    } else {
        let message = match response.json::<ErrorResponse>().await {
            Ok(body) => body.error,
            Err(_) => format!("server returned {}", response.status()),
        };
        Err(format!("{}: {}", context, message))
    }
}
