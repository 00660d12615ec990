//! AI image generation proxy.
//!
//! Forwards a text prompt to the hosted inference provider and hands the
//! resulting image back to the client as a base64 data URI, with a
//! best-effort permanent copy in object storage. The provider key never
//! reaches the client; requests fail closed with a generic message when the
//! upstream call breaks.

mod image;

use actix_web::web::{post, ServiceConfig};

/// Registers the generation route on the application.
///
/// # Registered Routes:
///
/// *   **`POST /generate-image`**:
///     - **Handler**: `image::process`
///     - **Description**: Accepts a JSON body with a non-blank `prompt`,
///       calls the inference API and returns `{ image, cloudUrl?, prompt }`.
pub fn configure_routes(cfg: &mut ServiceConfig) {
    cfg.route("/generate-image", post().to(image::process));
}
