//! # Meme Storage Service Module
//!
//! This module aggregates the API endpoints that move meme images into the
//! remote object store. It acts as a router, directing incoming HTTP requests
//! to the handler logic defined in its sub-modules.
//!
//! ## Sub-modules:
//! - `upload`: Handles multipart uploads of finished memes through the server.
//! - `signed_url`: Issues presigned URLs so clients can upload directly to
//!   the store without server-side credential exposure.

mod signed_url;
mod upload;

use actix_web::web::{post, ServiceConfig};

/// Registers the storage routes on the application.
///
/// # Registered Routes:
///
/// *   **`POST /upload-meme`**:
///     - **Handler**: `upload::process`
///     - **Description**: Accepts a `multipart/form-data` body with a `meme`
///       file field, validates that the payload is an image, stores it under
///       a unique `memes/` key and returns the public URL.
///
/// *   **`POST /get-upload-url`**:
///     - **Handler**: `signed_url::process`
///     - **Description**: Accepts a JSON body with `fileName` (required) and
///       `contentType` (optional) and returns `{ uploadUrl, key, publicUrl }`
///       with a one hour presigned PUT.
pub fn configure_routes(cfg: &mut ServiceConfig) {
    cfg.route("/upload-meme", post().to(upload::process))
        .route("/get-upload-url", post().to(signed_url::process));
}
