mod config;
mod error;
mod services;
mod state;
mod storage;

use crate::config::Config;
use crate::state::AppState;
use crate::storage::Storage;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{info, warn};
use mime_guess::from_path;
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = Config::load();
    let url = format!("http://{}:{}", config.host, config.port);

    let http = reqwest::Client::new();
    let storage = match config.r2.as_ref() {
        Some(r2) => match Storage::from_config(r2, http.clone()) {
            Ok(storage) => Some(storage),
            Err(err) => {
                warn!("Object storage disabled: {}", err);
                None
            }
        },
        None => {
            warn!("Cloudflare R2 not configured - uploads will not work");
            None
        }
    };
    if config.inference.is_none() {
        warn!("HF_API_KEY not set - AI generation will not work");
    }

    let app_state = AppState {
        http,
        storage,
        inference: config.inference.clone(),
    };

    {
        let _url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&_url_clone);
        });
    }

    info!("Server running at {}", url);
    info!("Upload endpoint: {}/upload-meme", url);
    info!("AI generation: {}/generate-image", url);

    HttpServer::new(move || {
        App::new()
            .app_data(
                web::JsonConfig::default()
                    .limit(10 * 1024 * 1024) // 10 MB, same cap as uploads
                    .error_handler(|err, _req| error::ApiError::Validation(err.to_string()).into()),
            )
            .app_data(web::Data::new(app_state.clone()))
            .configure(services::memes::configure_routes)
            .configure(services::generate::configure_routes)
            .route("/health", web::get().to(services::health::process))
            .default_service(web::route().to(serve_embedded))
    })
        .bind((config.host.clone(), config.port))?
        .run()
        .await
}
