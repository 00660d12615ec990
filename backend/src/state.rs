use crate::config::InferenceConfig;
use crate::storage::Storage;

/// Shared application state, injected into Actix as `web::Data` in `main.rs`.
/// `storage` and `inference` are `None` when the respective provider is not
/// configured; the handlers turn that into a configuration error per request.
#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub storage: Option<Storage>,
    pub inference: Option<InferenceConfig>,
}
