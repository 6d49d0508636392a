use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer};
use log::{error, info};
use once_cell::sync::OnceCell;

use crate::config::RelayConfig;
use crate::controllers::chat_controller;
use crate::error::RelayError;
use crate::services::openai_client::OpenAiClient;

/// Shared service state.
///
/// The vendor handle is created on first use so a missing credential
/// surfaces as a request-time error rather than a crash during startup
/// of unrelated routes.
pub struct AppState {
    vendor: OnceCell<OpenAiClient>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            vendor: OnceCell::new(),
        }
    }

    /// State with a pre-built vendor client; lets tests point the relay
    /// at a mock vendor.
    pub fn with_vendor(client: OpenAiClient) -> Self {
        Self {
            vendor: OnceCell::with_value(client),
        }
    }

    /// Create-if-absent vendor handle.
    pub fn vendor(&self) -> Result<&OpenAiClient, RelayError> {
        self.vendor.get_or_try_init(OpenAiClient::from_env)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

async fn index() -> HttpResponse {
    HttpResponse::Ok().body("API is running")
}

pub fn app_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .service(web::scope("/api").configure(chat_controller::config));
}

pub async fn run(config: RelayConfig) -> Result<(), String> {
    info!("Starting chat relay...");

    let app_state = web::Data::new(AppState::new());

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(Cors::permissive())
            .configure(app_config)
    })
    .bind((config.host.as_str(), config.port))
    .map_err(|e| format!("Failed to bind server: {e}"))?
    .run();

    info!(
        "Chat relay listening on http://{}:{}",
        config.host, config.port
    );

    if let Err(e) = server.await {
        error!("Relay server error: {}", e);
        return Err(format!("Relay server error: {e}"));
    }

    Ok(())
}
