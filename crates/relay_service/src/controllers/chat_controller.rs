use actix_web::{
    web::{self, Data, Json},
    HttpResponse,
};
use log::{error, info};

use chat_core::{ChatReply, ChatRequest};

use crate::error::{RelayError, Result};
use crate::server::AppState;

/// `POST /api/chat` - forward one user message to the vendor API and
/// relay the text reply.
pub async fn chat(app_state: Data<AppState>, body: Json<ChatRequest>) -> Result<HttpResponse> {
    let request = body.into_inner();
    if request.message.is_empty() {
        // Validated before any vendor contact.
        return Err(RelayError::MissingMessage);
    }

    let vendor = app_state.vendor().map_err(|e| {
        error!("vendor unavailable: {e}");
        e
    })?;

    let reply = vendor.complete(&request.message).await.map_err(|e| {
        error!("Chat error: {e:#}");
        RelayError::from(e)
    })?;

    info!("relayed chat reply ({} bytes)", reply.len());
    Ok(HttpResponse::Ok().json(ChatReply::new(reply)))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/chat", web::post().to(chat));
}
