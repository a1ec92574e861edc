use crate::services::PlaybackService;
use actix_web::web::Data;
use actix_web::{HttpResponse, Responder};
use serde_json::json;
use std::sync::Arc;

pub(crate) async fn health_check(playback_service: Data<Arc<PlaybackService>>) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "version": crate::VERSION,
        "activeSessions": playback_service.active_sessions().await,
    }))
}
