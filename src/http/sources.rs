use crate::http::{parse_identity, EpisodeQuery};
use crate::services::PlaybackService;
use actix_web::web::{Data, Path, Query};
use actix_web::HttpResponse;
use serde_json::json;
use std::sync::Arc;

pub(crate) async fn get_sources(
    playback_service: Data<Arc<PlaybackService>>,
    path: Path<(String, u64)>,
    query: Query<EpisodeQuery>,
) -> HttpResponse {
    let (kind, tmdb_id) = path.into_inner();
    let content = match parse_identity(&kind, tmdb_id, &query) {
        Ok(content) => content,
        Err(response) => return response,
    };

    let sources = playback_service.resolve(&content);

    HttpResponse::Ok().json(json!({
        "content": content,
        "sources": sources,
    }))
}
