use crate::http::error_response;
use crate::services::{PlaybackService, PlaybackServiceError, PlaybackSnapshot};
use crate::types::SessionId;
use actix_web::http::StatusCode;
use actix_web::web::{Data, Json, Path};
use actix_web::HttpResponse;
use playback_core::{ContentIdentity, FallbackError, MediaKind, TmdbId};
use serde::Deserialize;
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SelectRequest {
    #[serde(default)]
    session_id: Option<SessionId>,
    media_kind: MediaKind,
    tmdb_id: u64,
    #[serde(default)]
    season: Option<u32>,
    #[serde(default)]
    episode: Option<u32>,
}

fn to_response(result: Result<PlaybackSnapshot, PlaybackServiceError>) -> HttpResponse {
    match result {
        Ok(snapshot) => HttpResponse::Ok().json(snapshot),
        Err(error) => {
            warn!(?error, "Playback request rejected");

            let status = match &error {
                PlaybackServiceError::SessionNotFound(_) => StatusCode::NOT_FOUND,
                PlaybackServiceError::FallbackError(FallbackError::NothingSelected) => {
                    StatusCode::CONFLICT
                }
                PlaybackServiceError::FallbackError(FallbackError::IndexOutOfRange { .. }) => {
                    StatusCode::BAD_REQUEST
                }
            };

            error_response(status, error)
        }
    }
}

pub(crate) async fn select_content(
    playback_service: Data<Arc<PlaybackService>>,
    request: Json<SelectRequest>,
) -> HttpResponse {
    let request = request.into_inner();
    let tmdb_id = match TmdbId::new(request.tmdb_id) {
        Some(tmdb_id) => tmdb_id,
        None => {
            return error_response(StatusCode::BAD_REQUEST, "TMDB id must be a positive integer")
        }
    };
    let content = ContentIdentity::new(
        tmdb_id,
        request.media_kind,
        request.season,
        request.episode,
    );

    to_response(playback_service.select(request.session_id, content).await)
}

pub(crate) async fn get_playback(
    playback_service: Data<Arc<PlaybackService>>,
    session_id: Path<Uuid>,
) -> HttpResponse {
    let session_id = SessionId::from(session_id.into_inner());

    to_response(playback_service.get(&session_id).await)
}

pub(crate) async fn report_loaded(
    playback_service: Data<Arc<PlaybackService>>,
    session_id: Path<Uuid>,
) -> HttpResponse {
    let session_id = SessionId::from(session_id.into_inner());

    to_response(playback_service.report_loaded(&session_id).await)
}

pub(crate) async fn report_failed(
    playback_service: Data<Arc<PlaybackService>>,
    session_id: Path<Uuid>,
) -> HttpResponse {
    let session_id = SessionId::from(session_id.into_inner());

    to_response(playback_service.report_failed(&session_id).await)
}

pub(crate) async fn switch_source(
    playback_service: Data<Arc<PlaybackService>>,
    path: Path<(Uuid, usize)>,
) -> HttpResponse {
    let (session_id, index) = path.into_inner();
    let session_id = SessionId::from(session_id);

    to_response(playback_service.switch_source(&session_id, index).await)
}

pub(crate) async fn close_playback(
    playback_service: Data<Arc<PlaybackService>>,
    session_id: Path<Uuid>,
) -> HttpResponse {
    let session_id = SessionId::from(session_id.into_inner());

    match playback_service.close(&session_id).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(error) => error_response(StatusCode::NOT_FOUND, error),
    }
}
