use crate::http::{error_response, parse_identity, EpisodeQuery};
use actix_web::http::StatusCode;
use actix_web::web::{Data, Path};
use actix_web::HttpResponse;
use playback_core::{ContentIngestor, IngestError};
use std::sync::Arc;
use tracing::error;

pub(crate) async fn prepare_draft(
    ingestor: Data<Arc<ContentIngestor>>,
    path: Path<(String, u64)>,
) -> HttpResponse {
    let (kind, tmdb_id) = path.into_inner();
    let content = match parse_identity(&kind, tmdb_id, &EpisodeQuery::default()) {
        Ok(content) => content,
        Err(response) => return response,
    };

    match ingestor.prepare_draft(&content).await {
        Ok(draft) => HttpResponse::Ok().json(draft),
        Err(IngestError::MetadataCatalogError(error)) if error.is_not_found() => {
            error_response(StatusCode::NOT_FOUND, error)
        }
        Err(error) => {
            error!(?error, %content, "Unable to prepare catalog draft");
            error_response(StatusCode::BAD_GATEWAY, error)
        }
    }
}
