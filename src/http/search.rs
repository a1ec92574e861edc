use crate::http::error_response;
use actix_web::http::StatusCode;
use actix_web::web::{Data, Query};
use actix_web::HttpResponse;
use playback_core::{ContentSearch, MediaKind};
use serde::Deserialize;
use std::sync::Arc;
use tracing::error;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SearchQuery {
    query: String,
    #[serde(default)]
    media_kind: Option<MediaKind>,
    #[serde(default)]
    ai: Option<bool>,
    #[serde(default)]
    report_errors: bool,
}

pub(crate) async fn search_content(
    content_search: Data<Arc<ContentSearch>>,
    params: Query<SearchQuery>,
) -> HttpResponse {
    let params = params.into_inner();
    let query = params.query.trim();

    if query.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "Search query must not be empty");
    }

    let media_kind = params.media_kind.unwrap_or(MediaKind::Movie);
    let use_ai = params.ai.unwrap_or_else(|| content_search.is_assisted());

    if !params.report_errors {
        return HttpResponse::Ok().json(content_search.search(query, media_kind, use_ai).await);
    }

    match content_search.try_search(query, media_kind, use_ai).await {
        Ok(hits) => HttpResponse::Ok().json(hits),
        Err(error) => {
            error!(?error, query, "Content search failed");
            error_response(StatusCode::BAD_GATEWAY, error)
        }
    }
}
