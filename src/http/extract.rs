use crate::http::error_response;
use actix_web::http::StatusCode;
use actix_web::web::{Data, Json, Query};
use actix_web::HttpResponse;
use playback_core::{VideoExtractor, VideoExtractorError};
use serde::Deserialize;
use std::sync::Arc;
use tracing::warn;

const DEFAULT_FORMAT: &str = "best";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ExtractRequest {
    page_url: String,
    #[serde(default)]
    format: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FormatsQuery {
    page_url: String,
}

fn extraction_error(error: VideoExtractorError) -> HttpResponse {
    warn!(?error, "Video extraction failed");

    let status = match &error {
        VideoExtractorError::UnsupportedUrl(_) => StatusCode::BAD_REQUEST,
        VideoExtractorError::VideoUnavailable => StatusCode::NOT_FOUND,
        VideoExtractorError::PrivateVideo => StatusCode::FORBIDDEN,
        VideoExtractorError::GeoRestricted => StatusCode::UNAVAILABLE_FOR_LEGAL_REASONS,
        VideoExtractorError::ToolNotFound(_) => StatusCode::SERVICE_UNAVAILABLE,
        VideoExtractorError::Failed(_) => StatusCode::BAD_GATEWAY,
    };

    error_response(status, error)
}

pub(crate) async fn extract_url(
    extractor: Data<Arc<dyn VideoExtractor + Send + Sync>>,
    request: Json<ExtractRequest>,
) -> HttpResponse {
    let format = request.format.as_deref().unwrap_or(DEFAULT_FORMAT);

    match extractor.extract_url(&request.page_url, format).await {
        Ok(video) => HttpResponse::Ok().json(video),
        Err(error) => extraction_error(error),
    }
}

pub(crate) async fn list_formats(
    extractor: Data<Arc<dyn VideoExtractor + Send + Sync>>,
    query: Query<FormatsQuery>,
) -> HttpResponse {
    match extractor.list_formats(&query.page_url).await {
        Ok(formats) => HttpResponse::Ok().json(formats),
        Err(error) => extraction_error(error),
    }
}
