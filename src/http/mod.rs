use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use playback_core::{ContentIdentity, MediaKind, TmdbId};
use serde::{Deserialize, Serialize};

mod extract;
mod health;
mod ingest;
mod playback;
mod search;
mod sources;

pub(crate) use extract::{extract_url, list_formats};
pub(crate) use health::health_check;
pub(crate) use ingest::prepare_draft;
pub(crate) use playback::{
    close_playback, get_playback, report_failed, report_loaded, select_content, switch_source,
};
pub(crate) use search::search_content;
pub(crate) use sources::get_sources;


#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

pub(crate) fn error_response(status: StatusCode, message: impl ToString) -> HttpResponse {
    HttpResponse::build(status).json(ErrorBody {
        error: message.to_string(),
    })
}

#[derive(Deserialize, Default)]
pub(crate) struct EpisodeQuery {
    season: Option<u32>,
    episode: Option<u32>,
}

pub(crate) fn parse_identity(
    kind: &str,
    tmdb_id: u64,
    episode: &EpisodeQuery,
) -> Result<ContentIdentity, HttpResponse> {
    let media_kind = kind
        .parse::<MediaKind>()
        .map_err(|error| error_response(StatusCode::BAD_REQUEST, error))?;
    let tmdb_id = TmdbId::new(tmdb_id).ok_or_else(|| {
        error_response(StatusCode::BAD_REQUEST, "TMDB id must be a positive integer")
    })?;

    Ok(ContentIdentity::new(
        tmdb_id,
        media_kind,
        episode.season,
        episode.episode,
    ))
}
