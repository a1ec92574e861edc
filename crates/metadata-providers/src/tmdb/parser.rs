use crate::{Details, Images, ItemId, MediaType, SearchResult, SearchResults};
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
}

// Movies carry `title`/`release_date`, TV shows `name`/`first_air_date`.
#[derive(Deserialize)]
struct RawSearchItem {
    id: u64,
    #[serde(alias = "name")]
    title: Option<String>,
    #[serde(alias = "first_air_date")]
    release_date: Option<String>,
    poster_path: Option<String>,
}

#[derive(Deserialize)]
struct RawSearchPage {
    #[serde(default)]
    results: Vec<RawSearchItem>,
}

#[derive(Deserialize)]
struct RawGenre {
    name: String,
}

#[derive(Deserialize)]
struct RawDetails {
    id: u64,
    #[serde(alias = "name")]
    title: Option<String>,
    overview: Option<String>,
    #[serde(alias = "first_air_date")]
    release_date: Option<String>,
    #[serde(default)]
    genres: Vec<RawGenre>,
    poster_path: Option<String>,
    backdrop_path: Option<String>,
    runtime: Option<u32>,
    #[serde(default)]
    episode_run_time: Vec<u32>,
    number_of_seasons: Option<u32>,
    vote_average: Option<f32>,
}

#[derive(Deserialize)]
struct RawImage {
    file_path: String,
}

#[derive(Deserialize)]
struct RawImages {
    #[serde(default)]
    posters: Vec<RawImage>,
    #[serde(default)]
    backdrops: Vec<RawImage>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

pub(crate) fn parse_search_results(
    raw_json: &str,
    media_type: MediaType,
) -> Result<SearchResults, ParseError> {
    let page: RawSearchPage = serde_json::from_str(raw_json)?;

    // Order is the API's relevance order and must stay as is.
    let results = page
        .results
        .into_iter()
        .map(|item| SearchResult {
            item_id: ItemId(item.id),
            title: item.title.unwrap_or_default(),
            release_date: non_empty(item.release_date),
            poster_path: non_empty(item.poster_path),
            media_type,
        })
        .collect();

    Ok(results)
}

pub(crate) fn parse_details(raw_json: &str) -> Result<Details, ParseError> {
    let raw: RawDetails = serde_json::from_str(raw_json)?;

    Ok(Details {
        item_id: ItemId(raw.id),
        title: non_empty(raw.title).unwrap_or_default(),
        overview: non_empty(raw.overview),
        release_date: non_empty(raw.release_date),
        genres: raw.genres.into_iter().map(|g| g.name).collect(),
        poster_path: non_empty(raw.poster_path),
        backdrop_path: non_empty(raw.backdrop_path),
        runtime: raw.runtime.or_else(|| raw.episode_run_time.first().copied()),
        number_of_seasons: raw.number_of_seasons,
        vote_average: raw.vote_average,
    })
}

pub(crate) fn parse_images(raw_json: &str) -> Result<Images, ParseError> {
    let raw: RawImages = serde_json::from_str(raw_json)?;

    Ok(Images {
        posters: raw.posters.into_iter().map(|i| i.file_path).collect(),
        backdrops: raw.backdrops.into_iter().map(|i| i.file_path).collect(),
    })
}
