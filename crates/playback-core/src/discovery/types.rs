use crate::{MediaKind, TmdbId};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub id: u64,
    pub title: String,
    pub release_date: Option<String>,
    pub poster_path: Option<String>,
    pub media_kind: MediaKind,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KindHint {
    Movie,
    #[serde(alias = "series")]
    Tv,
    #[default]
    #[serde(other)]
    Any,
}

impl KindHint {
    pub fn or(self, fallback: MediaKind) -> MediaKind {
        match self {
            KindHint::Movie => MediaKind::Movie,
            KindHint::Tv => MediaKind::Series,
            KindHint::Any => fallback,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryInterpretation {
    #[serde(default)]
    pub keywords: String,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub media_type: KindHint,
}

#[derive(Clone, PartialEq, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDetails {
    pub title: String,
    pub overview: Option<String>,
    pub release_date: Option<String>,
    pub genres: Vec<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub runtime_minutes: Option<u32>,
    pub number_of_seasons: Option<u32>,
    pub vote_average: Option<f32>,
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct ContentImages {
    pub posters: Vec<String>,
    pub backdrops: Vec<String>,
}

#[derive(Clone, PartialEq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDraft {
    pub tmdb_id: TmdbId,
    pub media_kind: MediaKind,
    pub title: String,
    pub overview: Option<String>,
    pub release_date: Option<String>,
    pub genres: Vec<String>,
    pub poster_url: Option<String>,
    pub backdrop_urls: Vec<String>,
    pub description: Option<String>,
}

#[derive(Clone, PartialEq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedVideo {
    pub page_url: String,
    pub format: String,
    pub url: String,
}

#[derive(Clone, PartialEq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoFormat {
    pub format_id: String,
    pub extension: String,
    pub resolution: Option<String>,
    pub note: Option<String>,
    pub url: Option<String>,
}
