use crate::{MediaKind, TmdbId};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SEASON: u32 = 1;
pub const DEFAULT_EPISODE: u32 = 1;

#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentIdentity {
    tmdb_id: TmdbId,
    media_kind: MediaKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    season: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    episode: Option<u32>,
}

impl ContentIdentity {
    pub fn movie(tmdb_id: TmdbId) -> Self {
        Self {
            tmdb_id,
            media_kind: MediaKind::Movie,
            season: None,
            episode: None,
        }
    }

    pub fn series(tmdb_id: TmdbId, season: Option<u32>, episode: Option<u32>) -> Self {
        Self {
            tmdb_id,
            media_kind: MediaKind::Series,
            season,
            episode,
        }
    }

    pub fn new(
        tmdb_id: TmdbId,
        media_kind: MediaKind,
        season: Option<u32>,
        episode: Option<u32>,
    ) -> Self {
        match media_kind {
            MediaKind::Movie => Self::movie(tmdb_id),
            MediaKind::Series => Self::series(tmdb_id, season, episode),
        }
    }

    pub fn tmdb_id(&self) -> &TmdbId {
        &self.tmdb_id
    }

    pub fn media_kind(&self) -> MediaKind {
        self.media_kind
    }

    pub fn season(&self) -> u32 {
        self.season.unwrap_or(DEFAULT_SEASON)
    }

    pub fn episode(&self) -> u32 {
        self.episode.unwrap_or(DEFAULT_EPISODE)
    }
}

impl std::fmt::Display for ContentIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.media_kind {
            MediaKind::Movie => write!(f, "movie/{}", self.tmdb_id),
            MediaKind::Series => write!(
                f,
                "tv/{}/s{}e{}",
                self.tmdb_id,
                self.season(),
                self.episode()
            ),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceTemplate {
    pub provider_name: String,
    #[serde(default)]
    pub movie_url_pattern: Option<String>,
    #[serde(default)]
    pub series_url_pattern: Option<String>,
}

impl SourceTemplate {
    pub fn new(
        provider_name: impl Into<String>,
        movie_url_pattern: Option<&str>,
        series_url_pattern: Option<&str>,
    ) -> Self {
        Self {
            provider_name: provider_name.into(),
            movie_url_pattern: movie_url_pattern.map(Into::into),
            series_url_pattern: series_url_pattern.map(Into::into),
        }
    }

    pub fn pattern_for(&self, media_kind: MediaKind) -> Option<&str> {
        match media_kind {
            MediaKind::Movie => self.movie_url_pattern.as_deref(),
            MediaKind::Series => self.series_url_pattern.as_deref(),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedSource {
    pub provider_name: String,
    pub url: String,
}
