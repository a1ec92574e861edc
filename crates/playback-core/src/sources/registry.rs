use crate::SourceTemplate;
use tracing::debug;

// Ordered by observed reliability, most reliable first.
const DEFAULT_SOURCES: [(&str, Option<&str>, Option<&str>); 6] = [
    (
        "VidSrc",
        Some("https://vidsrc.to/embed/movie/{tmdbId}"),
        Some("https://vidsrc.to/embed/tv/{tmdbId}/{season}/{episode}"),
    ),
    (
        "VidSrc.me",
        Some("https://vidsrc.me/embed/movie?tmdb={tmdbId}"),
        Some("https://vidsrc.me/embed/tv?tmdb={tmdbId}&season={season}&episode={episode}"),
    ),
    (
        "AutoEmbed",
        Some("https://player.autoembed.cc/embed/movie/{tmdbId}"),
        Some("https://player.autoembed.cc/embed/tv/{tmdbId}/{season}/{episode}"),
    ),
    (
        "2Embed",
        Some("https://www.2embed.cc/embed/{tmdbId}"),
        Some("https://www.2embed.cc/embedtv/{tmdbId}&s={season}&e={episode}"),
    ),
    (
        "MultiEmbed",
        Some("https://multiembed.mov/?video_id={tmdbId}&tmdb=1"),
        Some("https://multiembed.mov/?video_id={tmdbId}&tmdb=1&s={season}&e={episode}"),
    ),
    (
        "MoviesAPI",
        Some("https://moviesapi.club/movie/{tmdbId}"),
        Some("https://moviesapi.club/tv/{tmdbId}-{season}-{episode}"),
    ),
];

#[derive(Debug, thiserror::Error)]
pub enum SourceRegistryError {
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
    #[error("Source template #{0} has neither a movie nor a series pattern")]
    EmptyTemplate(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SourceRegistry {
    templates: Vec<SourceTemplate>,
}

impl SourceRegistry {
    pub fn new(templates: Vec<SourceTemplate>) -> Self {
        Self { templates }
    }

    // Array order is priority order.
    pub fn from_json(raw_json: &str) -> Result<Self, SourceRegistryError> {
        let templates: Vec<SourceTemplate> = serde_json::from_str(raw_json)?;

        if let Some(position) = templates
            .iter()
            .position(|t| t.movie_url_pattern.is_none() && t.series_url_pattern.is_none())
        {
            return Err(SourceRegistryError::EmptyTemplate(position));
        }

        debug!(count = templates.len(), "Loaded source templates");

        Ok(Self::new(templates))
    }

    pub fn templates(&self) -> &[SourceTemplate] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self::new(
            DEFAULT_SOURCES
                .iter()
                .map(|(name, movie, series)| SourceTemplate::new(*name, *movie, *series))
                .collect(),
        )
    }
}
