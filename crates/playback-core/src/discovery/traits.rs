use crate::{
    ContentDetails, ContentImages, ExtractedVideo, MediaKind, QueryInterpretation, SearchHit,
    TmdbId, VideoFormat,
};
use async_trait::async_trait;
use std::fmt::Formatter;

#[derive(Debug, thiserror::Error)]
pub struct MetadataCatalogError(pub Box<dyn std::error::Error + Send + Sync>);

impl std::fmt::Display for MetadataCatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl MetadataCatalogError {
    pub fn is_not_found(&self) -> bool {
        self.0.is::<ContentNotFound>()
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Content {0} not found in the metadata catalog")]
pub struct ContentNotFound(pub TmdbId);

#[async_trait]
pub trait MetadataCatalog {
    async fn search(
        &self,
        query: &str,
        media_kind: MediaKind,
    ) -> Result<Vec<SearchHit>, MetadataCatalogError>;
    async fn details(
        &self,
        tmdb_id: &TmdbId,
        media_kind: MediaKind,
    ) -> Result<ContentDetails, MetadataCatalogError>;
    async fn images(
        &self,
        tmdb_id: &TmdbId,
        media_kind: MediaKind,
    ) -> Result<ContentImages, MetadataCatalogError>;
}

#[derive(Debug, thiserror::Error)]
pub struct ContentAssistantError(pub Box<dyn std::error::Error + Send + Sync>);

impl std::fmt::Display for ContentAssistantError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[async_trait]
pub trait ContentAssistant {
    async fn interpret_query(&self, query: &str)
        -> Result<QueryInterpretation, ContentAssistantError>;
    async fn describe(&self, details: &ContentDetails) -> Result<String, ContentAssistantError>;
}

#[derive(Debug, thiserror::Error)]
pub enum VideoExtractorError {
    #[error("Unsupported URL: {0}")]
    UnsupportedUrl(String),
    #[error("Video is unavailable")]
    VideoUnavailable,
    #[error("Video is private")]
    PrivateVideo,
    #[error("Video is not available in this region")]
    GeoRestricted,
    #[error("Extraction tool is not available: {0}")]
    ToolNotFound(String),
    #[error("Extraction failed: {0}")]
    Failed(String),
}

#[async_trait]
pub trait VideoExtractor {
    async fn extract_url(
        &self,
        page_url: &str,
        format: &str,
    ) -> Result<ExtractedVideo, VideoExtractorError>;
    async fn list_formats(&self, page_url: &str) -> Result<Vec<VideoFormat>, VideoExtractorError>;
}
