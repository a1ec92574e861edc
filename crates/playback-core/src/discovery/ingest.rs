use crate::{
    CatalogDraft, ContentAssistant, ContentDetails, ContentIdentity, MetadataCatalog,
    MetadataCatalogError,
};
use futures_lite::future;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub const TMDB_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/original";
const MAX_BACKDROPS: usize = 5;

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error(transparent)]
    MetadataCatalogError(#[from] MetadataCatalogError),
}

pub fn image_url(path: &str) -> String {
    format!("{}/{}", TMDB_IMAGE_BASE_URL, path.trim_start_matches('/'))
}

pub struct ContentIngestor {
    catalog: Arc<dyn MetadataCatalog + Send + Sync>,
    assistant: Option<Arc<dyn ContentAssistant + Send + Sync>>,
}

impl ContentIngestor {
    pub fn new(
        catalog: Arc<dyn MetadataCatalog + Send + Sync>,
        assistant: Option<Arc<dyn ContentAssistant + Send + Sync>>,
    ) -> Self {
        Self { catalog, assistant }
    }

    pub async fn prepare_draft(
        &self,
        identity: &ContentIdentity,
    ) -> Result<CatalogDraft, IngestError> {
        let tmdb_id = identity.tmdb_id();
        let media_kind = identity.media_kind();

        let details = self.catalog.details(tmdb_id, media_kind).await?;

        debug!(%identity, title = %details.title, "Fetched content details");

        let (images, description) = future::zip(
            self.catalog.images(tmdb_id, media_kind),
            self.describe(&details),
        )
        .await;
        let images = images?;

        let poster_url = images
            .posters
            .first()
            .or(details.poster_path.as_ref())
            .map(|path| image_url(path));
        let backdrop_urls = match images.backdrops.is_empty() {
            false => images
                .backdrops
                .iter()
                .take(MAX_BACKDROPS)
                .map(|path| image_url(path))
                .collect(),
            true => details.backdrop_path.iter().map(|path| image_url(path)).collect(),
        };

        info!(%identity, "Catalog draft prepared");

        Ok(CatalogDraft {
            tmdb_id: *tmdb_id,
            media_kind,
            title: details.title,
            overview: details.overview,
            release_date: details.release_date,
            genres: details.genres,
            poster_url,
            backdrop_urls,
            description,
        })
    }

    async fn describe(&self, details: &ContentDetails) -> Option<String> {
        let assistant = self.assistant.as_ref()?;

        match assistant.describe(details).await {
            Ok(description) => Some(description),
            Err(error) => {
                warn!(?error, title = %details.title, "Unable to generate description");
                None
            }
        }
    }
}
