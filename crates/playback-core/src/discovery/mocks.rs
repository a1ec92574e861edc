use crate::{
    ContentAssistant, ContentAssistantError, ContentDetails, ContentNotFound, ContentImages, MediaKind,
    MetadataCatalog, MetadataCatalogError, QueryInterpretation, SearchHit, TmdbId,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::io::{Error, ErrorKind};
use std::sync::Mutex;

fn unavailable(what: &str) -> Box<dyn std::error::Error + Send + Sync> {
    Box::new(Error::new(ErrorKind::Other, format!("{} unavailable", what)))
}

#[derive(Default)]
pub(crate) struct MetadataCatalogMock {
    pub(crate) search_results: HashMap<(String, MediaKind), Vec<SearchHit>>,
    pub(crate) details: HashMap<(u64, MediaKind), ContentDetails>,
    pub(crate) images: HashMap<(u64, MediaKind), ContentImages>,
    pub(crate) fail: bool,
    pub(crate) requests: Mutex<Vec<(String, MediaKind)>>,
}

#[async_trait]
impl MetadataCatalog for MetadataCatalogMock {
    async fn search(
        &self,
        query: &str,
        media_kind: MediaKind,
    ) -> Result<Vec<SearchHit>, MetadataCatalogError> {
        self.requests
            .lock()
            .unwrap()
            .push((query.to_string(), media_kind));

        if self.fail {
            return Err(MetadataCatalogError(unavailable("catalog")));
        }

        Ok(self
            .search_results
            .get(&(query.to_string(), media_kind))
            .cloned()
            .unwrap_or_default())
    }

    async fn details(
        &self,
        tmdb_id: &TmdbId,
        media_kind: MediaKind,
    ) -> Result<ContentDetails, MetadataCatalogError> {
        self.details
            .get(&(**tmdb_id, media_kind))
            .cloned()
            .ok_or_else(|| MetadataCatalogError(Box::new(ContentNotFound(*tmdb_id))))
    }

    async fn images(
        &self,
        tmdb_id: &TmdbId,
        media_kind: MediaKind,
    ) -> Result<ContentImages, MetadataCatalogError> {
        self.images
            .get(&(**tmdb_id, media_kind))
            .cloned()
            .ok_or_else(|| MetadataCatalogError(unavailable("images")))
    }
}

pub(crate) struct ContentAssistantMock {
    pub(crate) interpretation: Option<QueryInterpretation>,
    pub(crate) description: Option<String>,
}

#[async_trait]
impl ContentAssistant for ContentAssistantMock {
    async fn interpret_query(
        &self,
        _query: &str,
    ) -> Result<QueryInterpretation, ContentAssistantError> {
        self.interpretation
            .clone()
            .ok_or_else(|| ContentAssistantError(unavailable("assistant")))
    }

    async fn describe(&self, _details: &ContentDetails) -> Result<String, ContentAssistantError> {
        self.description
            .clone()
            .ok_or_else(|| ContentAssistantError(unavailable("assistant")))
    }
}
