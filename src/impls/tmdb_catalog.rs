use async_trait::async_trait;
use metadata_providers::{Details, Images, MediaType, SearchResult, TmdbClient, TmdbClientError};
use playback_core::{
    ContentDetails, ContentImages, ContentNotFound, MediaKind, MetadataCatalog,
    MetadataCatalogError, SearchHit, TmdbId,
};

pub(crate) struct TmdbCatalog(pub(crate) TmdbClient);

fn to_media_type(media_kind: MediaKind) -> MediaType {
    match media_kind {
        MediaKind::Movie => MediaType::Movie,
        MediaKind::Series => MediaType::Tv,
    }
}

fn to_media_kind(media_type: MediaType) -> MediaKind {
    match media_type {
        MediaType::Movie => MediaKind::Movie,
        MediaType::Tv => MediaKind::Series,
    }
}

fn to_catalog_error(error: TmdbClientError, tmdb_id: &TmdbId) -> MetadataCatalogError {
    match error {
        TmdbClientError::NotFound(_) => MetadataCatalogError(Box::new(ContentNotFound(*tmdb_id))),
        other => MetadataCatalogError(Box::new(other)),
    }
}

fn to_search_hit(result: SearchResult) -> SearchHit {
    SearchHit {
        id: *result.item_id,
        title: result.title,
        release_date: result.release_date,
        poster_path: result.poster_path,
        media_kind: to_media_kind(result.media_type),
    }
}

fn to_content_details(details: Details) -> ContentDetails {
    ContentDetails {
        title: details.title,
        overview: details.overview,
        release_date: details.release_date,
        genres: details.genres,
        poster_path: details.poster_path,
        backdrop_path: details.backdrop_path,
        runtime_minutes: details.runtime,
        number_of_seasons: details.number_of_seasons,
        vote_average: details.vote_average,
    }
}

fn to_content_images(images: Images) -> ContentImages {
    ContentImages {
        posters: images.posters,
        backdrops: images.backdrops,
    }
}

#[async_trait]
impl MetadataCatalog for TmdbCatalog {
    async fn search(
        &self,
        query: &str,
        media_kind: MediaKind,
    ) -> Result<Vec<SearchHit>, MetadataCatalogError> {
        let results = self
            .0
            .search(query, to_media_type(media_kind))
            .await
            .map_err(|error| MetadataCatalogError(Box::new(error)))?;

        Ok(results.into_iter().map(to_search_hit).collect())
    }

    async fn details(
        &self,
        tmdb_id: &TmdbId,
        media_kind: MediaKind,
    ) -> Result<ContentDetails, MetadataCatalogError> {
        self.0
            .details(&(**tmdb_id).into(), to_media_type(media_kind))
            .await
            .map(to_content_details)
            .map_err(|error| to_catalog_error(error, tmdb_id))
    }

    async fn images(
        &self,
        tmdb_id: &TmdbId,
        media_kind: MediaKind,
    ) -> Result<ContentImages, MetadataCatalogError> {
        self.0
            .images(&(**tmdb_id).into(), to_media_type(media_kind))
            .await
            .map(to_content_images)
            .map_err(|error| to_catalog_error(error, tmdb_id))
    }
}
