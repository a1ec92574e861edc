use super::mocks::{ContentAssistantMock, MetadataCatalogMock};
use crate::{
    ContentAssistant, ContentDetails, ContentIdentity, ContentImages, ContentIngestor,
    IngestError, MediaKind, TmdbId,
};
use std::collections::HashMap;
use std::sync::Arc;

fn matrix_details() -> ContentDetails {
    ContentDetails {
        title: "The Matrix".into(),
        overview: Some("A hacker learns the truth.".into()),
        release_date: Some("1999-03-30".into()),
        genres: vec!["Action".into(), "Science Fiction".into()],
        poster_path: Some("/details-poster.jpg".into()),
        backdrop_path: Some("/details-backdrop.jpg".into()),
        runtime_minutes: Some(136),
        number_of_seasons: None,
        vote_average: Some(8.2),
    }
}

fn make_catalog(images: ContentImages) -> MetadataCatalogMock {
    MetadataCatalogMock {
        details: HashMap::from([((603, MediaKind::Movie), matrix_details())]),
        images: HashMap::from([((603, MediaKind::Movie), images)]),
        ..MetadataCatalogMock::default()
    }
}

#[actix_rt::test]
async fn should_prepare_draft_with_images_and_description() {
    let catalog = Arc::new(make_catalog(ContentImages {
        posters: vec!["/poster-1.jpg".into(), "/poster-2.jpg".into()],
        backdrops: (1..=7).map(|i| format!("/backdrop-{}.jpg", i)).collect(),
    }));
    let assistant: Arc<dyn ContentAssistant + Send + Sync> = Arc::new(ContentAssistantMock {
        interpretation: None,
        description: Some("Reality is not what it seems.".into()),
    });
    let ingestor = ContentIngestor::new(catalog, Some(assistant));

    let draft = ingestor
        .prepare_draft(&ContentIdentity::movie(TmdbId(603)))
        .await
        .expect("Expected draft to be prepared");

    assert_eq!("The Matrix", draft.title);
    assert_eq!(
        Some("https://image.tmdb.org/t/p/original/poster-1.jpg".to_string()),
        draft.poster_url
    );
    assert_eq!(5, draft.backdrop_urls.len());
    assert_eq!(
        "https://image.tmdb.org/t/p/original/backdrop-1.jpg",
        draft.backdrop_urls[0]
    );
    assert_eq!(
        Some("Reality is not what it seems.".to_string()),
        draft.description
    );
    assert_eq!(MediaKind::Movie, draft.media_kind);
}

#[actix_rt::test]
async fn should_fall_back_to_detail_images_and_skip_failed_description() {
    let catalog = Arc::new(make_catalog(ContentImages::default()));
    let assistant: Arc<dyn ContentAssistant + Send + Sync> = Arc::new(ContentAssistantMock {
        interpretation: None,
        description: None,
    });
    let ingestor = ContentIngestor::new(catalog, Some(assistant));

    let draft = ingestor
        .prepare_draft(&ContentIdentity::movie(TmdbId(603)))
        .await
        .expect("Expected draft to be prepared");

    assert_eq!(
        Some("https://image.tmdb.org/t/p/original/details-poster.jpg".to_string()),
        draft.poster_url
    );
    assert_eq!(
        vec!["https://image.tmdb.org/t/p/original/details-backdrop.jpg".to_string()],
        draft.backdrop_urls
    );
    assert_eq!(None, draft.description);
}

#[actix_rt::test]
async fn should_fail_when_details_are_unavailable() {
    let catalog = Arc::new(make_catalog(ContentImages::default()));
    let ingestor = ContentIngestor::new(catalog, None);

    let result = ingestor
        .prepare_draft(&ContentIdentity::series(TmdbId(603), None, None))
        .await;

    match result {
        Err(IngestError::MetadataCatalogError(error)) => assert!(error.is_not_found()),
        other => panic!("Unexpected result: {:?}", other),
    }
}
