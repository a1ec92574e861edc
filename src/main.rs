use crate::config::Config;
use crate::impls::TmdbCatalog;
use crate::services::{OpenAIService, PlaybackService, YtDlpService};
use crate::storage::InMemorySessionStorage;
use actix_rt::signal::unix;
use actix_web::web::Data;
use actix_web::{web, App, HttpServer};
use futures_lite::FutureExt;
use metadata_providers::TmdbClient;
use playback_core::{
    ContentAssistant, ContentIngestor, ContentSearch, MetadataCatalog, SourceRegistry,
    VideoExtractor,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

mod config;
mod http;
mod impls;
mod services;
mod storage;
mod types;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

fn load_source_registry(sources_file: Option<&str>) -> SourceRegistry {
    match sources_file {
        Some(path) => {
            let raw_json = match std::fs::read_to_string(path) {
                Ok(raw_json) => raw_json,
                Err(error) => panic!("Unable to read sources file {}: {}", path, error),
            };

            match SourceRegistry::from_json(&raw_json) {
                Ok(registry) => registry,
                Err(error) => panic!("Invalid sources file {}: {}", path, error),
            }
        }
        None => SourceRegistry::default(),
    }
}

#[actix_rt::main]
async fn main() -> std::io::Result<()> {
    let mut terminate = unix::signal(unix::SignalKind::terminate())?;
    let mut interrupt = unix::signal(unix::SignalKind::interrupt())?;

    dotenv::dotenv().ok();
    env_logger::init();

    let config = Arc::from(Config::from_env());

    info!("Starting application...");

    let registry = load_source_registry(config.sources_file.as_deref());

    info!(providers = registry.len(), "Source registry loaded");

    let tmdb_client =
        TmdbClient::create(&config.tmdb.api_key).expect("Unable to initialize TMDB client");
    let catalog: Arc<dyn MetadataCatalog + Send + Sync> = Arc::new(TmdbCatalog(tmdb_client));

    let assistant: Option<Arc<dyn ContentAssistant + Send + Sync>> =
        match config.openai.api_key.clone() {
            Some(api_key) => {
                let openai_service: Arc<dyn ContentAssistant + Send + Sync> = Arc::new(
                    OpenAIService::create(api_key, config.openai.model.clone())
                        .expect("Unable to initialize OpenAI service"),
                );
                Some(openai_service)
            }
            None => {
                warn!("OPENAI_API_KEY is not set: AI search and descriptions are disabled");
                None
            }
        };

    let extractor: Arc<dyn VideoExtractor + Send + Sync> =
        Arc::new(YtDlpService::new(config.ytdlp_path.clone()));

    let content_search = Arc::new(ContentSearch::new(
        Arc::clone(&catalog),
        assistant.clone(),
    ));
    let ingestor = Arc::new(ContentIngestor::new(Arc::clone(&catalog), assistant));
    let playback_service = Arc::new(PlaybackService::new(
        Arc::new(registry),
        Arc::new(InMemorySessionStorage::new(Duration::from_secs(
            config.session_ttl,
        ))),
    ));

    actix_rt::spawn({
        let playback_service = Arc::clone(&playback_service);

        async move {
            let mut interval = actix_rt::time::interval(SESSION_SWEEP_INTERVAL);

            loop {
                interval.tick().await;
                playback_service.evict_idle_sessions().await;
            }
        }
    });

    let shutdown_timeout = config.shutdown_timeout;
    let bind_address = config.bind_address.clone();

    let server = HttpServer::new({
        move || {
            App::new()
                .app_data(Data::new(Arc::clone(&playback_service)))
                .app_data(Data::new(Arc::clone(&content_search)))
                .app_data(Data::new(Arc::clone(&ingestor)))
                .app_data(Data::new(Arc::clone(&extractor)))
                .service(web::resource("/health").route(web::get().to(http::health_check)))
                .service(
                    web::resource("/sources/{kind}/{tmdb_id}")
                        .route(web::get().to(http::get_sources)),
                )
                .service(web::resource("/playback").route(web::post().to(http::select_content)))
                .service(
                    web::resource("/playback/{session_id}")
                        .route(web::get().to(http::get_playback))
                        .route(web::delete().to(http::close_playback)),
                )
                .service(
                    web::resource("/playback/{session_id}/loaded")
                        .route(web::post().to(http::report_loaded)),
                )
                .service(
                    web::resource("/playback/{session_id}/failed")
                        .route(web::post().to(http::report_failed)),
                )
                .service(
                    web::resource("/playback/{session_id}/switch/{index}")
                        .route(web::post().to(http::switch_source)),
                )
                .service(web::resource("/search").route(web::get().to(http::search_content)))
                .service(web::resource("/extract").route(web::post().to(http::extract_url)))
                .service(
                    web::resource("/extract/formats").route(web::get().to(http::list_formats)),
                )
                .service(
                    web::resource("/ingest/{kind}/{tmdb_id}")
                        .route(web::get().to(http::prepare_draft)),
                )
        }
    })
    .shutdown_timeout(shutdown_timeout)
    .bind(bind_address)?
    .run();

    let server_handle = server.handle();

    actix_rt::spawn({
        async move {
            if let Err(error) = server.await {
                error!(?error, "Error on http server");
            }
        }
    });

    info!("Application started");

    interrupt.recv().or(terminate.recv()).await;

    info!("Received shutdown signal. Shutting down gracefully...");

    server_handle.stop(true).await;

    Ok(())
}
