mod openai_assistant;

mod tmdb_catalog;
pub(crate) use tmdb_catalog::TmdbCatalog;

mod ytdlp_extractor;
