use crate::tmdb::parser::{parse_details, parse_images, parse_search_results, ParseError};
use crate::{Details, Images, ItemId, MediaType, SearchResults};
use reqwest::{Client, StatusCode};
use serde::Serialize;
use tracing::debug;

const TMDB_API_HOST: &str = "https://api.themoviedb.org/3";
const IMAGE_LANGUAGES: &str = "en,null";

#[derive(Debug, thiserror::Error)]
pub enum TmdbClientError {
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),
    #[error(transparent)]
    ParseError(#[from] ParseError),
    #[error("TMDB item {0} not found")]
    NotFound(ItemId),
}

pub struct TmdbClient {
    client: Client,
    api_key: String,
    host: String,
}

impl TmdbClient {
    pub fn create(api_key: &str) -> Result<Self, TmdbClientError> {
        Self::with_host(api_key, TMDB_API_HOST)
    }

    pub fn with_host(api_key: &str, host: &str) -> Result<Self, TmdbClientError> {
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            host: host.trim_end_matches('/').to_string(),
        })
    }

    pub async fn search(
        &self,
        query_str: &str,
        media_type: MediaType,
    ) -> Result<SearchResults, TmdbClientError> {
        #[derive(Serialize)]
        struct Query<'a> {
            api_key: &'a str,
            query: &'a str,
            include_adult: bool,
        }

        let query = Query {
            api_key: &self.api_key,
            query: query_str,
            include_adult: false,
        };

        debug!(query = query_str, ?media_type, "Searching TMDB");

        let raw_json = self
            .client
            .get(format!("{}/search/{}", self.host, media_type.as_path()))
            .query(&query)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(parse_search_results(&raw_json, media_type)?)
    }

    pub async fn details(
        &self,
        item_id: &ItemId,
        media_type: MediaType,
    ) -> Result<Details, TmdbClientError> {
        #[derive(Serialize)]
        struct Query<'a> {
            api_key: &'a str,
        }

        let response = self
            .client
            .get(format!("{}/{}/{}", self.host, media_type.as_path(), item_id))
            .query(&Query {
                api_key: &self.api_key,
            })
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(TmdbClientError::NotFound(*item_id));
        }

        let raw_json = response.error_for_status()?.text().await?;

        Ok(parse_details(&raw_json)?)
    }

    pub async fn images(
        &self,
        item_id: &ItemId,
        media_type: MediaType,
    ) -> Result<Images, TmdbClientError> {
        #[derive(Serialize)]
        struct Query<'a> {
            api_key: &'a str,
            include_image_language: &'a str,
        }

        let response = self
            .client
            .get(format!(
                "{}/{}/{}/images",
                self.host,
                media_type.as_path(),
                item_id
            ))
            .query(&Query {
                api_key: &self.api_key,
                include_image_language: IMAGE_LANGUAGES,
            })
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(TmdbClientError::NotFound(*item_id));
        }

        let raw_json = response.error_for_status()?.text().await?;

        Ok(parse_images(&raw_json)?)
    }
}
