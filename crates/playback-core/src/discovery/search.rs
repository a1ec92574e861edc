use crate::{
    ContentAssistant, ContentAssistantError, MediaKind, MetadataCatalog, MetadataCatalogError,
    QueryInterpretation, SearchHit,
};
use std::sync::Arc;
use tracing::{debug, error, info};

const SERIES_MARKER: &str = "series";

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error(transparent)]
    MetadataCatalogError(#[from] MetadataCatalogError),
    #[error(transparent)]
    ContentAssistantError(#[from] ContentAssistantError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchPlan {
    pub query: String,
    pub media_kind: MediaKind,
}

impl SearchPlan {
    pub fn from_raw_query(query: &str, default_kind: MediaKind) -> Self {
        let media_kind = if contains_ignore_case(query, SERIES_MARKER) {
            MediaKind::Series
        } else {
            default_kind
        };

        Self {
            query: query.to_string(),
            media_kind,
        }
    }

    pub fn from_interpretation(
        raw_query: &str,
        interpretation: &QueryInterpretation,
        default_kind: MediaKind,
    ) -> Self {
        let query = [
            Some(interpretation.keywords.trim()),
            interpretation.genre.as_deref().map(str::trim),
        ]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

        Self {
            query: if query.is_empty() {
                raw_query.to_string()
            } else {
                query
            },
            media_kind: interpretation.media_type.or(default_kind),
        }
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

pub struct ContentSearch {
    catalog: Arc<dyn MetadataCatalog + Send + Sync>,
    assistant: Option<Arc<dyn ContentAssistant + Send + Sync>>,
}

impl ContentSearch {
    pub fn new(
        catalog: Arc<dyn MetadataCatalog + Send + Sync>,
        assistant: Option<Arc<dyn ContentAssistant + Send + Sync>>,
    ) -> Self {
        Self { catalog, assistant }
    }

    pub fn is_assisted(&self) -> bool {
        self.assistant.is_some()
    }

    pub async fn search(
        &self,
        query: &str,
        default_kind: MediaKind,
        use_ai: bool,
    ) -> Vec<SearchHit> {
        match self.try_search(query, default_kind, use_ai).await {
            Ok(hits) => hits,
            Err(error) => {
                error!(?error, query, "Content search failed");
                vec![]
            }
        }
    }

    pub async fn try_search(
        &self,
        query: &str,
        default_kind: MediaKind,
        use_ai: bool,
    ) -> Result<Vec<SearchHit>, SearchError> {
        let plan = self.plan(query, default_kind, use_ai).await?;

        debug!(?plan, "Searching metadata catalog");

        let hits = self.catalog.search(&plan.query, plan.media_kind).await?;

        info!(query, results = hits.len(), "Content search finished");

        Ok(hits)
    }

    pub async fn plan(
        &self,
        query: &str,
        default_kind: MediaKind,
        use_ai: bool,
    ) -> Result<SearchPlan, SearchError> {
        match (&self.assistant, use_ai) {
            (Some(assistant), true) => {
                let interpretation = assistant.interpret_query(query).await?;

                debug!(?interpretation, "Query interpreted");

                Ok(SearchPlan::from_interpretation(
                    query,
                    &interpretation,
                    default_kind,
                ))
            }
            _ => Ok(SearchPlan::from_raw_query(query, default_kind)),
        }
    }
}
