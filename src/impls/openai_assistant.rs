use crate::services::OpenAIService;
use async_trait::async_trait;
use playback_core::{ContentAssistant, ContentAssistantError, ContentDetails, QueryInterpretation};

#[async_trait]
impl ContentAssistant for OpenAIService {
    async fn interpret_query(
        &self,
        query: &str,
    ) -> Result<QueryInterpretation, ContentAssistantError> {
        OpenAIService::interpret_query(self, query)
            .await
            .map_err(|error| ContentAssistantError(Box::new(error)))
    }

    async fn describe(&self, details: &ContentDetails) -> Result<String, ContentAssistantError> {
        self.write_description(details)
            .await
            .map_err(|error| ContentAssistantError(Box::new(error)))
    }
}
