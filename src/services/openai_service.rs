use playback_core::{ContentDetails, QueryInterpretation};
use reqwest::Client;
use tracing::debug;

const OPENAI_ENDPOINT: &str = "https://api.openai.com";

const QUERY_INSTRUCTION: &str = "The user will describe a movie or TV show they want to watch.\n\n\
Extract search terms for a movie database. Respond with a JSON object with fields: \
\"keywords\" (a short string of search keywords), \"genre\" (a single genre name or null) and \
\"mediaType\" (one of \"movie\", \"tv\" or \"any\"). Without any additional comments and descriptions.";

const DESCRIPTION_INSTRUCTION: &str = "The user will provide details of a movie or TV show.\n\n\
Write an engaging catalog description of two or three sentences. Do not reveal major plot twists. \
Respond with the description text only.";

pub(crate) struct OpenAIService {
    openai_api_key: String,
    model: String,
    client: Client,
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum OpenAIServiceError {
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("Completion response has no content")]
    EmptyResponse,
}

impl OpenAIService {
    pub(crate) fn create(openai_api_key: String, model: String) -> Result<Self, OpenAIServiceError> {
        let client = Client::builder().build()?;

        Ok(Self {
            openai_api_key,
            model,
            client,
        })
    }

    pub(crate) async fn interpret_query(
        &self,
        query: &str,
    ) -> Result<QueryInterpretation, OpenAIServiceError> {
        let content = self
            .complete(
                QUERY_INSTRUCTION,
                query,
                Some(serde_json::json!({ "type": "json_object" })),
            )
            .await?;

        Ok(serde_json::from_str(&content)?)
    }

    pub(crate) async fn write_description(
        &self,
        details: &ContentDetails,
    ) -> Result<String, OpenAIServiceError> {
        let mut lines = vec![format!("Title: {}", details.title)];

        if let Some(release_date) = &details.release_date {
            lines.push(format!("Released: {}", release_date));
        }
        if !details.genres.is_empty() {
            lines.push(format!("Genres: {}", details.genres.join(", ")));
        }
        if let Some(overview) = &details.overview {
            lines.push(format!("Overview: {}", overview));
        }

        let content = self
            .complete(DESCRIPTION_INSTRUCTION, &lines.join("\n"), None)
            .await?;

        Ok(content.trim().to_string())
    }

    async fn complete(
        &self,
        instruction: &str,
        user_content: &str,
        response_format: Option<serde_json::Value>,
    ) -> Result<String, OpenAIServiceError> {
        let mut request = serde_json::json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": instruction},
                {"role": "user", "content": user_content}
            ]
        });

        if let Some(response_format) = response_format {
            request["response_format"] = response_format;
        }

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", OPENAI_ENDPOINT))
            .header("Authorization", format!("Bearer {}", self.openai_api_key))
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<serde_json::Value>()
            .await?;

        let response_content = response
            .get("choices")
            .and_then(|choices| choices.get(0))
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(|content| content.as_str())
            .filter(|content| !content.trim().is_empty())
            .ok_or(OpenAIServiceError::EmptyResponse)?;

        debug!(model = %self.model, "Completion received");

        Ok(response_content.to_string())
    }
}
