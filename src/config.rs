use serde::Deserialize;

fn default_bind_address() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_shutdown_timeout() -> u64 {
    30u64
}

fn default_session_ttl() -> u64 {
    3600u64
}

fn default_openai_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_ytdlp_path() -> String {
    "yt-dlp".to_string()
}

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct TmdbCredentials {
    #[serde(rename = "tmdb_api_key")]
    pub(crate) api_key: String,
}

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct OpenAIConfig {
    #[serde(rename = "openai_api_key")]
    pub(crate) api_key: Option<String>,
    #[serde(rename = "openai_model", default = "default_openai_model")]
    pub(crate) model: String,
}

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct Config {
    #[serde(default = "default_bind_address")]
    pub(crate) bind_address: String,
    #[serde(default = "default_shutdown_timeout")]
    pub(crate) shutdown_timeout: u64,
    #[serde(default = "default_session_ttl")]
    pub(crate) session_ttl: u64,
    #[serde(flatten)]
    pub(crate) tmdb: TmdbCredentials,
    #[serde(flatten)]
    pub(crate) openai: OpenAIConfig,
    #[serde(default = "default_ytdlp_path")]
    pub(crate) ytdlp_path: String,
    pub(crate) sources_file: Option<String>,
}

impl Config {
    pub(crate) fn from_env() -> Self {
        match envy::from_env::<Self>() {
            Ok(config) => config,
            Err(error) => panic!("Missing environment variable: {:#?}", error),
        }
    }
}
