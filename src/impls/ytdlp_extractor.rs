use crate::services::YtDlpService;
use async_trait::async_trait;
use playback_core::{ExtractedVideo, VideoExtractor, VideoExtractorError, VideoFormat};
use tracing::info;

#[async_trait]
impl VideoExtractor for YtDlpService {
    async fn extract_url(
        &self,
        page_url: &str,
        format: &str,
    ) -> Result<ExtractedVideo, VideoExtractorError> {
        let url = self.get_url(page_url, format).await?;

        info!(page_url, format, "Direct media URL extracted");

        Ok(ExtractedVideo {
            page_url: page_url.to_string(),
            format: format.to_string(),
            url,
        })
    }

    async fn list_formats(&self, page_url: &str) -> Result<Vec<VideoFormat>, VideoExtractorError> {
        Ok(self.get_formats(page_url).await?)
    }
}
