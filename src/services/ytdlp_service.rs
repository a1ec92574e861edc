use playback_core::{VideoExtractorError, VideoFormat};
use serde::Deserialize;
use std::io::ErrorKind;
use tokio::process::Command;
use tracing::{debug, warn};

#[derive(Debug, thiserror::Error)]
pub(crate) enum YtDlpError {
    #[error("yt-dlp binary not found at {0}")]
    ToolNotFound(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("yt-dlp exited with an error: {0}")]
    Failed(String),
    #[error("yt-dlp printed no media URL")]
    NoUrl,
}

impl From<YtDlpError> for VideoExtractorError {
    fn from(error: YtDlpError) -> Self {
        match error {
            YtDlpError::ToolNotFound(path) => VideoExtractorError::ToolNotFound(path),
            YtDlpError::Failed(stderr) => classify_stderr(&stderr),
            other => VideoExtractorError::Failed(other.to_string()),
        }
    }
}

pub(crate) fn classify_stderr(stderr: &str) -> VideoExtractorError {
    let message = stderr.trim().to_string();
    let lowercase = message.to_lowercase();

    if lowercase.contains("unsupported url") {
        return VideoExtractorError::UnsupportedUrl(message);
    }

    if lowercase.contains("private video") {
        return VideoExtractorError::PrivateVideo;
    }

    if lowercase.contains("not available in your country")
        || lowercase.contains("geo restriction")
        || lowercase.contains("geo-restricted")
    {
        return VideoExtractorError::GeoRestricted;
    }

    if lowercase.contains("video unavailable") || lowercase.contains("this video is unavailable") {
        return VideoExtractorError::VideoUnavailable;
    }

    if lowercase.contains("command not found") || lowercase.contains("no such file") {
        return VideoExtractorError::ToolNotFound(message);
    }

    VideoExtractorError::Failed(message)
}

#[derive(Deserialize)]
struct RawInfo {
    #[serde(default)]
    formats: Vec<RawFormat>,
}

#[derive(Deserialize)]
struct RawFormat {
    format_id: String,
    #[serde(default)]
    ext: Option<String>,
    #[serde(default)]
    resolution: Option<String>,
    #[serde(default)]
    format_note: Option<String>,
    #[serde(default)]
    url: Option<String>,
}

pub(crate) fn parse_formats(raw_json: &str) -> Result<Vec<VideoFormat>, serde_json::Error> {
    let info: RawInfo = serde_json::from_str(raw_json)?;

    Ok(info
        .formats
        .into_iter()
        .map(|format| VideoFormat {
            format_id: format.format_id,
            extension: format.ext.unwrap_or_default(),
            resolution: format.resolution,
            note: format.format_note,
            url: format.url,
        })
        .collect())
}

pub(crate) struct YtDlpService {
    ytdlp_path: String,
}

impl YtDlpService {
    pub(crate) fn new(ytdlp_path: String) -> Self {
        Self { ytdlp_path }
    }

    pub(crate) async fn get_url(&self, page_url: &str, format: &str) -> Result<String, YtDlpError> {
        let stdout = self
            .run(&[
                "--no-playlist",
                "--no-warnings",
                "-f",
                format,
                "-g",
                "--",
                page_url,
            ])
            .await?;

        stdout
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .map(ToString::to_string)
            .ok_or(YtDlpError::NoUrl)
    }

    pub(crate) async fn get_formats(&self, page_url: &str) -> Result<Vec<VideoFormat>, YtDlpError> {
        let stdout = self
            .run(&["--no-playlist", "--no-warnings", "-J", "--", page_url])
            .await?;

        Ok(parse_formats(&stdout)?)
    }

    async fn run(&self, args: &[&str]) -> Result<String, YtDlpError> {
        debug!(path = %self.ytdlp_path, ?args, "Running yt-dlp");

        let output = match Command::new(&self.ytdlp_path).args(args).output().await {
            Ok(output) => output,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                return Err(YtDlpError::ToolNotFound(self.ytdlp_path.clone()));
            }
            Err(error) => return Err(error.into()),
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            warn!(status = ?output.status, stderr = %stderr.trim(), "yt-dlp failed");
            return Err(YtDlpError::Failed(stderr));
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{classify_stderr, parse_formats, YtDlpError, YtDlpService};
    use playback_core::VideoExtractorError;

    #[test]
    fn should_classify_known_failures() {
        assert!(matches!(
            classify_stderr("ERROR: Unsupported URL: https://example.com/"),
            VideoExtractorError::UnsupportedUrl(_)
        ));
        assert!(matches!(
            classify_stderr("ERROR: [youtube] abc: Video unavailable"),
            VideoExtractorError::VideoUnavailable
        ));
        assert!(matches!(
            classify_stderr("ERROR: [youtube] abc: Private video. Sign in if you've been granted access"),
            VideoExtractorError::PrivateVideo
        ));
        assert!(matches!(
            classify_stderr("ERROR: The uploader has not made this video available in your country"),
            VideoExtractorError::GeoRestricted
        ));
    }

    #[test]
    fn should_keep_message_of_unknown_failures() {
        match classify_stderr("ERROR: something odd happened\n") {
            VideoExtractorError::Failed(message) => {
                assert_eq!("ERROR: something odd happened", message)
            }
            other => panic!("Unexpected classification: {:?}", other),
        }
    }

    #[test]
    fn should_parse_formats_from_info_json() {
        let raw = r#"{
            "id": "abc",
            "title": "Trailer",
            "formats": [
                {"format_id": "140", "ext": "m4a", "resolution": "audio only", "format_note": "medium", "url": "https://cdn/a"},
                {"format_id": "22", "ext": "mp4", "resolution": "1280x720", "url": "https://cdn/v"},
                {"format_id": "sb0"}
            ]
        }"#;

        let formats = parse_formats(raw).unwrap();

        assert_eq!(3, formats.len());
        assert_eq!("140", formats[0].format_id);
        assert_eq!("m4a", formats[0].extension);
        assert_eq!(Some("medium".to_string()), formats[0].note);
        assert_eq!(Some("1280x720".to_string()), formats[1].resolution);
        assert_eq!("", formats[2].extension);
        assert_eq!(None, formats[2].url);
    }

    #[actix_rt::test]
    async fn should_report_missing_binary() {
        let service = YtDlpService::new("/nonexistent/yt-dlp-binary".to_string());

        let result = service.get_url("https://example.com/watch", "best").await;

        assert!(matches!(result, Err(YtDlpError::ToolNotFound(_))));
        assert!(matches!(
            VideoExtractorError::from(result.unwrap_err()),
            VideoExtractorError::ToolNotFound(_)
        ));
    }
}
