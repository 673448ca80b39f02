// =============================================================================
// IgniteX Web - Video Source Resolution
// =============================================================================
// Table of Contents:
// 1. Video Source
// 2. Drive Link Handling
// =============================================================================

use once_cell::sync::Lazy;
use regex::Regex;

/// Host marker identifying cloud-drive links.
pub const DRIVE_HOST: &str = "drive.google.com";

/// First run of at least 25 URL-safe characters; drive file ids look like this.
static DRIVE_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[-A-Za-z0-9_]{25,}").expect("valid drive id regex"));

// -----------------------------------------------------------------------------
// 1. Video Source
// -----------------------------------------------------------------------------

/// How a revealed video should be played.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VideoSource {
    /// Drive preview URL built from the extracted file id.
    DriveEmbed(String),
    /// Drive link whose id could not be extracted; framed as-is.
    DriveRaw(String),
    /// Direct playable resource, used unmodified.
    Direct(String),
}

impl VideoSource {
    /// The URL handed to the player element.
    pub fn url(&self) -> &str {
        match self {
            VideoSource::DriveEmbed(url) | VideoSource::DriveRaw(url) | VideoSource::Direct(url) => url,
        }
    }

    /// Whether the source is played inside an embedded frame.
    pub fn is_framed(&self) -> bool {
        !matches!(self, VideoSource::Direct(_))
    }
}

/// Decide how to play `source`.
pub fn resolve_video_source(source: &str) -> VideoSource {
    if !is_drive_url(source) {
        return VideoSource::Direct(source.to_string());
    }

    match drive_file_id(source) {
        Some(id) => VideoSource::DriveEmbed(drive_preview_url(id)),
        None => {
            log::debug!("No drive file id in {}, using link as-is", source);
            VideoSource::DriveRaw(source.to_string())
        }
    }
}

// -----------------------------------------------------------------------------
// 2. Drive Link Handling
// -----------------------------------------------------------------------------

/// Check whether a URL points at the cloud drive.
pub fn is_drive_url(url: &str) -> bool {
    url.contains(DRIVE_HOST)
}

/// Extract the embed identifier from a drive URL.
pub fn drive_file_id(url: &str) -> Option<&str> {
    DRIVE_ID_RE.find(url).map(|m| m.as_str())
}

/// Build the embeddable preview URL for a drive file id.
pub fn drive_preview_url(id: &str) -> String {
    format!("https://{}/file/d/{}/preview", DRIVE_HOST, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drive_link_becomes_preview_embed() {
        let source = resolve_video_source(
            "https://drive.google.com/file/d/1YOYXxvB2pwuNAAjB394pA7bmXoBHu_3G/view?usp=drivesdk",
        );
        assert_eq!(
            source,
            VideoSource::DriveEmbed(
                "https://drive.google.com/file/d/1YOYXxvB2pwuNAAjB394pA7bmXoBHu_3G/preview".to_string()
            )
        );
        assert!(source.url().ends_with("/file/d/1YOYXxvB2pwuNAAjB394pA7bmXoBHu_3G/preview"));
        assert!(source.is_framed());
    }

    #[test]
    fn test_drive_id_extraction_is_deterministic() {
        let url = "https://drive.google.com/open?id=1DwuUaEIe9cCbfVfZlXYTaX8udaHvUfpG&usp=sharing";
        assert_eq!(drive_file_id(url), Some("1DwuUaEIe9cCbfVfZlXYTaX8udaHvUfpG"));
        assert_eq!(resolve_video_source(url), resolve_video_source(url));
    }

    #[test]
    fn test_drive_id_requires_25_chars() {
        // 24-character run: too short to be a file id
        let short = "https://drive.google.com/file/d/abcdefghijklmnopqrstuvwx/view";
        assert_eq!(drive_file_id(short), None);
        assert_eq!(resolve_video_source(short), VideoSource::DriveRaw(short.to_string()));

        let exact = "https://drive.google.com/file/d/abcdefghijklmnopqrstuvwxy/view";
        assert_eq!(drive_file_id(exact), Some("abcdefghijklmnopqrstuvwxy"));
    }

    #[test]
    fn test_malformed_drive_link_passes_through() {
        let url = "https://drive.google.com/file/d/short/view";
        let source = resolve_video_source(url);
        assert_eq!(source.url(), url);
        assert!(source.is_framed());
    }

    #[test]
    fn test_direct_source_is_unmodified() {
        let url = "/videos/pitch-night_2024-final-cut-version.mp4";
        let source = resolve_video_source(url);
        assert_eq!(source, VideoSource::Direct(url.to_string()));
        assert!(!source.is_framed());
    }
}
