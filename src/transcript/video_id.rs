//! Video identifier extraction from YouTube URLs.

use regex::Regex;
use std::sync::OnceLock;

fn id_patterns() -> &'static [Regex; 2] {
    static PATTERNS: OnceLock<[Regex; 2]> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/embed/)([^&\n?#]+)")
                .expect("valid video id pattern"),
            Regex::new(r"youtube\.com/watch\?.*v=([^&\n?#]+)").expect("valid video id pattern"),
        ]
    })
}

fn url_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(https?://)?(www\.)?(youtube\.com/watch\?v=|youtu\.be/)[\w-]+")
            .expect("valid video url pattern")
    })
}

/// Extract the video identifier from a watch, short, or embed URL.
pub fn extract_video_id(url: &str) -> Option<String> {
    id_patterns().iter().find_map(|pattern| {
        pattern
            .captures(url)
            .and_then(|captures| captures.get(1))
            .map(|id| id.as_str().to_string())
    })
}

/// Find the first YouTube URL mentioned in free-form text.
pub fn find_video_url(text: &str) -> Option<&str> {
    url_pattern().find(text).map(|found| found.as_str())
}
