//! Transcript collaborator: resolve a video reference and fetch its caption text.
//!
//! The engine never performs I/O; this module owns the network side. [`extract_video_id`]
//! turns a URL into an identifier, and a [`TranscriptClient`] turns the identifier into a single
//! string of caption entries joined by spaces, ready for transcript-mode summarization.

mod video_id;
mod youtube;

use async_trait::async_trait;
use thiserror::Error;

pub use video_id::{extract_video_id, find_video_url};
pub use youtube::YouTubeTranscriptClient;

/// Errors raised while fetching a transcript.
#[derive(Debug, Error)]
pub enum TranscriptError {
    /// Transport failure or non-success status from the video host.
    #[error("failed to fetch transcript: {0}")]
    RequestFailed(String),
    /// The video exposes no caption tracks.
    #[error("no transcript available for video {video_id}")]
    Unavailable {
        /// Identifier of the video that was requested.
        video_id: String,
    },
    /// The host responded with content that could not be interpreted.
    #[error("malformed transcript response: {0}")]
    InvalidResponse(String),
}

/// Interface implemented by transcript sources.
#[async_trait]
pub trait TranscriptClient: Send + Sync {
    /// Fetch the caption text for `video_id`, entries joined by single spaces.
    async fn fetch_transcript(&self, video_id: &str) -> Result<String, TranscriptError>;
}
