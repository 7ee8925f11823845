//! Summarization service shared by the HTTP and MCP surfaces.

use async_trait::async_trait;
use thiserror::Error;

use crate::{
    chat::{ChatClient, ChatError, ChatResultPart, GeminiChatClient, RoutedPart, route_parts},
    config::Config,
    engine::{self, SummarizeError, Summary},
    tools::{ToolInvocation, catalog},
    transcript::{TranscriptClient, TranscriptError, YouTubeTranscriptClient, extract_video_id},
};

/// Sentinel returned when a video reference cannot be resolved to an identifier.
pub const INVALID_VIDEO_URL: &str = "Error: Invalid YouTube URL";

/// Failures while summarizing a video.
#[derive(Debug, Error)]
pub enum VideoSummaryError {
    /// The reference matched no known video URL shape.
    #[error("Invalid YouTube URL")]
    InvalidUrl,
    /// The transcript could not be fetched.
    #[error(transparent)]
    Transcript(#[from] TranscriptError),
    /// The fetched transcript could not be summarized.
    #[error(transparent)]
    Summarize(#[from] SummarizeError),
}

impl VideoSummaryError {
    /// Sentinel string reported to string-based callers.
    pub fn to_message(&self) -> String {
        match self {
            Self::InvalidUrl => INVALID_VIDEO_URL.to_string(),
            Self::Transcript(error) => format!("Error summarizing video: {error}"),
            Self::Summarize(error) => error.to_message(),
        }
    }
}

/// Routes requests to the engine and its network collaborators.
///
/// The service owns the transcript client and the optional chat client; it holds no per-request
/// state, so one instance is shared by every surface through an `Arc`.
pub struct SummarizationService {
    transcripts: Box<dyn TranscriptClient>,
    chat: Option<Box<dyn ChatClient>>,
}

/// Abstraction over the summarization service used by external surfaces (HTTP, MCP).
#[async_trait]
pub trait SummarizationApi: Send + Sync {
    /// Summarize raw text; failures come back as `"Error: ..."` strings.
    fn summarize_text(&self, text_content: &str, summary_length: &str) -> String;

    /// Fetch and summarize a video transcript; failures come back as `"Error..."` strings.
    async fn summarize_video(&self, youtube_url: &str, summary_length: &str) -> String;

    /// Route a free-form prompt through the chat model and run the tools it selects.
    async fn chat(&self, prompt: &str) -> Result<Vec<ChatResultPart>, ChatError>;
}

impl SummarizationService {
    /// Build the service with clients derived from configuration.
    pub fn from_config(config: &Config) -> Self {
        let chat = GeminiChatClient::from_config(config)
            .map(|client| Box::new(client) as Box<dyn ChatClient>);
        if chat.is_none() {
            tracing::warn!("GOOGLE_GEMINI_KEY not set; chat routing disabled");
        }
        Self::with_clients(Box::new(YouTubeTranscriptClient::from_config(config)), chat)
    }

    /// Build the service around explicit clients.
    pub fn with_clients(
        transcripts: Box<dyn TranscriptClient>,
        chat: Option<Box<dyn ChatClient>>,
    ) -> Self {
        Self { transcripts, chat }
    }

    /// Whether a chat provider is configured.
    pub fn chat_enabled(&self) -> bool {
        self.chat.is_some()
    }

    /// Fetch a video transcript and summarize it, keeping the failure kind.
    pub async fn try_summarize_video(
        &self,
        youtube_url: &str,
        summary_length: &str,
    ) -> Result<Summary, VideoSummaryError> {
        let Some(video_id) = extract_video_id(youtube_url) else {
            tracing::info!(youtube_url, "Rejected unrecognized video URL");
            return Err(VideoSummaryError::InvalidUrl);
        };

        let transcript = self
            .transcripts
            .fetch_transcript(&video_id)
            .await
            .inspect_err(|error| tracing::warn!(video_id, error = %error, "Transcript fetch failed"))?;
        Ok(engine::try_summarize_transcript(&transcript, summary_length)?)
    }

    /// Execute a decoded tool invocation.
    pub async fn run(&self, invocation: &ToolInvocation) -> String {
        match invocation {
            ToolInvocation::SummarizeText(args) => {
                SummarizationApi::summarize_text(self, &args.text_content, &args.summary_length)
            }
            ToolInvocation::SummarizeVideo(args) => {
                self.summarize_video(&args.youtube_url, &args.summary_length)
                    .await
            }
        }
    }
}

#[async_trait]
impl SummarizationApi for SummarizationService {
    fn summarize_text(&self, text_content: &str, summary_length: &str) -> String {
        engine::summarize_text(text_content, summary_length)
    }

    async fn summarize_video(&self, youtube_url: &str, summary_length: &str) -> String {
        self.try_summarize_video(youtube_url, summary_length)
            .await
            .map_or_else(|error| error.to_message(), |summary| summary.text)
    }

    async fn chat(&self, prompt: &str) -> Result<Vec<ChatResultPart>, ChatError> {
        let client = self.chat.as_ref().ok_or(ChatError::Unavailable)?;
        let parts = client.generate(prompt, &catalog()).await?;

        let mut results = Vec::new();
        for routed in route_parts(prompt, parts) {
            let part = match routed {
                RoutedPart::Ready(part) => part,
                RoutedPart::Invoke(invocation) => ChatResultPart::FunctionResult {
                    function: invocation.function_name().to_string(),
                    args: invocation.arguments(),
                    result: self.run(&invocation).await,
                },
            };
            results.push(part);
        }
        tracing::info!(parts = results.len(), "Chat request routed");
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        chat::ModelPart,
        tools::{SUMMARIZE_TEXT, SUMMARIZE_VIDEO, ToolDescriptor},
        transcript::TranscriptError,
    };
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    struct StubTranscripts {
        transcript: Result<String, String>,
        requested: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl TranscriptClient for StubTranscripts {
        async fn fetch_transcript(&self, video_id: &str) -> Result<String, TranscriptError> {
            self.requested
                .lock()
                .expect("lock")
                .push(video_id.to_string());
            self.transcript
                .clone()
                .map_err(TranscriptError::RequestFailed)
        }
    }

    struct StubChat {
        parts: Vec<ModelPart>,
    }

    #[async_trait]
    impl ChatClient for StubChat {
        async fn generate(
            &self,
            _prompt: &str,
            tools: &[ToolDescriptor],
        ) -> Result<Vec<ModelPart>, ChatError> {
            assert_eq!(tools.len(), 2);
            Ok(self.parts.clone())
        }
    }

    fn service(
        transcript: Result<&str, &str>,
        chat: Option<Vec<ModelPart>>,
    ) -> (SummarizationService, Arc<Mutex<Vec<String>>>) {
        let requested = Arc::new(Mutex::new(Vec::new()));
        let transcripts = StubTranscripts {
            transcript: transcript.map(str::to_string).map_err(str::to_string),
            requested: requested.clone(),
        };
        let chat = chat.map(|parts| Box::new(StubChat { parts }) as Box<dyn ChatClient>);
        (
            SummarizationService::with_clients(Box::new(transcripts), chat),
            requested,
        )
    }

    #[tokio::test]
    async fn invalid_video_url_is_rejected_before_fetching() {
        let (service, requested) = service(Ok("unused"), None);
        let summary = service.summarize_video("https://example.com/v", "short").await;
        assert_eq!(summary, INVALID_VIDEO_URL);
        assert!(requested.lock().expect("lock").is_empty());
    }

    #[tokio::test]
    async fn video_summary_uses_fetched_transcript() {
        let (service, requested) = service(Ok("first bit. second bit"), None);
        let summary = service
            .summarize_video("https://www.youtube.com/watch?v=abc123&t=5", "medium")
            .await;
        assert_eq!(summary, "first bit. second bit");
        assert_eq!(*requested.lock().expect("lock"), vec!["abc123".to_string()]);
    }

    #[tokio::test]
    async fn fetch_failure_becomes_sentinel() {
        let (service, _) = service(Err("timeout"), None);
        let summary = service.summarize_video("https://youtu.be/abc", "medium").await;
        assert_eq!(
            summary,
            "Error summarizing video: failed to fetch transcript: timeout"
        );
    }

    #[tokio::test]
    async fn empty_transcript_keeps_failure_kind() {
        let (service, _) = service(Ok("   "), None);
        let error = service
            .try_summarize_video("https://youtu.be/abc", "short")
            .await
            .expect_err("empty transcript");
        assert!(matches!(error, VideoSummaryError::Summarize(_)));
        assert_eq!(error.to_message(), "Error: No transcript content provided");
    }

    #[tokio::test]
    async fn chat_without_provider_is_unavailable() {
        let (service, _) = service(Ok(""), None);
        assert!(!service.chat_enabled());
        let error = service.chat("hello").await.expect_err("unavailable");
        assert!(matches!(error, ChatError::Unavailable));
    }

    #[tokio::test]
    async fn chat_runs_model_selected_tools() {
        let (service, _) = service(
            Ok("a. b. c"),
            Some(vec![
                ModelPart::Text("Summarizing.".into()),
                ModelPart::FunctionCall {
                    name: SUMMARIZE_VIDEO.into(),
                    args: json!({ "youtube_url": "https://youtu.be/xyz" }),
                },
            ]),
        );
        let parts = service.chat("summarize https://youtu.be/xyz").await.expect("parts");
        assert_eq!(
            parts,
            vec![
                ChatResultPart::Text {
                    content: "Summarizing.".into()
                },
                ChatResultPart::FunctionResult {
                    function: SUMMARIZE_VIDEO.into(),
                    args: json!({ "youtube_url": "https://youtu.be/xyz", "summary_length": "medium" }),
                    result: "a. b. c".into(),
                },
            ]
        );
    }

    #[tokio::test]
    async fn chat_falls_back_to_text_summary() {
        let (service, _) = service(Ok(""), Some(vec![]));
        let parts = service.chat("Short prompt to summarize.").await.expect("parts");
        assert_eq!(
            parts,
            vec![ChatResultPart::FunctionResult {
                function: SUMMARIZE_TEXT.into(),
                args: json!({ "text_content": "Short prompt to summarize.", "summary_length": "medium" }),
                result: "Short prompt to summarize.".into(),
            }]
        );
    }
}
