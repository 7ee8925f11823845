//! HTTP surface for the summarization service.
//!
//! This module exposes a compact Axum router with the following endpoints:
//!
//! - `GET /` – Service banner listing the summarization endpoints.
//! - `POST /chat` – Route a free-form prompt through the chat model; returns typed result parts.
//! - `POST /summarize-text` – Summarize raw text at a requested length.
//! - `POST /summarize-youtube` – Fetch a video transcript and summarize it.
//! - `GET /health` – Liveness probe.
//! - `GET /commands` – Machine-readable command catalog for quick discovery by tools/hosts.
//!
//! Summarization endpoints always answer `200`; failures travel inside the `summary` field as
//! `"Error..."` strings so existing clients keep working. Only `/chat` reports failures through
//! the status code.

use crate::chat::{ChatError, ChatResultPart};
use crate::engine::split::source_words;
use crate::service::SummarizationApi;
use crate::tools::default_length;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

const SERVICE_NAME: &str = "AI Summarization API";

/// Build the HTTP router exposing the summarization API surface.
pub fn create_router<S>(service: Arc<S>) -> Router
where
    S: SummarizationApi + 'static,
{
    Router::new()
        .route("/", get(root))
        .route("/chat", post(chat::<S>))
        .route("/summarize-text", post(summarize_text::<S>))
        .route("/summarize-youtube", post(summarize_youtube::<S>))
        .route("/health", get(health))
        .route("/commands", get(get_commands))
        .with_state(service)
}

#[derive(Serialize)]
struct RootResponse {
    message: &'static str,
    endpoints: [&'static str; 3],
}

async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: SERVICE_NAME,
        endpoints: ["/chat", "/summarize-text", "/summarize-youtube"],
    })
}

/// Request body for `POST /chat`.
#[derive(Deserialize)]
struct ChatRequest {
    prompt: String,
}

/// Response body for `POST /chat`.
#[derive(Serialize)]
struct ChatResponse {
    response: Vec<ChatResultPart>,
}

/// Let the chat model pick a summarization tool for the prompt, then run it.
async fn chat<S>(
    State(service): State<Arc<S>>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError>
where
    S: SummarizationApi,
{
    let response = service.chat(&request.prompt).await?;
    Ok(Json(ChatResponse { response }))
}

/// Request body for `POST /summarize-text`.
#[derive(Deserialize)]
struct TextSummaryRequest {
    /// Raw text to summarize.
    text_content: String,
    /// Length preset or word count; defaults to `medium`.
    #[serde(default = "default_length")]
    summary_length: String,
}

/// Response body for `POST /summarize-text`.
#[derive(Serialize)]
struct TextSummaryResponse {
    summary: String,
    /// Whitespace-separated words in the raw input.
    input_length: usize,
    summary_length: String,
}

async fn summarize_text<S>(
    State(service): State<Arc<S>>,
    Json(request): Json<TextSummaryRequest>,
) -> Json<TextSummaryResponse>
where
    S: SummarizationApi,
{
    let input_length = source_words(&request.text_content).len();
    let summary = service.summarize_text(&request.text_content, &request.summary_length);
    tracing::info!(
        input_length,
        summary_length = request.summary_length,
        "Text summary request completed"
    );
    Json(TextSummaryResponse {
        summary,
        input_length,
        summary_length: request.summary_length,
    })
}

/// Request body for `POST /summarize-youtube`.
#[derive(Deserialize)]
struct VideoSummaryRequest {
    youtube_url: String,
    #[serde(default = "default_length")]
    summary_length: String,
}

/// Response body for `POST /summarize-youtube`.
#[derive(Serialize)]
struct VideoSummaryResponse {
    summary: String,
    video_url: String,
    summary_length: String,
}

async fn summarize_youtube<S>(
    State(service): State<Arc<S>>,
    Json(request): Json<VideoSummaryRequest>,
) -> Json<VideoSummaryResponse>
where
    S: SummarizationApi,
{
    let summary = service
        .summarize_video(&request.youtube_url, &request.summary_length)
        .await;
    tracing::info!(
        video_url = request.youtube_url,
        summary_length = request.summary_length,
        "Video summary request completed"
    );
    Json(VideoSummaryResponse {
        summary,
        video_url: request.youtube_url,
        summary_length: request.summary_length,
    })
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    service: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
    })
}

/// Descriptor for a single command in the discovery catalog.
#[derive(Serialize)]
struct CommandDescriptor {
    name: &'static str,
    method: &'static str,
    path: &'static str,
    description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    request_example: Option<serde_json::Value>,
}

/// Response body for `GET /commands`.
#[derive(Serialize)]
struct CommandsResponse {
    commands: Vec<CommandDescriptor>,
}

/// Enumerate supported HTTP commands for discovery/UX in hosts and tools.
async fn get_commands() -> Json<CommandsResponse> {
    Json(CommandsResponse {
        commands: vec![
            CommandDescriptor {
                name: "chat",
                method: "POST",
                path: "/chat",
                description: "Let the chat model choose a summarization tool for a free-form prompt. Response returns { \"response\": [parts] } where each part carries a \"type\" tag.",
                request_example: Some(json!({
                    "prompt": "Summarize https://youtu.be/dQw4w9WgXcQ"
                })),
            },
            CommandDescriptor {
                name: "summarize_text",
                method: "POST",
                path: "/summarize-text",
                description: "Extractive summary of raw text. summary_length is short, medium, long, or a word count such as \"150 words\".",
                request_example: Some(json!({
                    "text_content": "Text to summarize.",
                    "summary_length": "medium"
                })),
            },
            CommandDescriptor {
                name: "summarize_youtube",
                method: "POST",
                path: "/summarize-youtube",
                description: "Fetch a video transcript and return an evenly sampled summary.",
                request_example: Some(json!({
                    "youtube_url": "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
                    "summary_length": "short"
                })),
            },
            CommandDescriptor {
                name: "health",
                method: "GET",
                path: "/health",
                description: "Liveness probe.",
                request_example: None,
            },
        ],
    })
}

struct AppError(ChatError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let detail = match &self.0 {
            ChatError::Unavailable => self.0.to_string(),
            other => {
                tracing::error!(error = %other, "Chat request failed");
                format!("Error processing chat request: {other}")
            }
        };
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": detail })),
        )
            .into_response()
    }
}

impl From<ChatError> for AppError {
    fn from(inner: ChatError) -> Self {
        Self(inner)
    }
}

#[cfg(test)]
mod tests {
    use super::{create_router, get_commands};
    use crate::chat::{ChatError, ChatResultPart};
    use crate::service::SummarizationApi;
use crate::tools::default_length;
    use async_trait::async_trait;
    use axum::{
        body::{Body, to_bytes},
        http::{Method, Request, StatusCode},
    };
    use serde_json::{Value, json};
    use std::sync::Arc;
    use tokio::sync::Mutex;
    use tower::ServiceExt;

    #[derive(Default)]
    struct StubSummarizationService {
        video_calls: Mutex<Vec<(String, String)>>,
        chat_enabled: bool,
    }

    #[async_trait]
    impl SummarizationApi for StubSummarizationService {
        fn summarize_text(&self, text_content: &str, summary_length: &str) -> String {
            format!("{summary_length}:{}", text_content.len())
        }

        async fn summarize_video(&self, youtube_url: &str, summary_length: &str) -> String {
            self.video_calls
                .lock()
                .await
                .push((youtube_url.to_string(), summary_length.to_string()));
            "video summary".into()
        }

        async fn chat(&self, prompt: &str) -> Result<Vec<ChatResultPart>, ChatError> {
            if !self.chat_enabled {
                return Err(ChatError::Unavailable);
            }
            if prompt == "boom" {
                return Err(ChatError::RequestFailed("upstream 503".into()));
            }
            Ok(vec![ChatResultPart::Text {
                content: prompt.to_uppercase(),
            }])
        }
    }

    async fn call(
        service: Arc<StubSummarizationService>,
        method: Method,
        uri: &str,
        payload: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match payload {
            Some(payload) => {
                builder = builder.header("content-type", "application/json");
                Body::from(payload.to_string())
            }
            None => Body::empty(),
        };
        let response = create_router(service)
            .oneshot(builder.body(body).expect("request"))
            .await
            .expect("router response");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        (status, serde_json::from_slice(&bytes).expect("json body"))
    }

    #[tokio::test]
    async fn commands_catalog_lists_summarization_endpoints() {
        let commands = get_commands().await.0.commands;
        let text = commands
            .iter()
            .find(|cmd| cmd.name == "summarize_text")
            .expect("summarize_text command present");
        assert_eq!(text.method, "POST");
        assert_eq!(text.path, "/summarize-text");
        assert!(commands.iter().any(|cmd| cmd.path == "/chat"));
    }

    #[tokio::test]
    async fn summarize_text_reports_raw_word_count_and_default_length() {
        let service = Arc::new(StubSummarizationService::default());
        let (status, body) = call(
            service,
            Method::POST,
            "/summarize-text",
            Some(json!({ "text_content": "  one two\n three  " })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["input_length"], 3);
        assert_eq!(body["summary_length"], "medium");
        assert_eq!(body["summary"], "medium:18");
    }

    #[tokio::test]
    async fn summarize_youtube_echoes_request() {
        let service = Arc::new(StubSummarizationService::default());
        let (status, body) = call(
            service.clone(),
            Method::POST,
            "/summarize-youtube",
            Some(json!({ "youtube_url": "https://youtu.be/abc", "summary_length": "short" })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "summary": "video summary",
                "video_url": "https://youtu.be/abc",
                "summary_length": "short"
            })
        );
        assert_eq!(
            *service.video_calls.lock().await,
            vec![("https://youtu.be/abc".to_string(), "short".to_string())]
        );
    }

    #[tokio::test]
    async fn chat_returns_tagged_parts() {
        let service = Arc::new(StubSummarizationService {
            chat_enabled: true,
            ..Default::default()
        });
        let (status, body) = call(
            service,
            Method::POST,
            "/chat",
            Some(json!({ "prompt": "hello" })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "response": [{ "type": "text", "content": "HELLO" }] })
        );
    }

    #[tokio::test]
    async fn chat_errors_map_to_server_error() {
        let disabled = Arc::new(StubSummarizationService::default());
        let (status, body) = call(
            disabled,
            Method::POST,
            "/chat",
            Some(json!({ "prompt": "hello" })),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["detail"], "Gemini client not available");

        let failing = Arc::new(StubSummarizationService {
            chat_enabled: true,
            ..Default::default()
        });
        let (status, body) = call(
            failing,
            Method::POST,
            "/chat",
            Some(json!({ "prompt": "boom" })),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body["detail"],
            "Error processing chat request: Chat request failed: upstream 503"
        );
    }

    #[tokio::test]
    async fn root_and_health_describe_service() {
        let service = Arc::new(StubSummarizationService::default());
        let (_, root) = call(service.clone(), Method::GET, "/", None).await;
        assert_eq!(root["message"], "AI Summarization API");
        assert_eq!(root["endpoints"][0], "/chat");

        let (status, health) = call(service, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            health,
            json!({ "status": "healthy", "service": "AI Summarization API" })
        );
    }
}
