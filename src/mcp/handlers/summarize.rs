//! Handlers for the summarization MCP tools.

use std::sync::Arc;

use crate::{
    engine::{SummarizeError, try_summarize_text},
    mcp::format::summary_payload,
    service::{SummarizationService, VideoSummaryError},
    tools::{TextSummaryArgs, VideoSummaryArgs},
};
use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content, JsonObject},
};

use super::{parse_arguments, require_non_blank};

/// Handle `summarize_text_content`.
pub(crate) async fn handle_summarize_text(
    arguments: Option<JsonObject>,
) -> Result<CallToolResult, McpError> {
    let args: TextSummaryArgs = parse_arguments(arguments)?;
    require_non_blank("text_content", &args.text_content)?;

    let summary = try_summarize_text(&args.text_content, &args.summary_length)
        .map_err(map_summarize_error)?;
    tracing::info!(
        source_words = summary.source_words,
        selected = summary.selected_sentences,
        "MCP text summary completed"
    );
    Ok(CallToolResult::structured(summary_payload(
        &summary,
        &args.summary_length,
    )))
}

/// Handle `summarize_youtube_video`.
///
/// Unrecognized URLs are rejected as invalid parameters. Transcript failures are reported as a
/// tool-level error result so hosts can show the message to the user.
pub(crate) async fn handle_summarize_video(
    service: &Arc<SummarizationService>,
    arguments: Option<JsonObject>,
) -> Result<CallToolResult, McpError> {
    let args: VideoSummaryArgs = parse_arguments(arguments)?;
    require_non_blank("youtube_url", &args.youtube_url)?;

    match service
        .try_summarize_video(&args.youtube_url, &args.summary_length)
        .await
    {
        Ok(summary) => {
            let mut payload = summary_payload(&summary, &args.summary_length);
            payload["videoUrl"] = args.youtube_url.into();
            Ok(CallToolResult::structured(payload))
        }
        Err(VideoSummaryError::InvalidUrl) => Err(McpError::invalid_params(
            format!("Not a recognized YouTube URL: {}", args.youtube_url),
            None,
        )),
        Err(error) => {
            tracing::warn!(error = %error, "MCP video summary failed");
            Ok(CallToolResult::error(vec![Content::text(error.to_message())]))
        }
    }
}

fn map_summarize_error(error: SummarizeError) -> McpError {
    match error {
        SummarizeError::EmptyInput { .. } => McpError::invalid_params(error.to_message(), None),
        SummarizeError::IndexOutOfRange { .. } => {
            McpError::internal_error(error.to_message(), None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::ErrorCode;
    use serde_json::json;

    fn object(value: serde_json::Value) -> Option<JsonObject> {
        value.as_object().cloned()
    }

    #[tokio::test]
    async fn text_tool_returns_structured_summary() {
        let result = handle_summarize_text(object(json!({
            "text_content": "Rust is fast. Rust is safe.",
        })))
        .await
        .expect("tool result");
        let payload = result.structured_content.expect("structured payload");
        assert_eq!(payload["summary"], "Rust is fast. Rust is safe.");
        assert_eq!(payload["summaryLength"], "medium");
        assert_eq!(payload["targetWords"], 200);
    }

    #[tokio::test]
    async fn blank_text_is_invalid_params() {
        let error = handle_summarize_text(object(json!({ "text_content": "  \n " })))
            .await
            .expect_err("blank text");
        assert_eq!(error.code, ErrorCode::INVALID_PARAMS);
    }

    #[tokio::test]
    async fn unknown_fields_are_rejected() {
        let error = handle_summarize_text(object(json!({
            "text_content": "hello",
            "style": "bullets",
        })))
        .await
        .expect_err("unknown field");
        assert_eq!(error.code, ErrorCode::INVALID_PARAMS);
        assert!(error.message.contains("style"));
    }

    #[tokio::test]
    async fn missing_arguments_are_rejected() {
        let error = handle_summarize_text(None).await.expect_err("no arguments");
        assert_eq!(error.code, ErrorCode::INVALID_PARAMS);
        assert!(error.message.contains("text_content"));
    }
}
