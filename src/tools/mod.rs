//! Tool catalog shared by the conversational router and the MCP server.
//!
//! Both surfaces expose the same two functions under the same names and parameter schemas, and
//! both decode arguments into [`TextSummaryArgs`] or [`VideoSummaryArgs`]. The router wraps them
//! in a [`ToolInvocation`]; the MCP handlers dispatch on the tool name directly.

pub(crate) mod schemas;

use serde::Deserialize;
use serde_json::{Map, Value, json};
use thiserror::Error;

use crate::engine::DEFAULT_LENGTH;

/// Tool name for raw-text summarization.
pub const SUMMARIZE_TEXT: &str = "summarize_text_content";
/// Tool name for video transcript summarization.
pub const SUMMARIZE_VIDEO: &str = "summarize_youtube_video";

/// Static description of one tool.
#[derive(Debug, Clone)]
pub struct ToolDescriptor {
    /// Function name used by callers.
    pub name: &'static str,
    /// Short human-readable title.
    pub title: &'static str,
    /// What the tool does, phrased for a model choosing between tools.
    pub description: &'static str,
    /// JSON schema of the accepted arguments.
    pub parameters: Map<String, Value>,
}

/// Describe every tool, video first.
pub fn catalog() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor {
            name: SUMMARIZE_VIDEO,
            title: "Summarize YouTube Video",
            description: "Summarizes a YouTube video by extracting and analyzing its content.",
            parameters: schemas::video_parameters_schema(),
        },
        ToolDescriptor {
            name: SUMMARIZE_TEXT,
            title: "Summarize Text",
            description: "Summarizes provided text content with specified length.",
            parameters: schemas::text_parameters_schema(),
        },
    ]
}

/// Length specifier applied when a caller omits `summary_length`.
pub(crate) fn default_length() -> String {
    DEFAULT_LENGTH.to_string()
}

/// Arguments for [`SUMMARIZE_TEXT`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TextSummaryArgs {
    /// Text to summarize.
    pub text_content: String,
    /// Length specifier; defaults to `medium`.
    #[serde(default = "default_length")]
    pub summary_length: String,
}

/// Arguments for [`SUMMARIZE_VIDEO`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VideoSummaryArgs {
    /// Video URL to resolve and summarize.
    pub youtube_url: String,
    /// Length specifier; defaults to `medium`.
    #[serde(default = "default_length")]
    pub summary_length: String,
}

/// A decoded call to one of the summarization tools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolInvocation {
    /// Summarize raw text.
    SummarizeText(TextSummaryArgs),
    /// Summarize a video transcript.
    SummarizeVideo(VideoSummaryArgs),
}

/// Reasons a function call cannot be turned into a [`ToolInvocation`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ToolCallError {
    /// The call named a function outside the catalog.
    #[error("Unknown function: {0}")]
    UnknownFunction(String),
    /// The call named a known function with unusable arguments.
    #[error("Invalid arguments for {function}: {message}")]
    InvalidArguments {
        /// Function the arguments were meant for.
        function: &'static str,
        /// Deserialization failure detail.
        message: String,
    },
}

impl ToolInvocation {
    /// Decode a named call with JSON-object arguments.
    pub fn from_call(name: &str, arguments: Value) -> Result<Self, ToolCallError> {
        match name {
            SUMMARIZE_TEXT => parse(SUMMARIZE_TEXT, arguments).map(Self::SummarizeText),
            SUMMARIZE_VIDEO => parse(SUMMARIZE_VIDEO, arguments).map(Self::SummarizeVideo),
            other => Err(ToolCallError::UnknownFunction(other.to_string())),
        }
    }

    /// Text-summary invocation at the default length.
    pub fn text(text_content: impl Into<String>) -> Self {
        Self::SummarizeText(TextSummaryArgs {
            text_content: text_content.into(),
            summary_length: default_length(),
        })
    }

    /// Video-summary invocation at the default length.
    pub fn video(youtube_url: impl Into<String>) -> Self {
        Self::SummarizeVideo(VideoSummaryArgs {
            youtube_url: youtube_url.into(),
            summary_length: default_length(),
        })
    }

    /// Function name this invocation dispatches to.
    pub fn function_name(&self) -> &'static str {
        match self {
            Self::SummarizeText(_) => SUMMARIZE_TEXT,
            Self::SummarizeVideo(_) => SUMMARIZE_VIDEO,
        }
    }

    /// Arguments as a JSON object, with defaults filled in.
    pub fn arguments(&self) -> Value {
        match self {
            Self::SummarizeText(args) => json!({
                "text_content": args.text_content,
                "summary_length": args.summary_length,
            }),
            Self::SummarizeVideo(args) => json!({
                "youtube_url": args.youtube_url,
                "summary_length": args.summary_length,
            }),
        }
    }
}

fn parse<T: for<'de> Deserialize<'de>>(
    function: &'static str,
    arguments: Value,
) -> Result<T, ToolCallError> {
    serde_json::from_value(arguments).map_err(|error| ToolCallError::InvalidArguments {
        function,
        message: error.to_string(),
    })
}
