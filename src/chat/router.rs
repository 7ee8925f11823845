//! Maps model reply parts onto tool invocations and response parts.

use serde::Serialize;
use serde_json::Value;

use super::ModelPart;
use crate::{
    tools::{ToolCallError, ToolInvocation},
    transcript::find_video_url,
};

/// One entry of a chat response, tagged by `type` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChatResultPart {
    /// A tool ran and produced a summary (or a sentinel error string).
    FunctionResult {
        /// Tool name.
        function: String,
        /// Arguments the tool ran with, defaults filled in.
        args: Value,
        /// Tool output.
        result: String,
    },
    /// A known tool was called with unusable arguments.
    FunctionError {
        /// Tool name.
        function: String,
        /// Why the call could not run.
        error: String,
    },
    /// The model called a function outside the catalog.
    UnknownFunction {
        /// Name the model used.
        function: String,
    },
    /// Free text from the model.
    Text {
        /// Text content.
        content: String,
    },
}

/// Routing decision for a single reply part.
#[derive(Debug, Clone, PartialEq)]
pub enum RoutedPart {
    /// Run this tool and report its output.
    Invoke(ToolInvocation),
    /// Nothing to run; report this part as-is.
    Ready(ChatResultPart),
}

/// Route every reply part, appending a heuristic invocation when the model called no function.
pub fn route_parts(prompt: &str, parts: Vec<ModelPart>) -> Vec<RoutedPart> {
    let mut function_called = false;
    let mut routed: Vec<RoutedPart> = parts
        .into_iter()
        .map(|part| match part {
            ModelPart::FunctionCall { name, args } => {
                function_called = true;
                route_call(&name, args)
            }
            ModelPart::Text(content) => RoutedPart::Ready(ChatResultPart::Text { content }),
        })
        .collect();

    if !function_called {
        if let Some(invocation) = fallback_invocation(prompt) {
            tracing::debug!(
                function = invocation.function_name(),
                "Model called no function; using prompt heuristic"
            );
            routed.push(RoutedPart::Invoke(invocation));
        }
    }
    routed
}

fn route_call(name: &str, args: Value) -> RoutedPart {
    let error = match ToolInvocation::from_call(name, args) {
        Ok(invocation) => return RoutedPart::Invoke(invocation),
        Err(error) => error,
    };
    let message = error.to_string();
    match error {
        ToolCallError::UnknownFunction(function) => {
            RoutedPart::Ready(ChatResultPart::UnknownFunction { function })
        }
        ToolCallError::InvalidArguments { function, .. } => {
            RoutedPart::Ready(ChatResultPart::FunctionError {
                function: function.to_string(),
                error: message,
            })
        }
    }
}

/// Guess the intended tool from the prompt alone.
///
/// Prompts mentioning a video are summarized only when they contain a recognizable video URL;
/// every other prompt is summarized as text.
pub fn fallback_invocation(prompt: &str) -> Option<ToolInvocation> {
    let lowered = prompt.to_lowercase();
    let mentions_video = ["youtube", "video", "youtu.be"]
        .iter()
        .any(|keyword| lowered.contains(keyword));

    if mentions_video {
        find_video_url(prompt).map(ToolInvocation::video)
    } else {
        Some(ToolInvocation::text(prompt))
    }
}
