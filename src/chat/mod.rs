//! Conversational function routing.
//!
//! A prompt is sent to a function-calling model together with the tool catalog. The model
//! answers with text and/or function calls; [`router`] turns those into tool invocations (or
//! falls back to a keyword heuristic when the model called nothing), and the service executes
//! them.

mod gemini;
pub mod router;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::tools::ToolDescriptor;

pub use gemini::GeminiChatClient;
pub use router::{ChatResultPart, RoutedPart, fallback_invocation, route_parts};

/// Errors raised by chat providers.
#[derive(Debug, Error)]
pub enum ChatError {
    /// No provider is configured.
    #[error("Gemini client not available")]
    Unavailable,
    /// Transport failure or non-success status from the provider.
    #[error("Chat request failed: {0}")]
    RequestFailed(String),
    /// Provider response could not be interpreted.
    #[error("Malformed chat response: {0}")]
    InvalidResponse(String),
}

/// One piece of a model reply.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelPart {
    /// Free text produced by the model.
    Text(String),
    /// A request to call one of the declared functions.
    FunctionCall {
        /// Function name chosen by the model.
        name: String,
        /// Arguments supplied by the model, usually a JSON object.
        args: Value,
    },
}

/// Interface implemented by function-calling chat providers.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Send `prompt` with the declared `tools` and return the reply parts in order.
    async fn generate(
        &self,
        prompt: &str,
        tools: &[ToolDescriptor],
    ) -> Result<Vec<ModelPart>, ChatError>;
}
