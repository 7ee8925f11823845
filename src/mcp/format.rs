//! Formatting helpers shared across MCP handlers and resources.

use crate::engine::{DEFAULT_LENGTH, LENGTH_PRESETS, Summary};
use rmcp::model::ResourceContents;
use serde::Serialize;
use serde_json::{Value, json};

pub(crate) const APPLICATION_JSON: &str = "application/json";

/// Length preset manifest returned by the `length-presets` resource.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LengthPresetsSnapshot {
    pub(crate) presets: Vec<LengthPreset>,
    pub(crate) default: &'static str,
    pub(crate) custom: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LengthPreset {
    pub(crate) name: &'static str,
    pub(crate) target_words: usize,
}

pub(crate) fn length_presets_snapshot() -> LengthPresetsSnapshot {
    LengthPresetsSnapshot {
        presets: LENGTH_PRESETS
            .iter()
            .map(|&(name, target_words)| LengthPreset { name, target_words })
            .collect(),
        default: DEFAULT_LENGTH,
        custom: "Any specifier containing digits uses the first digit run as the word target, e.g. '150' or '150 words'. Unrecognized values fall back to the default.",
    }
}

/// Structured payload for a completed summary.
pub(crate) fn summary_payload(summary: &Summary, summary_length: &str) -> Value {
    json!({
        "summary": summary.text,
        "summaryLength": summary_length,
        "targetWords": summary.target_words,
        "sourceWords": summary.source_words,
        "sourceSentences": summary.source_sentences,
        "selectedSentences": summary.selected_sentences,
        "passthrough": summary.passthrough,
    })
}

/// Serialize a value to JSON, falling back to compact formatting on error.
pub(crate) fn serialize_json<T: Serialize>(value: &T, context_uri: &str) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|error| {
        tracing::warn!(uri = context_uri, %error, "Failed to serialize JSON prettily");
        serde_json::to_string(value).unwrap_or_else(|_| "{}".into())
    })
}

/// Build JSON resource contents for MCP resource responses.
pub(crate) fn json_resource_contents(uri: &str, text: String) -> ResourceContents {
    ResourceContents::TextResourceContents {
        uri: uri.to_string(),
        mime_type: Some(APPLICATION_JSON.into()),
        text,
        meta: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::try_summarize_text;

    #[test]
    fn length_presets_serialize_in_order() {
        let value: Value = serde_json::from_str(&serialize_json(
            &length_presets_snapshot(),
            "mcp://length-presets",
        ))
        .expect("length presets must be valid JSON");
        assert_eq!(value["default"], "medium");
        assert_eq!(value["presets"][0], json!({ "name": "short", "targetWords": 75 }));
        assert_eq!(value["presets"][2]["targetWords"], 400);
    }

    #[test]
    fn summary_payload_carries_statistics() {
        let summary = try_summarize_text("One line only. Second line here.", "short")
            .expect("summary");
        let payload = summary_payload(&summary, "short");
        assert_eq!(payload["summary"], "One line only. Second line here.");
        assert_eq!(payload["summaryLength"], "short");
        assert_eq!(payload["targetWords"], 75);
        assert_eq!(payload["sourceSentences"], 2);
        assert_eq!(payload["passthrough"], true);
    }
}
