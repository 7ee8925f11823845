//! JSON schema builders for the summarization tools.

use serde_json::{Map, Value};

use crate::engine::DEFAULT_LENGTH;

const SUMMARY_LENGTH_DESCRIPTION: &str = "Length of summary. Can be: 1) Predefined: 'short' (50-100 words), 'medium' (150-250 words), 'long' (300-500 words), 2) Numeric: '100', '200', '300', 3) Text with units: '100 words', '200 words'. Defaults to 'medium' if not provided.";

/// Parameters accepted by `summarize_text_content`.
pub(crate) fn text_parameters_schema() -> Map<String, Value> {
    let mut properties = Map::new();
    properties.insert(
        "text_content".into(),
        string_schema("The text content to summarize"),
    );
    properties.insert("summary_length".into(), summary_length_schema());
    object_schema(properties, &["text_content"])
}

/// Parameters accepted by `summarize_youtube_video`.
pub(crate) fn video_parameters_schema() -> Map<String, Value> {
    let mut properties = Map::new();
    properties.insert(
        "youtube_url".into(),
        string_schema("The YouTube video URL to summarize"),
    );
    properties.insert("summary_length".into(), summary_length_schema());
    object_schema(properties, &["youtube_url"])
}

/// Close a parameters schema against unknown keys, for hosts that honour it.
pub(crate) fn strict(mut schema: Map<String, Value>) -> Map<String, Value> {
    schema.insert("additionalProperties".into(), Value::Bool(false));
    schema
}

fn summary_length_schema() -> Value {
    let mut schema = Map::new();
    schema.insert("type".into(), Value::String("string".into()));
    schema.insert(
        "description".into(),
        Value::String(SUMMARY_LENGTH_DESCRIPTION.into()),
    );
    schema.insert("default".into(), Value::String(DEFAULT_LENGTH.into()));
    Value::Object(schema)
}

fn string_schema(description: &str) -> Value {
    let mut schema = Map::new();
    schema.insert("type".into(), Value::String("string".into()));
    schema.insert("description".into(), Value::String(description.into()));
    Value::Object(schema)
}

fn object_schema(properties: Map<String, Value>, required: &[&str]) -> Map<String, Value> {
    let mut schema = Map::new();
    schema.insert("type".into(), Value::String("object".into()));
    schema.insert("properties".into(), Value::Object(properties));
    if !required.is_empty() {
        schema.insert(
            "required".into(),
            Value::Array(
                required
                    .iter()
                    .map(|&key| Value::String(key.into()))
                    .collect(),
            ),
        );
    }
    schema
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_schema_requires_url_only() {
        let schema = video_parameters_schema();
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["required"], serde_json::json!(["youtube_url"]));
        assert_eq!(schema["properties"]["summary_length"]["default"], "medium");
        assert!(!schema.contains_key("additionalProperties"));
    }

    #[test]
    fn strict_schema_rejects_unknown_keys() {
        let schema = strict(text_parameters_schema());
        assert_eq!(schema["required"], serde_json::json!(["text_content"]));
        assert_eq!(schema["additionalProperties"], false);
    }
}
