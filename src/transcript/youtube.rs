//! Caption fetching backed by the public YouTube watch page and timed-text endpoint.

use std::time::Duration;

use async_trait::async_trait;
use quick_xml::{Reader, events::Event};
use reqwest::Client;
use scraper::Html;
use serde::Deserialize;

use super::{TranscriptClient, TranscriptError};
use crate::config::Config;

const CAPTION_TRACKS_KEY: &str = "\"captionTracks\":";
const TEXT_TAG: &[u8] = b"text";

/// Transcript client that scrapes caption tracks from the watch page.
pub struct YouTubeTranscriptClient {
    http: Client,
    base_url: String,
    language: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CaptionTrack {
    base_url: String,
    #[serde(default)]
    language_code: String,
    #[serde(default)]
    kind: Option<String>,
}

impl CaptionTrack {
    fn is_generated(&self) -> bool {
        self.kind.as_deref() == Some("asr")
    }
}

impl YouTubeTranscriptClient {
    /// Build a client against `base_url`, preferring captions in `language`.
    pub fn new(base_url: impl Into<String>, language: impl Into<String>, timeout: Duration) -> Self {
        let http = Client::builder()
            .user_agent("rustysum/transcript")
            .timeout(timeout)
            .build()
            .expect("Failed to construct reqwest::Client for transcripts");
        Self {
            http,
            base_url: base_url.into(),
            language: language.into(),
        }
    }

    /// Build a client from the loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.youtube_base_url.clone(),
            config.transcript_language.clone(),
            Duration::from_secs(config.http_timeout_secs),
        )
    }

    fn watch_url(&self, video_id: &str) -> String {
        format!("{}/watch?v={video_id}", self.base_url.trim_end_matches('/'))
    }

    fn resolve_track_url(&self, track_url: &str) -> String {
        if track_url.starts_with('/') {
            format!("{}{track_url}", self.base_url.trim_end_matches('/'))
        } else {
            track_url.to_string()
        }
    }

    async fn get_text(&self, url: &str) -> Result<String, TranscriptError> {
        let response = self
            .http
            .get(url)
            .header("Accept-Language", "en-US")
            .send()
            .await
            .map_err(|error| TranscriptError::RequestFailed(format!("{url}: {error}")))?;

        if !response.status().is_success() {
            return Err(TranscriptError::RequestFailed(format!(
                "{url} returned {}",
                response.status()
            )));
        }

        response.text().await.map_err(|error| {
            TranscriptError::InvalidResponse(format!("failed to read body from {url}: {error}"))
        })
    }
}

#[async_trait]
impl TranscriptClient for YouTubeTranscriptClient {
    async fn fetch_transcript(&self, video_id: &str) -> Result<String, TranscriptError> {
        let page = self.get_text(&self.watch_url(video_id)).await?;
        let tracks = parse_caption_tracks(&page)?;
        let track = select_track(&tracks, &self.language).ok_or_else(|| {
            TranscriptError::Unavailable {
                video_id: video_id.to_string(),
            }
        })?;
        tracing::debug!(
            video_id,
            language = %track.language_code,
            generated = track.is_generated(),
            available = tracks.len(),
            "Selected caption track"
        );

        let xml = self.get_text(&self.resolve_track_url(&track.base_url)).await?;
        let entries = parse_timed_text(&xml)?;
        tracing::debug!(video_id, entries = entries.len(), "Fetched transcript");
        Ok(entries.join(" "))
    }
}

/// Read the `captionTracks` array embedded in a watch page; a page without one has no captions.
fn parse_caption_tracks(page: &str) -> Result<Vec<CaptionTrack>, TranscriptError> {
    let Some(position) = page.find(CAPTION_TRACKS_KEY) else {
        return Ok(Vec::new());
    };
    let mut deserializer =
        serde_json::Deserializer::from_str(&page[position + CAPTION_TRACKS_KEY.len()..]);
    Vec::<CaptionTrack>::deserialize(&mut deserializer)
        .map_err(|error| TranscriptError::InvalidResponse(format!("caption tracks: {error}")))
}

/// Prefer a manual track in `language`, then any track in `language`, then the first track.
fn select_track<'a>(tracks: &'a [CaptionTrack], language: &str) -> Option<&'a CaptionTrack> {
    let in_language = |track: &&CaptionTrack| track.language_code == language;
    tracks
        .iter()
        .filter(in_language)
        .find(|track| !track.is_generated())
        .or_else(|| tracks.iter().find(in_language))
        .or_else(|| tracks.first())
}

/// Extract caption entries from timed-text XML.
///
/// Entry bodies are escaped twice: the XML layer is unescaped by the reader, and the remaining
/// HTML fragment is parsed so its entities are decoded and inline markup drops out. Empty entries
/// are skipped.
fn parse_timed_text(xml: &str) -> Result<Vec<String>, TranscriptError> {
    let mut reader = Reader::from_str(xml);
    let mut entries = Vec::new();
    let mut current: Option<String> = None;

    loop {
        let event = reader.read_event().map_err(|error| {
            TranscriptError::InvalidResponse(format!(
                "timed text at byte {}: {error}",
                reader.buffer_position()
            ))
        })?;
        match event {
            Event::Start(tag) if tag.local_name().as_ref() == TEXT_TAG => {
                current = Some(String::new());
            }
            Event::Text(text) => {
                if let Some(body) = current.as_mut() {
                    let unescaped = text.unescape().map_err(|error| {
                        TranscriptError::InvalidResponse(format!("timed text entry: {error}"))
                    })?;
                    body.push_str(&unescaped);
                }
            }
            Event::CData(data) => {
                if let Some(body) = current.as_mut() {
                    body.push_str(&String::from_utf8_lossy(&data));
                }
            }
            Event::End(tag) if tag.local_name().as_ref() == TEXT_TAG => {
                if let Some(body) = current.take().filter(|body| !body.is_empty()) {
                    entries.push(fragment_text(&body));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(entries)
}

/// Text content of an HTML fragment, entities decoded and tags removed.
fn fragment_text(fragment: &str) -> String {
    Html::parse_fragment(fragment)
        .root_element()
        .text()
        .collect()
}
