//! `gemini-client` — blocking client for the Gemini `generateContent` API.
//!
//! One operation: send the assembled planning prompt, pull the first
//! candidate's text part out of the response, and parse it as a JSON array of
//! calendar rows. Hashtag merging happens here too, so callers receive
//! display-ready [`planner_core::ContentItem`]s.
//!
//! No retries anywhere: a failed call surfaces a [`GeminiError`] and the
//! operator re-runs.

pub mod error;
pub mod types;


use planner_core::{ContentCalendar, PlanningRequest, Presets};
use std::time::Duration;

pub use error::{GeminiError, Result};
pub use types::{CalendarRow, GenerateContentRequest, GenerateContentResponse};

/// Default `generateContent` endpoint.
pub const GEMINI_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash-latest:generateContent";

/// Generation can be slow; give the model a generous bound.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(90);

// ---------------------------------------------------------------------------
// GeminiClient
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct GeminiClient {
    http: reqwest::blocking::Client,
    api_key: String,
    endpoint: String,
}

impl GeminiClient {
    /// Build a client for the given API key. An empty key fails immediately
    /// so the operator fixes configuration instead of watching a 401.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(GeminiError::MissingApiKey);
        }
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            api_key,
            endpoint: GEMINI_ENDPOINT.to_string(),
        })
    }

    /// Read the key from `GEMINI_API_KEY`.
    pub fn from_env() -> Result<Self> {
        Self::new(std::env::var("GEMINI_API_KEY").unwrap_or_default())
    }

    /// Point the client at a different endpoint (tests).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Generate the month's calendar for the given presets and request.
    pub fn generate_calendar(
        &self,
        presets: &Presets,
        request: &PlanningRequest,
    ) -> Result<ContentCalendar> {
        let body = GenerateContentRequest::planning(presets, request);
        tracing::debug!(month = %request.month, pillars = request.pillars.len(), "requesting calendar generation");

        let response = self
            .http
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()?;
        let raw = response.text()?;

        let text = extract_text(&raw)?;
        let calendar = parse_calendar(&text, &presets.base_hashtags)?;
        tracing::debug!(rows = calendar.len(), "calendar generated");
        Ok(calendar)
    }
}

/// Locate the first candidate's first text part.
///
/// Error responses (quota, bad key, safety blocks) have no such part, so the
/// raw payload ends up verbatim in the error message.
fn extract_text(raw: &str) -> Result<String> {
    let payload: GenerateContentResponse =
        serde_json::from_str(raw).map_err(|e| GeminiError::ResponseParse {
            reason: format!("body is not valid JSON: {e}"),
            raw: raw.to_string(),
        })?;
    payload
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content.parts.into_iter().next())
        .map(|p| p.text)
        .ok_or_else(|| GeminiError::ResponseParse {
            reason: "no candidate text part".to_string(),
            raw: raw.to_string(),
        })
}

/// Parse the model text as a calendar array and post-process every row.
pub fn parse_calendar(text: &str, base_tags: &[String]) -> Result<ContentCalendar> {
    let rows: Vec<CalendarRow> =
        serde_json::from_str(text).map_err(|source| GeminiError::Schema {
            text: text.to_string(),
            source,
        })?;
    let items = rows
        .into_iter()
        .map(|row| row.into_item(base_tags))
        .collect::<Result<Vec<_>>>()?;
    Ok(ContentCalendar::from(items))
}
