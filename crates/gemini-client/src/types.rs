use crate::error::{GeminiError, Result};
use planner_core::hashtags::merge_hashtags;
use planner_core::prompt;
use planner_core::types::validate_date;
use planner_core::{ContentItem, PlanningRequest, PostFormat, Presets};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Request body
// ---------------------------------------------------------------------------

/// `generateContent` request body. Field casing follows the v1beta REST API:
/// `system_instruction` and `response_mime_type` are snake_case while
/// `generationConfig` is camelCase.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    pub system_instruction: Content,
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    /// Assemble the planning request: fixed persona as system instruction,
    /// one user-role message, and strict JSON output mode.
    pub fn planning(presets: &Presets, request: &PlanningRequest) -> Self {
        Self {
            system_instruction: Content::text(None, prompt::system_instruction(presets)),
            contents: vec![Content::text(
                Some("user"),
                prompt::user_instruction(presets, request),
            )],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<Part>,
}

impl Content {
    fn text(role: Option<&str>, text: String) -> Self {
        Self {
            role: role.map(str::to_string),
            parts: vec![Part { text }],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationConfig {
    pub response_mime_type: String,
}

// ---------------------------------------------------------------------------
// Response body
// ---------------------------------------------------------------------------

/// The slice of the `generateContent` response we consume: the first
/// candidate's first text part. Everything else is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: CandidateContent,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<Part>,
}

// ---------------------------------------------------------------------------
// CalendarRow (the model's wire schema)
// ---------------------------------------------------------------------------

/// One row exactly as the model emits it: Portuguese field names, hashtags
/// still an array. Converted to a [`ContentItem`] during post-processing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarRow {
    #[serde(rename = "data")]
    pub date: String,
    #[serde(rename = "pilar")]
    pub pillar: String,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "formato")]
    pub format: PostFormat,
    #[serde(rename = "gancho", default)]
    pub hook: String,
    #[serde(rename = "legenda", default)]
    pub caption: String,
    #[serde(rename = "cta", default)]
    pub call_to_action: String,
    #[serde(default)]
    pub hashtags: Vec<String>,
}

impl CalendarRow {
    /// Validate the row date and merge the hashtag column with the base set.
    pub fn into_item(self, base_tags: &[String]) -> Result<ContentItem> {
        validate_date(&self.date).map_err(|e| GeminiError::InvalidRow(e.to_string()))?;
        let hashtags = merge_hashtags(&self.hashtags, base_tags);
        Ok(ContentItem {
            date: self.date,
            pillar: self.pillar,
            title: self.title,
            format: self.format,
            hook: self.hook,
            caption: self.caption,
            call_to_action: self.call_to_action,
            hashtags,
        })
    }
}
