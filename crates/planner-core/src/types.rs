use crate::error::{PlannerError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// PostFormat
// ---------------------------------------------------------------------------

/// Post format the model is asked to choose from.
///
/// Wire names are the Portuguese labels the prompt dictates; English
/// spellings are accepted as aliases because the model occasionally drifts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostFormat {
    #[serde(rename = "Carrossel", alias = "Carousel", alias = "carrossel")]
    Carousel,
    #[serde(rename = "Reel", alias = "reel")]
    Reel,
    #[serde(rename = "Foto", alias = "Photo", alias = "foto")]
    Photo,
}

impl PostFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            PostFormat::Carousel => "Carrossel",
            PostFormat::Reel => "Reel",
            PostFormat::Photo => "Foto",
        }
    }
}

impl fmt::Display for PostFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// PlanningRequest
// ---------------------------------------------------------------------------

/// Parameters for one calendar generation. Built once per invocation.
#[derive(Debug, Clone, Serialize)]
pub struct PlanningRequest {
    /// Month to plan, free text the model understands (e.g. "Novembro 2025").
    pub month: String,
    /// Posts per week, 1 to 7.
    pub per_week: u8,
    /// Publishing days, free text (e.g. "segunda, quarta e sexta").
    pub days: String,
    /// Active content pillars for this run.
    pub pillars: Vec<String>,
}

impl PlanningRequest {
    pub fn new(
        month: impl Into<String>,
        per_week: u8,
        days: impl Into<String>,
        pillars: Vec<String>,
    ) -> Result<Self> {
        if !(1..=7).contains(&per_week) {
            return Err(PlannerError::InvalidFrequency(per_week));
        }
        if pillars.is_empty() {
            return Err(PlannerError::NoActivePillars);
        }
        Ok(Self {
            month: month.into(),
            per_week,
            days: days.into(),
            pillars,
        })
    }
}

// ---------------------------------------------------------------------------
// ContentItem / ContentCalendar
// ---------------------------------------------------------------------------

/// One planned post, after post-processing.
///
/// `hashtags` is already the flattened, space-joined string (deduplicated,
/// lowercased, base tags appended). Serialized field names follow the wire
/// vocabulary the model is instructed to emit, so JSON and CSV output line up
/// with the generation schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentItem {
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
    pub hashtags: String,
}

/// Ordered month of planned posts. Lives only in the session; a new
/// generation replaces it wholesale.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentCalendar {
    pub items: Vec<ContentItem>,
}

impl ContentCalendar {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ContentItem> {
        self.items.iter()
    }
}

impl From<Vec<ContentItem>> for ContentCalendar {
    fn from(items: Vec<ContentItem>) -> Self {
        Self { items }
    }
}

/// Check that a row date is a real `YYYY-MM-DD` calendar date.
pub fn validate_date(date: &str) -> Result<()> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| PlannerError::InvalidDate(date.to_string()))
}
