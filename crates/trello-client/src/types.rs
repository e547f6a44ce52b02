use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Board / BoardList
// ---------------------------------------------------------------------------

/// Read-only projection of a board. Fetched fresh on every call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    pub id: String,
    pub name: String,
    /// Archived boards are filtered out of listings.
    #[serde(default)]
    pub closed: bool,
}

/// A list (column) inside a board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardList {
    pub id: String,
    pub name: String,
}

// ---------------------------------------------------------------------------
// Card
// ---------------------------------------------------------------------------

/// The slice of a created card we keep: identity and a link for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default, rename = "shortUrl")]
    pub short_url: Option<String>,
}

impl Card {
    /// Shortest usable link to the card.
    pub fn link(&self) -> &str {
        match self.short_url.as_deref() {
            Some(s) if !s.is_empty() => s,
            _ => &self.url,
        }
    }
}
