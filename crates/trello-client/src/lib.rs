//! `trello-client` — thin authenticated wrapper over the Trello REST API.
//!
//! Three operations: list the member's open boards, list the lists of a
//! board, create a card with optional due date and labels. Every call is a
//! live blocking round trip; nothing is cached. Key and token travel as
//! query parameters, the way the Trello API expects them.
//!
//! Label attachment is best-effort: labels are cosmetic, so a failed label
//! call is logged and swallowed rather than failing the card.

pub mod error;
pub mod types;

#[cfg(test)]
mod tests;

use std::time::Duration;

pub use error::{Result, TrelloError};
pub use types::{Board, BoardList, Card};

/// Trello REST API root.
pub const TRELLO_API: &str = "https://api.trello.com/1";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
/// Label calls are secondary; give up sooner.
const LABEL_TIMEOUT: Duration = Duration::from_secs(20);

// ---------------------------------------------------------------------------
// TrelloClient
// ---------------------------------------------------------------------------

pub struct TrelloClient {
    http: reqwest::blocking::Client,
    key: String,
    token: String,
    base_url: String,
}

impl TrelloClient {
    /// Build a client for the given key + token pair. Either one empty fails
    /// construction: the operator must fix configuration first.
    pub fn new(key: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let key = key.into();
        let token = token.into();
        if key.is_empty() || token.is_empty() {
            return Err(TrelloError::MissingCredentials);
        }
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            key,
            token,
            base_url: TRELLO_API.to_string(),
        })
    }

    /// Read credentials from `TRELLO_KEY` / `TRELLO_TOKEN`.
    pub fn from_env() -> Result<Self> {
        Self::new(
            std::env::var("TRELLO_KEY").unwrap_or_default(),
            std::env::var("TRELLO_TOKEN").unwrap_or_default(),
        )
    }

    /// Point the client at a different API root (tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn auth(&self) -> [(&'static str, &str); 2] {
        [("key", self.key.as_str()), ("token", self.token.as_str())]
    }

    /// All non-archived boards of the authenticated member.
    pub fn member_boards(&self) -> Result<Vec<Board>> {
        let url = format!("{}/members/me/boards", self.base_url);
        let response = self.http.get(&url).query(&self.auth()).send()?;
        let boards: Vec<Board> = check(response)?.json()?;
        Ok(boards.into_iter().filter(|b| !b.closed).collect())
    }

    /// The lists of one board.
    pub fn board_lists(&self, board_id: &str) -> Result<Vec<BoardList>> {
        let url = format!("{}/boards/{}/lists", self.base_url, board_id);
        let response = self.http.get(&url).query(&self.auth()).send()?;
        Ok(check(response)?.json()?)
    }

    /// Create a card in `list_id`. `due` is passed verbatim; the API accepts
    /// `YYYY-MM-DD` or full ISO-8601. Each label is attached with a separate
    /// call whose failure does not fail the card.
    pub fn create_card(
        &self,
        list_id: &str,
        name: &str,
        desc: &str,
        due: Option<&str>,
        labels: &[String],
    ) -> Result<Card> {
        let url = format!("{}/cards", self.base_url);
        let mut params: Vec<(&str, &str)> = vec![
            ("key", &self.key),
            ("token", &self.token),
            ("idList", list_id),
            ("name", name),
            ("desc", desc),
        ];
        if let Some(due) = due {
            params.push(("due", due));
        }
        let response = self.http.post(&url).query(&params).send()?;
        let card: Card = check(response)?.json()?;

        for label in labels {
            if let Err(err) = self.attach_label(&card.id, label) {
                tracing::warn!(card = %card.id, label = %label, %err, "label attachment failed, keeping card");
            }
        }
        Ok(card)
    }

    /// Attach an uncolored named label. The API wants the literal string
    /// "null" for colorless labels.
    fn attach_label(&self, card_id: &str, name: &str) -> Result<()> {
        let url = format!("{}/cards/{}/labels", self.base_url, card_id);
        let params: [(&str, &str); 4] = [
            ("key", &self.key),
            ("token", &self.token),
            ("color", "null"),
            ("name", name),
        ];
        let response = self
            .http
            .post(&url)
            .timeout(LABEL_TIMEOUT)
            .query(&params)
            .send()?;
        check(response)?;
        Ok(())
    }
}

/// Map a non-2xx response to [`TrelloError::Api`] with status and body.
fn check(response: reqwest::blocking::Response) -> Result<reqwest::blocking::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let url = response.url().to_string();
    let body = response.text().unwrap_or_default();
    Err(TrelloError::Api {
        status: status.as_u16(),
        url,
        body,
    })
}
